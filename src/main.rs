// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use levtrace::{align, TallPair};

mod cli;
use cli::display::{render_report, Style};
use cli::{Cli, Config, Verbosity};

/// `LEVTRACE_LOG` wins; otherwise level 2 turns on the per-cell events.
fn init_logging(verbosity: Verbosity) {
    let fallback = if verbosity >= Verbosity::Steps {
        "levtrace=trace"
    } else {
        "warn"
    };

    // Logs go to stderr, stdout carries the report (or JSON)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env("LEVTRACE_LOG").unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn run(config: &Config) -> Result<()> {
    let pair = TallPair::new(config.source.as_str(), config.target.as_str());
    info!(
        source = %pair.source(),
        target = %pair.target(),
        swapped = pair.swapped(),
        weights = %config.weights,
        "aligning"
    );

    let alignment = align(&pair, config.weights).with_context(|| {
        format!(
            "failed to align '{}' with '{}'",
            config.source, config.target
        )
    })?;

    if config.json {
        print_json(&alignment)?;
    } else {
        print!("{}", render_report(&alignment, config.verbosity, Style::detect()));
    }

    Ok(())
}

#[cfg(feature = "json")]
fn print_json(alignment: &levtrace::Alignment) -> Result<()> {
    let json = serde_json::to_string_pretty(alignment).context("failed to serialize alignment")?;
    println!("{}", json);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json(_alignment: &levtrace::Alignment) -> Result<()> {
    anyhow::bail!("levtrace was built without the `json` feature")
}

fn main() -> ExitCode {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.verbosity);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
