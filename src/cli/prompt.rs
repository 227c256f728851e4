// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive prompts with a default answer.

use std::io::{self, BufRead, Write};

use super::Verbosity;

/// Ask for a value, showing `default` in brackets. An empty answer (or end of
/// input) takes the default.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> io::Result<String> {
    write!(output, "{} [{}]: ", label, default)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Ask for the output level (0, 1, 2). Out-of-range numbers are clamped; an
/// answer that isn't a number falls back to `default` with a note.
pub fn ask_verbosity<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: Verbosity,
) -> io::Result<Verbosity> {
    let default_level = default.level().to_string();
    let answer = ask(input, output, "Enter level of output (0, 1, 2)", &default_level)?;

    match answer.parse::<i64>() {
        Ok(level) => Ok(Verbosity::from_level(level)),
        Err(_) => {
            writeln!(output, "'{}' is not a level, using {}", answer, default_level)?;
            Ok(default)
        }
    }
}
