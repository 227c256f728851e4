// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levtrace command-line interface.
//!
//! Both words are optional on the command line. Whatever is missing is asked
//! for interactively when stdin is a terminal, after a short introduction and
//! the example list, with `lawn` / `flaw` offered as defaults; in a pipeline
//! the defaults are used silently. The result is a
//! [`Config`] that is passed explicitly to the run function. There is no
//! global verbosity flag.

pub mod display;
pub mod prompt;

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use levtrace::CostWeights;

/// Word used when no source is given.
pub const DEFAULT_SOURCE: &str = "lawn";
/// Word used when no target is given.
pub const DEFAULT_TARGET: &str = "flaw";

/// Shown before the prompts on an interactive run.
const INTRO: &str = "\
Demonstrate computation of Levenshtein Distance (LD) between two words.
Determine the minimum number of edits to transform source word into target word.
For example, how many substitutions, insertions, or deletions are required to
turn 'house' into 'home'?  (Answer: 2)

The default cost for all edit operations is 1.

Output level: 0 = return only the LD
              1 = return LD plus distance, minimum path, and operations matrices
              2 = also log every computation and backtracking move to stderr";

const EXAMPLES: &str = "\
Examples (distance with unit costs):
  abc       -> xyz        LD: 3
  kitten    -> sitting    LD: 3
  intention -> execution  LD: 5
  manahaton -> manhattan  LD: 3
  00101010  -> 110110     LD: 3
  house     -> home       LD: 2";

#[derive(Parser, Debug)]
#[command(
    name = "levtrace",
    about = "Levenshtein distance, alignment path and step-by-step edits between two words",
    long_about = "Computes the minimum number of edits (insert, delete, substitute) that turn \
                  the source word into the target word, shows the minimum-cost path through \
                  the distance matrix, and replays the edits one at a time.",
    after_help = EXAMPLES,
    version
)]
pub struct Cli {
    /// Source word (prompted for when omitted)
    pub source: Option<String>,

    /// Target word (prompted for when omitted)
    pub target: Option<String>,

    /// Output level: 0 = distance only, 1 = matrices and edits, 2 = also log every
    /// cell and move to stderr
    #[arg(short, long, value_enum)]
    pub verbosity: Option<Verbosity>,

    /// Edit costs as delete,insert,substitute
    #[arg(short, long, default_value_t = CostWeights::UNIT)]
    pub weights: CostWeights,

    /// Keep letter case (input is lower-cased by default; case affects distance)
    #[arg(long)]
    pub keep_case: bool,

    /// Print the full alignment as JSON
    #[cfg(feature = "json")]
    #[arg(long)]
    pub json: bool,
}

/// How much the CLI prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Verbosity {
    /// Distance and ratio only
    #[value(name = "0")]
    Quiet,
    /// Final matrices and sequential edits
    #[default]
    #[value(name = "1")]
    Matrices,
    /// Everything, plus per-cell and per-move trace logging
    #[value(name = "2")]
    Steps,
}

impl Verbosity {
    /// Map a numeric level, clamping out-of-range values into `0..=2`.
    pub fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Verbosity::Quiet,
            1 => Verbosity::Matrices,
            _ => Verbosity::Steps,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Matrices => 1,
            Verbosity::Steps => 2,
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: String,
    pub target: String,
    pub weights: CostWeights,
    pub verbosity: Verbosity,
    pub json: bool,
}

impl Cli {
    /// Resolve missing values, prompting on a terminal.
    pub fn into_config(self) -> io::Result<Config> {
        let interactive = atty::is(atty::Stream::Stdin);
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.resolve(interactive, &mut input, &mut output)
    }

    /// Resolve against explicit streams. Prompts only if `interactive` and a
    /// word is missing; the verbosity prompt is offered in that case too.
    pub fn resolve<R: BufRead, W: Write>(
        self,
        interactive: bool,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Config> {
        let prompting = interactive && (self.source.is_none() || self.target.is_none());
        if prompting {
            writeln!(output, "{}\n\n{}\n", INTRO, EXAMPLES)?;
        }

        let source = match self.source {
            Some(word) => word,
            None if prompting => {
                prompt::ask(input, output, "Enter first word (source)", DEFAULT_SOURCE)?
            }
            None => DEFAULT_SOURCE.to_string(),
        };
        let target = match self.target {
            Some(word) => word,
            None if prompting => {
                prompt::ask(input, output, "Enter second word (target)", DEFAULT_TARGET)?
            }
            None => DEFAULT_TARGET.to_string(),
        };
        let verbosity = match self.verbosity {
            Some(v) => v,
            None if prompting => prompt::ask_verbosity(input, output, Verbosity::default())?,
            None => Verbosity::default(),
        };

        let normalize = |word: String| {
            let word = word.trim();
            if self.keep_case {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        };

        Ok(Config {
            source: normalize(source),
            target: normalize(target),
            weights: self.weights,
            verbosity,
            #[cfg(feature = "json")]
            json: self.json,
            #[cfg(not(feature = "json"))]
            json: false,
        })
    }
}
