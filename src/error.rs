// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the alignment pipeline.
//!
//! Everything here is a precondition failure at the boundary. The core never
//! retries or recovers: a well-formed pair always produces a distance, a path
//! and a trace.

use thiserror::Error;

/// Error type for the alignment operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The distance matrix is empty because the target sequence was empty.
    /// There is no path to trace back through.
    #[error("degenerate input: {0} has no matrix to traverse (target sequence is empty)")]
    DegenerateInput(&'static str),

    /// The sparse path matrix has no marked successor at this cell.
    #[error("broken path: no marked neighbour after cell ({row}, {col})")]
    BrokenPath { row: usize, col: usize },

    /// Similarity ratio of two empty sequences (division by zero).
    #[error("similarity ratio is undefined for two empty sequences")]
    UndefinedRatio,

    /// Cost weights could not be parsed from `d,i,s`.
    #[error("invalid cost weights '{input}': {reason}")]
    InvalidWeights { input: String, reason: String },
}

/// Result alias for alignment operations.
pub type Result<T> = std::result::Result<T, AlignError>;

impl AlignError {
    pub(crate) fn invalid_weights<S: Into<String>>(input: &str, reason: S) -> Self {
        AlignError::InvalidWeights {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
