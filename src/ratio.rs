// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized similarity ratio.
//!
//! `ratio = ((m + n) - d') / (m + n)` where `d'` is the distance under weights
//! `(1, 1, 2)`. Doubling the substitution cost makes a substitution worth a
//! deletion plus an insertion, so `d' ≤ m + n` and the ratio stays in `[0, 1]`.

use tracing::debug;

use crate::error::{AlignError, Result};
use crate::matrix::compute;
use crate::types::CostWeights;

/// Similarity of two sequences in `[0, 1]`; `1.0` means identical.
///
/// Fails with [`AlignError::UndefinedRatio`] when both sequences are empty.
///
/// # Example
///
/// ```
/// use levtrace::ratio;
///
/// let lawn: Vec<char> = "lawn".chars().collect();
/// let flaw: Vec<char> = "flaw".chars().collect();
/// assert_eq!(ratio(&lawn, &flaw).unwrap(), 0.75);
/// ```
pub fn ratio(source: &[char], target: &[char]) -> Result<f64> {
    let total = source.len() + target.len();
    if total == 0 {
        return Err(AlignError::UndefinedRatio);
    }

    let (distance, _) = compute(source, target, CostWeights::RATIO);
    // compute() reports the bare source length for an empty target, which is
    // already the (1,1,2) cost of deleting every symbol.
    let ratio = (total - distance) as f64 / total as f64;

    debug!(distance, total, ratio, "similarity ratio");
    Ok(ratio)
}
