// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dynamic-programming cost matrix.
//!
//! `D[i][j]` is the cheapest way to turn the first `i` source symbols into the
//! first `j` target symbols. A vertical move deletes a source symbol, a
//! horizontal move inserts a target symbol, and a diagonal move is either a
//! no-op (same symbol, cost 0) or a substitution.
//!
//! Only the minimum is stored. Which of several equal-cost predecessors the
//! alignment uses is decided later by [`crate::backtrack`].

use tracing::{debug, trace};

use crate::types::{CostWeights, DistanceMatrix, Grid};
use crate::verify::contracts::check_distance_matrix;

/// Compute the edit distance and the full cost matrix.
///
/// Returns `(distance, matrix)` with `distance == matrix[m][n]`. If the target
/// is empty no grid is built: the result is `(source.len(), Grid::empty())`.
/// Costs saturate at `usize::MAX`, so any weights are accepted.
///
/// The pair is expected to be tall (`source.len() >= target.len()`), which
/// [`crate::verify::TallPair`] guarantees. The recurrence does not depend on
/// it; only the shape of the matrix does.
///
/// # Example
///
/// ```
/// use levtrace::{compute, CostWeights};
///
/// let source: Vec<char> = "lawn".chars().collect();
/// let target: Vec<char> = "flaw".chars().collect();
/// let (distance, matrix) = compute(&source, &target, CostWeights::UNIT);
/// assert_eq!(distance, 2);
/// assert_eq!(matrix.row(4), &[4, 4, 4, 3, 2]);
/// ```
pub fn compute(source: &[char], target: &[char], weights: CostWeights) -> (usize, DistanceMatrix) {
    if target.is_empty() {
        debug!(source_len = source.len(), "empty target, no matrix built");
        return (source.len(), Grid::empty());
    }

    let rows = source.len() + 1;
    let cols = target.len() + 1;
    let mut dist = Grid::filled(rows, cols, 0usize);

    for row in 1..rows {
        dist.set(row, 0, row.saturating_mul(weights.delete));
    }
    for col in 1..cols {
        dist.set(0, col, col.saturating_mul(weights.insert));
    }

    // Columns outer, rows inner. Either order works as long as the up, left
    // and diagonal neighbours are filled first.
    for col in 1..cols {
        for row in 1..rows {
            let (s, t) = (source[row - 1], target[col - 1]);

            // Costs saturate at usize::MAX instead of wrapping
            let del_cost = dist[(row - 1, col)].saturating_add(weights.delete);
            let ins_cost = dist[(row, col - 1)].saturating_add(weights.insert);
            let sub_cost = if s == t {
                dist[(row - 1, col - 1)]
            } else {
                dist[(row - 1, col - 1)].saturating_add(weights.substitute)
            };

            let best = del_cost.min(ins_cost).min(sub_cost);
            trace!(
                row,
                col,
                source = %s,
                target = %t,
                del_cost,
                ins_cost,
                sub_cost,
                best,
                "cell"
            );
            dist.set(row, col, best);
        }
    }

    let distance = dist[(rows - 1, cols - 1)];
    check_distance_matrix(source, target, weights, &dist);
    debug!(rows, cols, distance, "cost matrix computed");

    (distance, dist)
}

/// Just the distance, for callers that don't need the matrix.
pub fn distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    if source.len() >= target.len() {
        compute(&source, &target, CostWeights::UNIT).0
    } else {
        compute(&target, &source, CostWeights::UNIT).0
    }
}
