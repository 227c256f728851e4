// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Backward path selection through a finished cost matrix.
//!
//! Starting at `(m, n)`, each step looks at the three cells adjacent to the
//! cursor (up, left, up-left) and moves into exactly one of them until the
//! origin is reached. Several minimum-cost alignments can exist; the fixed
//! priority below picks one of them, so the same input always yields the
//! same path.
//!
//! # Move priority (first match wins)
//!
//! 1. **Diagonal**: the up-left value is the smallest of the three neighbours
//!    and equals the current value or the current value minus one. This
//!    admits both no-op diagonals and unit-cost substitutions.
//! 2. **Left** (insert): the left value is not greater than the current one.
//! 3. **Up** (delete): otherwise.
//!
//! On column 0 only "up" is possible, and on row 0 only "left".
//!
//! The forward walk in [`crate::script`] uses its own, different priority.
//! The two are not mirror images of each other; changing either one changes
//! the edit trace on inputs with tied alignments.

use tracing::{debug, trace};

use crate::error::{AlignError, Result};
use crate::types::{DistanceMatrix, Grid, SparsePathMatrix};
use crate::verify::contracts::check_path_matches_distances;

/// A single backward move of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Diagonal,
    Left,
    Up,
}

impl Step {
    /// Apply the move to a cursor position.
    #[inline]
    fn apply(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Step::Diagonal => (row - 1, col - 1),
            Step::Left => (row, col - 1),
            Step::Up => (row - 1, col),
        }
    }
}

/// Pick the next move from `(row, col)`. The cursor must not be at the origin.
pub fn choose_step(dist: &DistanceMatrix, row: usize, col: usize) -> Step {
    debug_assert!(row > 0 || col > 0, "no step out of the origin");

    if col == 0 {
        return Step::Up;
    }
    if row == 0 {
        return Step::Left;
    }

    let here = dist[(row, col)];
    let up = dist[(row - 1, col)];
    let left = dist[(row, col - 1)];
    let diag = dist[(row - 1, col - 1)];

    if diag == up.min(left).min(diag) && (diag == here || diag.saturating_add(1) == here) {
        Step::Diagonal
    } else if left <= here {
        Step::Left
    } else {
        Step::Up
    }
}

/// Select one minimum-cost path from `(m, n)` back to `(0, 0)`.
///
/// The returned matrix has the shape of `dist`. Cells on the path hold their
/// distance value and every other cell is `None`. `source` and `target` are
/// only used for trace output.
///
/// Fails with [`AlignError::DegenerateInput`] when `dist` is empty, which is
/// what [`crate::compute`] returns for an empty target.
pub fn backtrack(source: &[char], target: &[char], dist: &DistanceMatrix) -> Result<SparsePathMatrix> {
    if dist.is_empty() {
        return Err(AlignError::DegenerateInput("backtrack"));
    }

    let rows = dist.rows() - 1;
    let cols = dist.cols() - 1;
    let mut path: SparsePathMatrix = Grid::filled(rows + 1, cols + 1, None);

    path.set(0, 0, Some(0));
    path.set(rows, cols, Some(dist[(rows, cols)]));

    let (mut row, mut col) = (rows, cols);
    let mut moves = 0usize;

    while (row, col) != (0, 0) {
        let step = choose_step(dist, row, col);
        let (next_row, next_col) = step.apply(row, col);

        // Mark the cell being moved into, not the one being left.
        let cost = dist[(next_row, next_col)];
        path.set(next_row, next_col, Some(cost));

        trace!(
            from = ?(row, col),
            to = ?(next_row, next_col),
            ?step,
            source = ?row.checked_sub(1).and_then(|i| source.get(i)),
            target = ?col.checked_sub(1).and_then(|j| target.get(j)),
            cost,
            "backtrack"
        );

        row = next_row;
        col = next_col;
        moves += 1;
    }

    check_path_matches_distances(dist, &path);
    debug!(moves, distance = dist[(rows, cols)], "path selected");

    Ok(path)
}
