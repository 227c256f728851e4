// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the alignment pipeline.
//!
//! Debug-mode assertions that each stage hands a well-formed result to the
//! next one. They compile to nothing in release builds (`debug_assert!`), and
//! every unit, property and fuzz test runs them for free.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function               | Checked after    | Property                              |
//! |---------------------------------|------------------|---------------------------------------|
//! | `check_distance_matrix`         | `compute`        | Borders and min-recurrence            |
//! | `check_path_matches_distances`  | `backtrack`      | Path values, connectivity, length     |
//! | `check_ops_follow_path`         | `build_trace`    | One tag per path cell, right direction|
//! | `check_trace_reaches_target`    | `build_trace`    | Last state equals the target          |

use crate::types::{CostWeights, DistanceMatrix, EditOp, EditTrace, OperationMatrix, SparsePathMatrix};

// ============================================================================
// DISTANCE MATRIX CONTRACTS
// ============================================================================

/// Check the border values and the recurrence of every interior cell.
///
/// ```text
/// D[0][0] = 0
/// D[i][0] = i · delete
/// D[0][j] = j · insert
/// D[i][j] = min(D[i-1][j] + delete, D[i][j-1] + insert, D[i-1][j-1] + sub(i, j))
/// ```
///
/// # Panics (debug builds only)
/// Panics on the first cell that breaks the recurrence.
#[inline]
pub fn check_distance_matrix(source: &[char], target: &[char], weights: CostWeights, dist: &DistanceMatrix) {
    if !cfg!(debug_assertions) || dist.is_empty() {
        return;
    }

    debug_assert_eq!(
        (dist.rows(), dist.cols()),
        (source.len() + 1, target.len() + 1),
        "Contract violation: DistanceMatrix shape"
    );
    debug_assert_eq!(dist[(0, 0)], 0, "Contract violation: DistanceMatrix origin");

    for row in 1..dist.rows() {
        debug_assert_eq!(
            dist[(row, 0)],
            row.saturating_mul(weights.delete),
            "Contract violation: DistanceMatrix first column at row {}",
            row
        );
    }
    for col in 1..dist.cols() {
        debug_assert_eq!(
            dist[(0, col)],
            col.saturating_mul(weights.insert),
            "Contract violation: DistanceMatrix first row at col {}",
            col
        );
    }

    for row in 1..dist.rows() {
        for col in 1..dist.cols() {
            let sub = if source[row - 1] == target[col - 1] {
                0
            } else {
                weights.substitute
            };
            let expected = dist[(row - 1, col)]
                .saturating_add(weights.delete)
                .min(dist[(row, col - 1)].saturating_add(weights.insert))
                .min(dist[(row - 1, col - 1)].saturating_add(sub));
            debug_assert_eq!(
                dist[(row, col)],
                expected,
                "Contract violation: DistanceMatrix recurrence at ({}, {})",
                row,
                col
            );
        }
    }
}

// ============================================================================
// PATH CONTRACTS
// ============================================================================

/// Check that the sparse path is a connected monotone chain from the origin to
/// the final cell and that every marked value matches the distance matrix.
///
/// A chain of single steps from `(0,0)` to `(m,n)` has between `max(m,n)` and
/// `m+n` moves, so it marks between `max(m,n)+1` and `m+n+1` cells.
///
/// # Panics (debug builds only)
/// Panics if a marked value disagrees with `dist`, a marked cell has no marked
/// successor, or the path length is out of range.
#[inline]
pub fn check_path_matches_distances(dist: &DistanceMatrix, path: &SparsePathMatrix) {
    if !cfg!(debug_assertions) || path.is_empty() {
        return;
    }

    let m = path.rows() - 1;
    let n = path.cols() - 1;

    debug_assert_eq!(path[(0, 0)], Some(0), "Contract violation: path origin not marked 0");
    debug_assert!(path.is_marked(m, n), "Contract violation: path final cell not marked");

    for row in 0..=m {
        for col in 0..=n {
            let Some(value) = path[(row, col)] else {
                continue;
            };
            debug_assert_eq!(
                value,
                dist[(row, col)],
                "Contract violation: path value at ({}, {}) differs from distance matrix",
                row,
                col
            );
            if (row, col) != (m, n) {
                let has_successor = path.is_marked(row + 1, col)
                    || path.is_marked(row, col + 1)
                    || path.is_marked(row + 1, col + 1);
                debug_assert!(
                    has_successor,
                    "Contract violation: path dead-ends at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    let marked = path.path_len();
    debug_assert!(
        marked > m.max(n) && marked <= m + n + 1,
        "Contract violation: path marks {} cells for a {}x{} matrix",
        marked,
        m + 1,
        n + 1
    );
}

/// Check that every path cell except the origin carries an operation tag, that
/// no other cell does, and that each tag points back to a marked predecessor.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_ops_follow_path(path: &SparsePathMatrix, ops: &OperationMatrix) {
    if !cfg!(debug_assertions) {
        return;
    }

    for row in 0..path.rows() {
        for col in 0..path.cols() {
            let op = ops[(row, col)];
            if (row, col) == (0, 0) {
                debug_assert_eq!(op, None, "Contract violation: origin carries an operation");
                continue;
            }

            debug_assert_eq!(
                op.is_some(),
                path.is_marked(row, col),
                "Contract violation: operation tag at ({}, {}) does not match the path",
                row,
                col
            );

            let predecessor = match op {
                Some(EditOp::Delete) => row.checked_sub(1).map(|r| (r, col)),
                Some(EditOp::Insert) => col.checked_sub(1).map(|c| (row, c)),
                Some(EditOp::Substitute) => row.checked_sub(1).zip(col.checked_sub(1)),
                None => continue,
            };
            debug_assert!(
                predecessor.is_some_and(|(r, c)| path.is_marked(r, c)),
                "Contract violation: {:?} at ({}, {}) has no marked predecessor",
                op,
                row,
                col
            );
        }
    }
}

// ============================================================================
// TRACE CONTRACTS
// ============================================================================

/// Check that the trace ends in the target and that every step changes the
/// working length the way its operation says.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_trace_reaches_target(trace: &EditTrace, target: &[char]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let expected: String = target.iter().collect();
    debug_assert_eq!(
        trace.final_text(),
        Some(expected.as_str()),
        "Contract violation: edit trace does not end in the target"
    );

    for pair in trace.steps().windows(2) {
        let before = pair[0].text.chars().count();
        let after = pair[1].text.chars().count();
        let expected_after = match pair[1].edit.map(|edit| edit.op) {
            Some(EditOp::Delete) => before.checked_sub(1),
            Some(EditOp::Insert) => Some(before + 1),
            Some(EditOp::Substitute) => Some(before),
            None => None,
        };
        debug_assert_eq!(
            Some(after),
            expected_after,
            "Contract violation: step '{}' changed length {} -> {}",
            pair[1].text,
            before,
            after
        );
    }
}
