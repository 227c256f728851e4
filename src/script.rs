// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward walk: from the selected path to an edit script.
//!
//! The walk starts at the origin and re-derives each move by looking at which
//! neighbour of the cursor is marked in the sparse path matrix. It does not
//! replay the backward walk. Neighbours are checked in the order
//! **down (delete) > right (insert) > diagonal (substitute)**; at the bottom
//! row or right column only the one remaining move is considered.
//!
//! While walking, a working copy of the source is edited one splice at a
//! time. After the cursor has passed `(row, col)` the working string is
//! `target[..col] ++ source[row..]`, so every splice happens at index `col`.
//!
//! A diagonal move is always reported as a substitution, including the
//! no-op case where the source and target symbols are the same.

use tracing::{debug, trace};

use crate::error::{AlignError, Result};
use crate::types::{Edit, EditOp, EditTrace, Grid, OperationMatrix, SparsePathMatrix};
use crate::verify::contracts::{check_ops_follow_path, check_trace_reaches_target};

/// A positional edit on an ordered character sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splice {
    Remove(usize),
    Insert(usize, char),
    Replace(usize, char),
}

impl Splice {
    /// Apply the splice in place, returning the symbol that was removed or
    /// overwritten (if any).
    ///
    /// # Panics
    /// Panics if the index is out of range for the working sequence.
    pub fn apply(self, working: &mut Vec<char>) -> Option<char> {
        match self {
            Splice::Remove(at) => Some(working.remove(at)),
            Splice::Insert(at, c) => {
                working.insert(at, c);
                None
            }
            Splice::Replace(at, c) => Some(std::mem::replace(&mut working[at], c)),
        }
    }
}

/// Walk the path forward and produce the edit trace and operation matrix.
///
/// Fails with [`AlignError::DegenerateInput`] for an empty path matrix and
/// with [`AlignError::BrokenPath`] if the walk reaches a cell with no marked
/// successor (the matrix did not come from [`crate::backtrack`]).
///
/// # Example
///
/// ```
/// use levtrace::{backtrack, build_trace, compute, CostWeights};
///
/// let source: Vec<char> = "flaw".chars().collect();
/// let target: Vec<char> = "lawn".chars().collect();
/// let (_, dist) = compute(&source, &target, CostWeights::UNIT);
/// let path = backtrack(&source, &target, &dist).unwrap();
/// let (trace, _ops) = build_trace(&source, &target, &path).unwrap();
/// assert_eq!(trace.final_text(), Some("lawn"));
/// ```
pub fn build_trace(
    source: &[char],
    target: &[char],
    path: &SparsePathMatrix,
) -> Result<(EditTrace, OperationMatrix)> {
    if path.is_empty() {
        return Err(AlignError::DegenerateInput("build_trace"));
    }

    let rows = path.rows() - 1;
    let cols = path.cols() - 1;

    let mut ops: OperationMatrix = Grid::filled(rows + 1, cols + 1, None);
    let mut working: Vec<char> = source.to_vec();
    let mut trace = EditTrace::starting_from(source);

    let (mut row, mut col) = (0usize, 0usize);

    while (row, col) != (rows, cols) {
        let op = next_op(path, row, col, rows, cols)?;

        let (splice, symbol) = match op {
            EditOp::Delete => (Splice::Remove(col), source[row]),
            EditOp::Insert => (Splice::Insert(col, target[col]), target[col]),
            EditOp::Substitute => (Splice::Replace(col, target[col]), target[col]),
        };
        splice.apply(&mut working);

        let edit = Edit {
            op,
            symbol,
            position: col,
        };
        let text: String = working.iter().collect();
        trace!(from = ?(row, col), op = %op, symbol = %symbol, position = col, %text, "edit");
        trace.push(text, edit);

        match op {
            EditOp::Delete => row += 1,
            EditOp::Insert => col += 1,
            EditOp::Substitute => {
                row += 1;
                col += 1;
            }
        }
        ops.set(row, col, Some(op));
    }

    check_ops_follow_path(path, &ops);
    check_trace_reaches_target(&trace, target);
    debug!(edits = trace.len() - 1, effective = trace.effective_edits(), "edit trace built");

    Ok((trace, ops))
}

/// Which way the forward walk leaves `(row, col)`.
fn next_op(path: &SparsePathMatrix, row: usize, col: usize, rows: usize, cols: usize) -> Result<EditOp> {
    let op = if row < rows && col < cols {
        if path.is_marked(row + 1, col) {
            Some(EditOp::Delete)
        } else if path.is_marked(row, col + 1) {
            Some(EditOp::Insert)
        } else if path.is_marked(row + 1, col + 1) {
            Some(EditOp::Substitute)
        } else {
            None
        }
    } else if col == cols {
        // Right edge: can only move down.
        path.is_marked(row + 1, col).then_some(EditOp::Delete)
    } else {
        // Bottom edge: can only move right.
        path.is_marked(row, col + 1).then_some(EditOp::Insert)
    };

    op.ok_or(AlignError::BrokenPath { row, col })
}
