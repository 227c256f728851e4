// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model shared by every stage of the pipeline.
//!
//! Three matrices of identical shape flow through the pipeline, each derived once
//! and read-only afterwards:
//!
//! | Type               | Cell type          | Produced by     |
//! |--------------------|--------------------|-----------------|
//! | `DistanceMatrix`   | `usize`            | `compute`       |
//! | `SparsePathMatrix` | `Option<usize>`    | `backtrack`     |
//! | `OperationMatrix`  | `Option<EditOp>`   | `build_trace`   |
//!
//! Rows index the source sequence (`m + 1` rows), columns index the target
//! (`n + 1` columns). Row 0 and column 0 are the empty prefixes.
//!
//! # Invariants
//!
//! - **DistanceMatrix**: `D[0][0] = 0`, `D[i][0] = i·delete`, `D[0][j] = j·insert`,
//!   and every interior cell is the minimum of its three predecessors plus the
//!   cost of the move.
//! - **SparsePathMatrix**: `Some(v)` only on the selected path, and then `v` is the
//!   distance matrix value at that cell. The origin is always `Some(0)`.
//! - **EditTrace**: the first step is the untouched source, the last step equals the
//!   target, and each step differs from the previous one by exactly one splice.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AlignError;

// =============================================================================
// SEQUENCES
// =============================================================================

/// An ordered, immutable list of symbols.
///
/// Symbols are Unicode scalar values, so `"café"` has length 4 regardless of its
/// byte length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub struct Sequence(Vec<char>);

impl Sequence {
    pub fn new(symbols: Vec<char>) -> Self {
        Sequence(symbols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Sequence(s.chars().collect())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Sequence::from(s.as_str())
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.0.into_iter().collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

// =============================================================================
// COST WEIGHTS
// =============================================================================

/// Cost of each edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CostWeights {
    pub delete: usize,
    pub insert: usize,
    pub substitute: usize,
}

impl CostWeights {
    /// Unit costs, the classic Levenshtein distance.
    pub const UNIT: CostWeights = CostWeights::new(1, 1, 1);

    /// Weights used for the similarity ratio: a substitution counts as a
    /// deletion plus an insertion.
    pub const RATIO: CostWeights = CostWeights::new(1, 1, 2);

    pub const fn new(delete: usize, insert: usize, substitute: usize) -> Self {
        CostWeights {
            delete,
            insert,
            substitute,
        }
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        CostWeights::UNIT
    }
}

impl fmt::Display for CostWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.delete, self.insert, self.substitute)
    }
}

/// Parses `"delete,insert,substitute"`, e.g. `"1,1,2"`.
impl FromStr for CostWeights {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(AlignError::invalid_weights(
                s,
                format!("expected 3 comma-separated costs, got {}", parts.len()),
            ));
        }

        let mut costs = [0usize; 3];
        for (slot, part) in costs.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                AlignError::invalid_weights(s, format!("'{}' is not a non-negative integer", part))
            })?;
        }

        Ok(CostWeights::new(costs[0], costs[1], costs[2]))
    }
}

// =============================================================================
// GRID
// =============================================================================

/// Dense row-major grid.
///
/// The zero-sized grid stands in for "no matrix", which is what `compute`
/// returns when the target sequence is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// A `rows × cols` grid with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn empty() -> Self {
        Grid {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounds-checked access.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Overwrite a cell.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on 0, and an empty grid has no rows anyway
        self.cells.chunks(self.cols.max(1))
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

/// Minimum cost to transform `source[..i]` into `target[..j]`, at `(i, j)`.
pub type DistanceMatrix = Grid<usize>;

/// The selected alignment path: `Some(cost)` on the path, `None` elsewhere.
pub type SparsePathMatrix = Grid<Option<usize>>;

/// The edit operation that moved the path into each cell.
pub type OperationMatrix = Grid<Option<EditOp>>;

impl SparsePathMatrix {
    /// Whether `(row, col)` lies on the selected path.
    #[inline]
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Number of cells on the path, origin included.
    pub fn path_len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

// =============================================================================
// EDITS AND TRACES
// =============================================================================

/// A single edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EditOp {
    #[serde(rename = "D")]
    Delete,
    #[serde(rename = "I")]
    Insert,
    /// Diagonal move. Also used when both symbols are equal (no-op diagonal).
    #[serde(rename = "S")]
    Substitute,
}

impl EditOp {
    /// Single-letter tag used in the operation matrix.
    pub fn tag(self) -> char {
        match self {
            EditOp::Delete => 'D',
            EditOp::Insert => 'I',
            EditOp::Substitute => 'S',
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            EditOp::Delete => "delete",
            EditOp::Insert => "insert",
            EditOp::Substitute => "substitute",
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One character-level edit applied to the working string.
///
/// `symbol` is the removed source symbol for a delete and the written target
/// symbol otherwise. `position` is the index in the working string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub op: EditOp,
    pub symbol: char,
    pub position: usize,
}

/// The working string after an edit, plus the edit that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub text: String,
    /// `None` for the initial, unmodified source.
    pub edit: Option<Edit>,
}

impl TraceStep {
    /// `"flawn <- insert 'f' pos: 0"`, or just the text for the initial step.
    pub fn description(&self) -> String {
        match &self.edit {
            Some(edit) => format!(
                "{} <- {} '{}' pos: {}",
                self.text,
                edit.op.verb(),
                edit.symbol,
                edit.position
            ),
            None => self.text.clone(),
        }
    }
}

/// Stepwise transformation of the source into the target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct EditTrace {
    steps: Vec<TraceStep>,
}

impl EditTrace {
    pub(crate) fn starting_from(source: &[char]) -> Self {
        EditTrace {
            steps: vec![TraceStep {
                text: source.iter().collect(),
                edit: None,
            }],
        }
    }

    pub(crate) fn push(&mut self, text: String, edit: Edit) {
        self.steps.push(TraceStep {
            text,
            edit: Some(edit),
        });
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The edits in order, without the initial state.
    pub fn edits(&self) -> impl Iterator<Item = &Edit> {
        self.steps.iter().filter_map(|step| step.edit.as_ref())
    }

    /// Final working string. Equals the target for a complete trace.
    pub fn final_text(&self) -> Option<&str> {
        self.steps.last().map(|step| step.text.as_str())
    }

    /// Edits that actually change the working string: every insert and
    /// delete, plus substitutions that write a different symbol.
    pub fn effective_edits(&self) -> usize {
        self.steps
            .windows(2)
            .filter(|pair| pair[0].text != pair[1].text)
            .count()
    }
}
