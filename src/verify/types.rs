// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shape normalization at the boundary.
//!
//! The cost matrix is laid out "tall": the source runs down the rows and is
//! at least as long as the target across the columns. That is a presentation
//! convention, not something Levenshtein distance needs, so the core functions
//! don't re-check it. `TallPair` establishes it once, at construction, and
//! records whether the inputs had to be swapped.
//!
//! The swap matters to callers: it flips which word is "source", so inserts
//! in the trace become deletes relative to the original order and vice versa.

use serde::Serialize;

use crate::types::Sequence;

/// A `(source, target)` pair with `source.len() >= target.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallPair {
    source: Sequence,
    target: Sequence,
    swapped: bool,
}

impl TallPair {
    /// Build a tall pair, swapping `first` and `second` if `first` is shorter.
    ///
    /// Equal lengths are never swapped.
    pub fn new(first: impl Into<Sequence>, second: impl Into<Sequence>) -> Self {
        let first = first.into();
        let second = second.into();

        if first.len() < second.len() {
            TallPair {
                source: second,
                target: first,
                swapped: true,
            }
        } else {
            TallPair {
                source: first,
                target: second,
                swapped: false,
            }
        }
    }

    /// The longer sequence (rows of the matrix).
    pub fn source(&self) -> &Sequence {
        &self.source
    }

    /// The shorter sequence (columns of the matrix).
    pub fn target(&self) -> &Sequence {
        &self.target
    }

    /// Whether the inputs were given in the opposite order.
    pub fn swapped(&self) -> bool {
        self.swapped
    }
}
