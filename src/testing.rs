//! Test utilities shared across unit, property and fuzz tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::HashMap;

use crate::types::{CostWeights, EditOp, EditTrace};

/// Reference edit distance by memoized recursion over suffixes.
///
/// Shares no code with [`crate::compute`], so the two can be compared as a
/// differential oracle. Exponential without the memo; keep inputs short.
pub fn oracle_distance(source: &[char], target: &[char], weights: CostWeights) -> usize {
    fn go(
        s: &[char],
        t: &[char],
        i: usize,
        j: usize,
        w: CostWeights,
        memo: &mut HashMap<(usize, usize), usize>,
    ) -> usize {
        if let Some(&cached) = memo.get(&(i, j)) {
            return cached;
        }
        let result = if i == s.len() {
            (t.len() - j).saturating_mul(w.insert)
        } else if j == t.len() {
            (s.len() - i).saturating_mul(w.delete)
        } else {
            let sub = if s[i] == t[j] { 0 } else { w.substitute };
            go(s, t, i + 1, j, w, memo)
                .saturating_add(w.delete)
                .min(go(s, t, i, j + 1, w, memo).saturating_add(w.insert))
                .min(go(s, t, i + 1, j + 1, w, memo).saturating_add(sub))
        };
        memo.insert((i, j), result);
        result
    }

    go(source, target, 0, 0, weights, &mut HashMap::new())
}

/// Replay the edits of a trace against `source` without looking at the
/// recorded texts, returning the final string.
pub fn replay(source: &str, trace: &EditTrace) -> String {
    let mut working: Vec<char> = source.chars().collect();
    for edit in trace.edits() {
        match edit.op {
            EditOp::Delete => {
                working.remove(edit.position);
            }
            EditOp::Insert => working.insert(edit.position, edit.symbol),
            EditOp::Substitute => working[edit.position] = edit.symbol,
        }
    }
    working.into_iter().collect()
}
