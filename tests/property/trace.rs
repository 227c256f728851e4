//! Consistency between the distance matrix, the path, the operations and the
//! recorded trace.

use super::common::{replay, unicode_word_strategy, weights_strategy, word_strategy};
use levtrace::{align, EditOp, TallPair};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: replaying the edits turns the source into the target, and
    /// every recorded text matches the replay so far.
    #[test]
    fn prop_trace_replays_to_target(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let pair = TallPair::new(a.as_str(), b.as_str());
        let alignment = align(&pair, levtrace::CostWeights::UNIT).unwrap();
        let source = pair.source().to_string();
        let target = pair.target().to_string();

        prop_assert_eq!(alignment.trace.steps()[0].text.as_str(), source.as_str());
        if !target.is_empty() {
            prop_assert_eq!(replay(&source, &alignment.trace), target.clone());
            prop_assert_eq!(alignment.trace.final_text(), Some(target.as_str()));
        }
    }

    /// Property: the shorter word is always the target.
    #[test]
    fn prop_tall_shape(a in word_strategy(), b in word_strategy()) {
        let pair = TallPair::new(a.as_str(), b.as_str());
        prop_assert!(pair.source().len() >= pair.target().len());
        prop_assert_eq!(pair.swapped(), a.len() < b.len());
    }

    /// Property: one trace step per marked path cell, one operation per move.
    #[test]
    fn prop_trace_follows_path(a in word_strategy(), b in word_strategy()) {
        let alignment = align(&TallPair::new(a.as_str(), b.as_str()), levtrace::CostWeights::UNIT).unwrap();
        prop_assume!(!alignment.distances.is_empty());

        prop_assert_eq!(alignment.trace.len(), alignment.path.path_len());

        let op_cells = alignment.operations.iter_rows().flatten().filter(|op| op.is_some()).count();
        prop_assert_eq!(op_cells, alignment.trace.len() - 1);

        let (m, n) = (alignment.source.len(), alignment.target.len());
        prop_assert!(alignment.path.is_marked(0, 0));
        prop_assert!(alignment.path.is_marked(m, n));
        prop_assert_eq!(alignment.path[(m, n)], Some(alignment.distance));
    }

    /// Property: marked path cells carry the matrix value at that cell.
    #[test]
    fn prop_path_values_match_matrix(a in word_strategy(), b in word_strategy()) {
        let alignment = align(&TallPair::new(a.as_str(), b.as_str()), levtrace::CostWeights::UNIT).unwrap();
        for (r, row) in alignment.path.iter_rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(value) = cell {
                    prop_assert_eq!(*value, alignment.distances[(r, c)]);
                }
            }
        }
    }

    /// Property: the trace never needs fewer real edits than the distance.
    /// It can need more, when the left-over-up tie-break leaves the optimal
    /// path.
    #[test]
    fn prop_effective_edits_at_least_distance(a in word_strategy(), b in word_strategy()) {
        let alignment = align(&TallPair::new(a.as_str(), b.as_str()), levtrace::CostWeights::UNIT).unwrap();
        prop_assert!(alignment.trace.effective_edits() >= alignment.distance);
    }

    /// Property: inserts and deletes account for the length difference.
    #[test]
    fn prop_indels_balance_lengths(a in word_strategy(), b in word_strategy()) {
        let alignment = align(&TallPair::new(a.as_str(), b.as_str()), levtrace::CostWeights::UNIT).unwrap();
        prop_assume!(!alignment.distances.is_empty());
        let deletes = alignment.trace.edits().filter(|e| e.op == EditOp::Delete).count();
        let inserts = alignment.trace.edits().filter(|e| e.op == EditOp::Insert).count();
        prop_assert_eq!(deletes - inserts, alignment.source.len() - alignment.target.len());
    }

    /// Property: custom weights still give a trace that reaches the target.
    #[test]
    fn prop_weighted_trace_reaches_target(
        a in word_strategy(),
        b in word_strategy(),
        weights in weights_strategy(),
    ) {
        let pair = TallPair::new(a.as_str(), b.as_str());
        let alignment = align(&pair, weights).unwrap();
        let target = pair.target().to_string();
        prop_assume!(!target.is_empty());
        prop_assert_eq!(replay(&pair.source().to_string(), &alignment.trace), target);
    }
}
