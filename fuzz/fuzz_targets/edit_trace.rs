// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full alignment pipeline.
//!
//! Any pair of words, under any small cost weights, must produce a path and a
//! trace that replays the source into the target. Debug builds also run every
//! pipeline contract along the way.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levtrace::testing::{oracle_distance, replay};
use levtrace::{align, distance, CostWeights, TallPair};

/// Fuzz input for one alignment
#[derive(Debug, Arbitrary)]
struct AlignInput {
    source_bytes: Vec<u8>,
    target_bytes: Vec<u8>,
    /// Raw costs, folded into 1..=4
    weights: (u8, u8, u8),
}

/// Lossy UTF-8, capped in symbols (not bytes) to avoid timeouts.
fn word(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(40).collect()
}

fuzz_target!(|input: AlignInput| {
    let source = word(&input.source_bytes);
    let target = word(&input.target_bytes);
    let (d, i, s) = input.weights;
    let weights = CostWeights::new(
        usize::from(d % 4) + 1,
        usize::from(i % 4) + 1,
        usize::from(s % 4) + 1,
    );

    let pair = TallPair::new(source.as_str(), target.as_str());
    let alignment = align(&pair, weights).expect("a tall pair always aligns");

    let tall_source = pair.source().to_string();
    let tall_target = pair.target().to_string();
    if !tall_target.is_empty() {
        assert_eq!(replay(&tall_source, &alignment.trace), tall_target);
        assert_eq!(alignment.trace.len(), alignment.path.path_len());

        let expected = oracle_distance(pair.source().as_slice(), pair.target().as_slice(), weights);
        assert_eq!(alignment.distance, expected);
    }

    // Unit-cost metric bounds
    let unit = distance(&source, &target);
    let (m, n) = (source.chars().count(), target.chars().count());
    assert!(unit >= m.abs_diff(n) && unit <= m.max(n));
    assert_eq!(unit == 0, source == target);

    if let Some(r) = alignment.ratio {
        assert!((0.0..=1.0).contains(&r));
    }
});
