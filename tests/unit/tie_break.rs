//! Backtracking tie-break order: diagonal, then left, then up.

use super::common::{aligned, chars};
use levtrace::{choose_step, compute, CostWeights, Step};

#[test]
fn test_diagonal_wins_three_way_tie() {
    // "ab" vs "ba": the last cell is 2 with all three neighbours at 1
    let (_, dist) = compute(&chars("ab"), &chars("ba"), CostWeights::UNIT);
    assert_eq!(dist[(2, 2)], 2);
    assert_eq!(choose_step(&dist, 2, 2), Step::Diagonal);
}

#[test]
fn test_left_preferred_over_cheaper_up() {
    // here = 4, up = 3, left = 4, diagonal = 4
    let (d, dist) = compute(&chars("bbbba"), &chars("aab"), CostWeights::UNIT);
    assert_eq!(d, 4);
    assert_eq!(
        (dist[(5, 3)], dist[(4, 3)], dist[(5, 2)], dist[(4, 2)]),
        (4, 3, 4, 4)
    );
    assert_eq!(choose_step(&dist, 5, 3), Step::Left);
}

#[test]
fn test_left_preference_costs_extra_edits() {
    let alignment = aligned("bbbba", "aab");
    assert_eq!(alignment.distance, 4);
    assert_eq!(alignment.trace.final_text(), Some("aab"));
    assert!(alignment.trace.effective_edits() > alignment.distance);
}

#[test]
fn test_boundaries_force_direction() {
    let (_, dist) = compute(&chars("abc"), &chars("xy"), CostWeights::UNIT);
    assert_eq!(choose_step(&dist, 2, 0), Step::Up);
    assert_eq!(choose_step(&dist, 0, 2), Step::Left);
}

#[test]
fn test_up_when_only_up_is_consistent() {
    // "abc" vs "ab" at (3, 2): up = 0, left = 2, diagonal = 1
    let (_, dist) = compute(&chars("abc"), &chars("ab"), CostWeights::UNIT);
    assert_eq!(choose_step(&dist, 3, 2), Step::Up);
}
