//! End-to-end scenarios: distance, path, operations and the printed trace.

use super::common::{aligned, trace_lines, CLASSIC_PAIRS};
use levtrace::{distance, EditOp};

#[test]
fn test_classic_distances() {
    for &(source, target, expected) in CLASSIC_PAIRS {
        assert_eq!(
            distance(source, target),
            expected,
            "distance({:?}, {:?})",
            source,
            target
        );
        assert_eq!(aligned(source, target).distance, expected);
    }
}

#[test]
fn test_lawn_flaw_full_alignment() {
    let alignment = aligned("lawn", "flaw");

    let rows: Vec<Vec<usize>> = alignment.distances.iter_rows().map(<[usize]>::to_vec).collect();
    assert_eq!(
        rows,
        vec![
            vec![0, 1, 2, 3, 4],
            vec![1, 1, 1, 2, 3],
            vec![2, 2, 2, 1, 2],
            vec![3, 3, 3, 2, 1],
            vec![4, 4, 4, 3, 2],
        ]
    );

    let marked: Vec<(usize, usize)> = (0..5)
        .flat_map(|r| (0..5).map(move |c| (r, c)))
        .filter(|&(r, c)| alignment.path.is_marked(r, c))
        .collect();
    assert_eq!(marked, vec![(0, 0), (0, 1), (1, 2), (2, 3), (3, 4), (4, 4)]);

    assert_eq!(alignment.operations[(0, 1)], Some(EditOp::Insert));
    assert_eq!(alignment.operations[(4, 4)], Some(EditOp::Delete));
    assert_eq!(alignment.operations[(0, 0)], None);

    assert_eq!(
        trace_lines(&alignment),
        vec![
            "lawn",
            "flawn <- insert 'f' pos: 0",
            "flawn <- substitute 'l' pos: 1",
            "flawn <- substitute 'a' pos: 2",
            "flawn <- substitute 'w' pos: 3",
            "flaw <- delete 'n' pos: 4",
        ]
    );
}

#[test]
fn test_flaw_lawn_deletes_first() {
    let alignment = aligned("flaw", "lawn");
    assert!(!alignment.swapped);
    assert_eq!(
        trace_lines(&alignment),
        vec![
            "flaw",
            "law <- delete 'f' pos: 0",
            "law <- substitute 'l' pos: 0",
            "law <- substitute 'a' pos: 1",
            "law <- substitute 'w' pos: 2",
            "lawn <- insert 'n' pos: 3",
        ]
    );
}

#[test]
fn test_kitten_sitting_is_swapped() {
    let alignment = aligned("kitten", "sitting");
    assert!(alignment.swapped);
    assert_eq!(alignment.source.to_string(), "sitting");
    assert_eq!(
        trace_lines(&alignment),
        vec![
            "sitting",
            "kitting <- substitute 'k' pos: 0",
            "kitting <- substitute 'i' pos: 1",
            "kitting <- substitute 't' pos: 2",
            "kitting <- substitute 't' pos: 3",
            "kitteng <- substitute 'e' pos: 4",
            "kitteng <- substitute 'n' pos: 5",
            "kitten <- delete 'g' pos: 6",
        ]
    );
    assert_eq!(alignment.trace.effective_edits(), 3);
}

#[test]
fn test_house_home() {
    let alignment = aligned("house", "home");
    assert_eq!(
        trace_lines(&alignment),
        vec![
            "house",
            "house <- substitute 'h' pos: 0",
            "house <- substitute 'o' pos: 1",
            "hose <- delete 'u' pos: 2",
            "home <- substitute 'm' pos: 2",
            "home <- substitute 'e' pos: 3",
        ]
    );
}

#[test]
fn test_intention_execution_all_diagonal() {
    let alignment = aligned("intention", "execution");
    assert_eq!(alignment.trace.len(), 10);
    assert!(alignment.trace.edits().all(|e| e.op == EditOp::Substitute));
    assert_eq!(alignment.trace.final_text(), Some("execution"));
    assert_eq!(alignment.trace.effective_edits(), 5);
}

#[test]
fn test_abc_xyz_substitutes() {
    assert_eq!(
        trace_lines(&aligned("abc", "xyz")),
        vec![
            "abc",
            "xbc <- substitute 'x' pos: 0",
            "xyc <- substitute 'y' pos: 1",
            "xyz <- substitute 'z' pos: 2",
        ]
    );
}

#[test]
fn test_trailing_delete() {
    assert_eq!(
        trace_lines(&aligned("abc", "ab")),
        vec![
            "abc",
            "abc <- substitute 'a' pos: 0",
            "abc <- substitute 'b' pos: 1",
            "ab <- delete 'c' pos: 2",
        ]
    );
}

#[test]
fn test_identical_words_need_no_effective_edits() {
    let alignment = aligned("levenshtein", "levenshtein");
    assert_eq!(alignment.distance, 0);
    assert_eq!(alignment.trace.effective_edits(), 0);
    assert_eq!(alignment.trace.len(), 12);
    assert_eq!(alignment.ratio, Some(1.0));
}

#[test]
fn test_empty_inputs() {
    let both = aligned("", "");
    assert_eq!(both.distance, 0);
    assert_eq!(trace_lines(&both), vec![""]);
    assert_eq!(both.ratio, None);

    let from_empty = aligned("", "abc");
    assert!(from_empty.swapped);
    assert!(from_empty.distances.is_empty());
    assert_eq!(trace_lines(&from_empty), vec!["abc"]);
}

#[test]
fn test_multibyte_symbols() {
    let alignment = aligned("café", "cafe");
    assert_eq!(alignment.distance, 1);
    assert_eq!(alignment.trace.final_text(), Some("cafe"));
    assert_eq!(alignment.trace.effective_edits(), 1);
}
