//! Tests for forest rendering

use claimtree::domain::{render_outline, to_tree_string, ClaimForest, ForestBuilder};

fn build(claims: &[&str]) -> ClaimForest {
    ForestBuilder::new().build(claims).expect("build forest")
}

#[test]
fn given_small_tree_when_rendering_outline_then_indents_by_depth() {
    let forest = build(&[
        "1. A device comprising a widget.",
        "2. The device of claim 1, wherein the widget is blue.",
    ]);

    let root = forest.lookup(1).unwrap();
    let rendered = render_outline(&forest, root);

    let expected = "- Claim 1: A device comprising a widget.\n  - Claim 2: The device of claim 1, wherein the widget is blue.\n";
    assert_eq!(rendered, expected);
}

#[test]
fn given_multi_parent_claim_when_rendering_then_appears_under_each_parent() {
    let forest = build(&[
        "1. A device.",
        "2. The device of claim 1.",
        "4. The device of claim 1 and claim 2.",
    ]);

    let root = forest.lookup(1).unwrap();
    let rendered = render_outline(&forest, root);

    // Intentional duplication: once under claim 1, once under claim 2
    assert_eq!(rendered.matches("- Claim 4:").count(), 2);
}

#[test]
fn given_reference_cycle_when_rendering_then_marks_and_terminates() {
    let forest = build(&[
        "1. A device.",
        "2. The device of claim 1 and claim 2.",
    ]);

    let root = forest.lookup(1).unwrap();
    let rendered = render_outline(&forest, root);

    assert!(rendered.contains("- Claim 2: The device of claim 1 and claim 2."));
    assert!(rendered.contains("- Claim 2 (reference cycle)"));
}

#[test]
fn given_multiline_claim_text_when_rendering_then_flattens_to_one_line() {
    let forest = build(&["1. A device comprising:\na widget; and\na frame."]);

    let root = forest.lookup(1).unwrap();
    let rendered = render_outline(&forest, root);

    assert_eq!(
        rendered,
        "- Claim 1: A device comprising: a widget; and a frame.\n"
    );
}

#[test]
fn given_small_tree_when_rendering_termtree_then_shows_branches() {
    let forest = build(&[
        "1. A device comprising a widget.",
        "2. The device of claim 1, wherein the widget is blue.",
    ]);

    let root = forest.lookup(1).unwrap();
    let rendered = to_tree_string(&forest, root).to_string();

    assert!(rendered.starts_with("Claim 1: A device comprising a widget."));
    assert!(rendered.contains("└── Claim 2: The device of claim 1, wherein the widget is blue."));
}

#[test]
fn given_reference_cycle_when_rendering_termtree_then_terminates() {
    let forest = build(&[
        "1. The widget of claim 2.",
        "2. The widget of claim 1.",
    ]);

    let start = forest.lookup(1).unwrap();
    let rendered = to_tree_string(&forest, start).to_string();

    assert!(rendered.contains("(reference cycle)"));
}
