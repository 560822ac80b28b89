//! Tests for ClaimForest queries and traversal

use claimtree::domain::{ClaimForest, DanglingPolicy, ForestBuilder};

fn build(claims: &[&str]) -> ClaimForest {
    ForestBuilder::new().build(claims).expect("build forest")
}

// ============================================================
// Depth Tests
// ============================================================

#[test]
fn given_dependency_chain_when_measuring_depth_then_counts_levels() {
    let forest = build(&[
        "1. A device.",
        "2. The device of claim 1.",
        "3. The device of claim 2.",
    ]);

    let root = forest.lookup(1).unwrap();
    assert_eq!(forest.depth(root), 3);
}

#[test]
fn given_standalone_claim_when_measuring_depth_then_returns_one() {
    let forest = build(&["8. A composition of matter."]);

    let root = forest.lookup(8).unwrap();
    assert_eq!(forest.depth(root), 1);
}

#[test]
fn given_reference_cycle_when_measuring_depth_then_terminates() {
    let forest = ForestBuilder::new()
        .build(["1. The widget of claim 2.", "2. The widget of claim 1."])
        .unwrap();

    let start = forest.lookup(1).unwrap();
    // Chain 1 -> 2 -> (back to 1, not descended)
    assert_eq!(forest.depth(start), 2);
}

// ============================================================
// Leaf Tests
// ============================================================

#[test]
fn given_forest_when_collecting_leaves_then_returns_claims_without_children() {
    let forest = build(&[
        "1. A device.",
        "2. The device of claim 1.",
        "3. The device of claim 1.",
        "4. The device of claim 2.",
        "8. A composition of matter.",
    ]);

    assert_eq!(forest.leaf_claims(), vec![3, 4, 8]);
}

// ============================================================
// Traversal Tests
// ============================================================

#[test]
fn given_tree_when_traversing_then_yields_preorder() {
    let forest = build(&[
        "1. A device.",
        "2. The device of claim 1.",
        "3. The device of claim 1.",
        "4. The device of claim 2.",
    ]);

    let root = forest.lookup(1).unwrap();
    let visited: Vec<u32> = forest
        .traverse(root)
        .map(|(_, node)| node.claim.number)
        .collect();
    assert_eq!(visited, vec![1, 2, 4, 3]);
}

#[test]
fn given_diamond_when_traversing_then_visits_each_node_once() {
    let forest = build(&[
        "1. A device.",
        "2. The device of claim 1.",
        "4. The device of claim 1 and claim 2.",
    ]);

    let root = forest.lookup(1).unwrap();
    let visited: Vec<u32> = forest
        .traverse(root)
        .map(|(_, node)| node.claim.number)
        .collect();
    assert_eq!(visited, vec![1, 2, 4]);
}

#[test]
fn given_reference_cycle_when_traversing_then_terminates() {
    let forest = build(&["1. The widget of claim 2.", "2. The widget of claim 1."]);

    let start = forest.lookup(2).unwrap();
    let visited: Vec<u32> = forest
        .traverse(start)
        .map(|(_, node)| node.claim.number)
        .collect();
    assert_eq!(visited, vec![2, 1]);
}

// ============================================================
// Structure Tests
// ============================================================

#[test]
fn given_roots_when_listing_then_keeps_first_encounter_order() {
    let forest = build(&[
        "5. A system.",
        "1. A device.",
        "3. The device of claim 1.",
    ]);

    assert_eq!(forest.root_numbers(), vec![5, 1]);
}

#[test]
fn given_multi_parent_claim_when_listing_parents_then_contains_both() {
    let forest = build(&[
        "1. A device.",
        "2. The device of claim 1.",
        "4. The device of claim 1 and claim 2.",
    ]);

    let idx = forest.lookup(4).unwrap();
    let parents: Vec<u32> = forest
        .get(idx)
        .unwrap()
        .parents
        .iter()
        .filter_map(|&p| forest.get(p))
        .map(|node| node.claim.number)
        .collect();
    assert_eq!(parents, vec![1, 2]);
}

#[test]
fn given_lenient_build_when_all_references_dangle_then_claim_is_orphan_root() {
    let forest = ForestBuilder::new()
        .with_dangling_policy(DanglingPolicy::Record)
        .build(["3. The system of claim 99."])
        .unwrap();

    assert_eq!(forest.root_numbers(), vec![3]);
    assert_eq!(forest.node_count(), 1);
    assert_eq!(forest.faults().len(), 1);
}
