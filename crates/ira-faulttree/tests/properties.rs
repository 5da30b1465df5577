//! Property tests for the derivation engine.

use ira_faulttree::{
    analyze, extract_hypotheses, walk, Recommendation, Series, TreeConfig, DEFAULT_MAX_DEPTH,
};
use ira_model::{FaultTreeNode, NodeKind, NodeStatus};
use ira_test_utils::arb_tree;
use proptest::prelude::*;

/// Nodes that should draw from the H series, counted independently of the
/// engine's rule table.
fn expected_h_count(node: &FaultTreeNode) -> u32 {
    let own = if node.kind == NodeKind::Root || node.is_basic_cause || node.is_contributing_cause
    {
        0
    } else {
        let has_children = !node.children.is_empty();
        let h = node.kind == NodeKind::Hypothesis
            || (node.kind == NodeKind::Fact && has_children)
            || (node.status == NodeStatus::Validated && has_children)
            || node.status != NodeStatus::Validated;
        u32::from(h)
    };
    own + node.children.iter().map(expected_h_count).sum::<u32>()
}

fn is_blank(text: Option<&String>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

/// `(label, recommendation)` pairs per list, in pre-order.
#[derive(Debug, Default)]
struct ExpectedRecommendations {
    basic: Vec<(String, String)>,
    contributing: Vec<(String, String)>,
}

fn expected_recommendations(node: &FaultTreeNode, out: &mut ExpectedRecommendations) {
    let validated = node.kind != NodeKind::Root && node.status == NodeStatus::Validated;
    if validated && !is_blank(node.recommendation.as_ref()) {
        let entry = (
            node.label.clone(),
            node.recommendation.clone().unwrap_or_default(),
        );
        if node.is_basic_cause {
            out.basic.push(entry);
        } else if node.is_contributing_cause {
            out.contributing.push(entry);
        }
    }
    for child in &node.children {
        expected_recommendations(child, out);
    }
}

fn pairs(list: &[Recommendation]) -> Vec<(String, String)> {
    list.iter()
        .map(|r| (r.label.clone(), r.recommendation.clone()))
        .collect()
}

/// Running `(H, CB, CC)` counters for the listed-hypothesis oracle.
#[derive(Debug, Default)]
struct Issued {
    h: u32,
    cb: u32,
    cc: u32,
}

/// `(badge, label)` for every listed hypothesis, in pre-order. A fact with
/// no justification is left out but still consumes its number.
fn expected_listed(node: &FaultTreeNode, issued: &mut Issued, out: &mut Vec<(String, String)>) {
    let has_children = !node.children.is_empty();
    let badge = if node.kind == NodeKind::Root {
        None
    } else if node.is_basic_cause {
        issued.cb += 1;
        Some(format!("CB{}", issued.cb))
    } else if node.is_contributing_cause {
        issued.cc += 1;
        Some(format!("CC{}", issued.cc))
    } else if node.kind == NodeKind::Hypothesis
        || (node.kind == NodeKind::Fact && has_children)
        || (node.status == NodeStatus::Validated && has_children)
        || node.status != NodeStatus::Validated
    {
        issued.h += 1;
        Some(format!("H{}", issued.h))
    } else {
        None
    };

    let excluded = node.kind == NodeKind::Fact && is_blank(node.justification.as_ref());
    if node.kind != NodeKind::Root && !excluded {
        out.push((badge.unwrap_or_default(), node.label.clone()));
    }
    for child in &node.children {
        expected_listed(child, issued, out);
    }
}

proptest! {
    #[test]
    fn prop_numbering_is_deterministic(tree in arb_tree()) {
        let config = TreeConfig::default();
        let first = analyze(Some(&tree), &config).unwrap();
        let second = analyze(Some(&tree), &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_h_count_matches_rules(tree in arb_tree()) {
        let walk = walk(&tree, DEFAULT_MAX_DEPTH).unwrap();
        prop_assert_eq!(walk.counters().issued(Series::Hypothesis), expected_h_count(&tree));
    }

    #[test]
    fn prop_hypothesis_extraction_is_idempotent(tree in arb_tree()) {
        let config = TreeConfig::default();
        let once = extract_hypotheses(&tree, &config).unwrap();
        let twice = extract_hypotheses(&tree, &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_numbers_are_dense_per_series(tree in arb_tree()) {
        let analysis = analyze(Some(&tree), &TreeConfig::default()).unwrap();
        for (series, issued) in [
            (Series::Hypothesis, analysis.numbering.hypotheses),
            (Series::BasicCause, analysis.numbering.basic_causes),
            (Series::ContributingCause, analysis.numbering.contributing_causes),
        ] {
            let values: Vec<u32> = analysis
                .nodes
                .iter()
                .filter_map(|n| n.number)
                .filter(|n| n.series() == series)
                .map(|n| n.value())
                .collect();
            prop_assert_eq!(values, (1..=issued).collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_every_node_visited_once_in_preorder(tree in arb_tree()) {
        let analysis = analyze(Some(&tree), &TreeConfig::default()).unwrap();
        prop_assert_eq!(analysis.nodes.len(), tree.node_count());
        for (position, node) in analysis.nodes.iter().enumerate() {
            prop_assert_eq!(node.index, position);
            if let Some(parent) = node.parent {
                prop_assert!(parent < position);
            }
        }
    }

    #[test]
    fn prop_recommendations_routed_by_causal_flag(tree in arb_tree()) {
        let analysis = analyze(Some(&tree), &TreeConfig::default()).unwrap();
        let mut expected = ExpectedRecommendations::default();
        expected_recommendations(&tree, &mut expected);

        prop_assert_eq!(pairs(&analysis.recommendations.basic_causes), expected.basic);
        prop_assert_eq!(
            pairs(&analysis.recommendations.contributing_causes),
            expected.contributing
        );
    }

    #[test]
    fn prop_listed_hypotheses_skip_unjustified_facts(tree in arb_tree()) {
        let analysis = analyze(Some(&tree), &TreeConfig::default()).unwrap();
        let mut expected = Vec::new();
        expected_listed(&tree, &mut Issued::default(), &mut expected);

        let listed: Vec<(String, String)> = analysis
            .hypotheses
            .iter()
            .map(|h| (h.number_label(), h.label.clone()))
            .collect();
        prop_assert_eq!(listed, expected);
    }
}
