//! Integration specifications for the scoring engine.
//!
//! Scenarios exercise the public engine surface end to end: the validity
//! report, the sparse subdimension subtotals, and the dense dimension totals.

mod common {
    use std::sync::Arc;

    use tci::inventory::{ItemCatalog, ResponseMap, ScoringEngine};

    pub(super) fn engine() -> ScoringEngine {
        ScoringEngine::new(Arc::new(ItemCatalog::standard()))
    }

    pub(super) fn responses(entries: &[(u16, i16)]) -> ResponseMap {
        entries.iter().copied().collect()
    }

    /// Every item answered, values cycling 1..=5 by id.
    pub(super) fn full_responses() -> ResponseMap {
        (1..=140).map(|id| (id, (id % 5) as i16 + 1)).collect()
    }
}

use common::{engine, full_responses, responses};
use tci::inventory::{Dimension, ResponseMap, ScoringError, Subdimension};

#[test]
fn empty_map_yields_zero_scores_and_a_failing_validity_report() {
    let result = engine().score(Some(&ResponseMap::new())).expect("scores");

    assert!(!result.validity.all_valid);
    assert_eq!(result.validity.details.len(), 4);
    assert!(result
        .validity
        .details
        .iter()
        .all(|detail| detail.actual.is_none() && !detail.valid));

    assert!(result.subdimension_scores.is_empty());
    assert_eq!(result.dimension_scores.len(), 7);
    assert!(result.dimension_scores.values().all(|&total| total == 0));
}

#[test]
fn correct_validity_answers_pass_without_contributing_to_scores() {
    let result = engine()
        .score(Some(&responses(&[(36, 4), (101, 1), (120, 5), (132, 2)])))
        .expect("scores");

    assert!(result.validity.all_valid);
    assert!(result.subdimension_scores.is_empty());
    assert!(result.dimension_scores.values().all(|&total| total == 0));
}

#[test]
fn forward_item_contributes_its_raw_value() {
    let result = engine().score(Some(&responses(&[(1, 5)]))).expect("scores");

    assert_eq!(result.subdimension_scores.get(&Subdimension::NS1), Some(&5));
    // The dimension total is exactly this item; the sibling subdimensions
    // contribute nothing and stay absent.
    assert_eq!(result.dimension_scores[&Dimension::NS], 5);
    assert!(!result.subdimension_scores.contains_key(&Subdimension::NS2));
    assert!(!result.subdimension_scores.contains_key(&Subdimension::NS3));
    assert!(!result.subdimension_scores.contains_key(&Subdimension::NS4));
}

#[test]
fn reverse_item_contributes_the_reflected_value() {
    let result = engine().score(Some(&responses(&[(2, 2)]))).expect("scores");
    assert_eq!(result.subdimension_scores.get(&Subdimension::HA1), Some(&4));
    assert_eq!(result.dimension_scores[&Dimension::HA], 4);
}

#[test]
fn unknown_item_ids_are_ignored_without_error() {
    let result = engine()
        .score(Some(&responses(&[(9999, 3)])))
        .expect("scores");
    assert!(result.subdimension_scores.is_empty());
    assert!(result.dimension_scores.values().all(|&total| total == 0));
}

#[test]
fn absent_input_signals_the_missing_input_failure() {
    let err = engine().score(None).expect_err("absent input must fail");
    assert!(matches!(err, ScoringError::MissingResponses));
}

#[test]
fn scoring_is_deterministic() {
    let map = full_responses();
    let engine = engine();
    let first = engine.score(Some(&map)).expect("scores");
    let second = engine.score(Some(&map)).expect("scores");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn dimension_totals_equal_the_sum_of_their_members() {
    let result = engine().score(Some(&full_responses())).expect("scores");

    // Every subdimension has at least one answered item here.
    assert_eq!(result.subdimension_scores.len(), 29);

    for dimension in Dimension::ALL {
        let member_sum: i32 = dimension
            .subdimensions()
            .iter()
            .map(|member| result.subdimension_scores.get(member).copied().unwrap_or(0))
            .sum();
        assert_eq!(result.dimension_scores[&dimension], member_sum);
    }
}

#[test]
fn validity_answers_never_alter_numeric_scores() {
    let mut honest = full_responses();
    let mut careless = full_responses();
    for (id, expected) in [(36, 4), (101, 1), (120, 5), (132, 2)] {
        honest.insert(id, expected);
        careless.insert(id, 3);
    }

    let engine = engine();
    let honest_result = engine.score(Some(&honest)).expect("scores");
    let careless_result = engine.score(Some(&careless)).expect("scores");

    assert!(honest_result.validity.all_valid);
    assert!(!careless_result.validity.all_valid);
    assert_eq!(
        honest_result.subdimension_scores,
        careless_result.subdimension_scores
    );
    assert_eq!(
        honest_result.dimension_scores,
        careless_result.dimension_scores
    );
}

#[test]
fn omitting_an_item_matches_a_zero_contribution() {
    let with_item = engine()
        .score(Some(&responses(&[(1, 5), (5, 3)])))
        .expect("scores");
    let without_item = engine().score(Some(&responses(&[(1, 5)]))).expect("scores");

    // Dropping item 5 removes exactly its contribution; everything else is
    // unchanged, and its subdimension disappears rather than reading zero.
    assert_eq!(
        with_item.subdimension_scores.get(&Subdimension::NS1),
        without_item.subdimension_scores.get(&Subdimension::NS1)
    );
    assert!(without_item
        .subdimension_scores
        .get(&Subdimension::PS3)
        .is_none());
    assert_eq!(without_item.dimension_scores[&Dimension::PS], 0);
}
