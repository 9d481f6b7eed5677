//! The scoring engine: a pure, single-pass transformation of raw responses
//! into validated, hierarchically aggregated dimension scores.

mod validity;

pub use validity::{ValidityDetail, ValidityReport};

use super::catalog::{Direction, ItemCatalog, ItemClassification};
use super::dimensions::{Dimension, Subdimension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Raw responses keyed by item id. Partial maps are valid input; responses
/// are signed so out-of-range values stay plain arithmetic.
pub type ResponseMap = BTreeMap<u16, i16>;

/// The engine's output bundle: validity report plus both score levels.
///
/// `subdimension_scores` is sparse — a subdimension with no qualifying
/// responses is absent, not zero. `dimension_scores` always carries all 7
/// keys. Callers must treat an absent subtotal and a zero subtotal alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedResult {
    pub validity: ValidityReport,
    pub subdimension_scores: BTreeMap<Subdimension, i32>,
    pub dimension_scores: BTreeMap<Dimension, i32>,
}

/// The engine's only failure: the response map itself was absent. An empty
/// map is a valid input and yields an all-zero result instead.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("no response data was provided")]
    MissingResponses,
}

/// Stateless scorer over an injected catalog; callable from any context.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<ItemCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<ItemCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Score a response map against the catalog.
    ///
    /// The validity check runs first and never short-circuits dimension
    /// scoring; both are always computed so the caller decides how to react
    /// to a failed attention check. Unknown item ids in the input are
    /// ignored; items without a response contribute nothing.
    pub fn score(&self, responses: Option<&ResponseMap>) -> Result<CalculatedResult, ScoringError> {
        let responses = responses.ok_or(ScoringError::MissingResponses)?;

        let validity = validity::evaluate(&self.catalog, responses);

        // Iterate the catalog, not the response keys, so accumulation stays
        // in instrument order and unknown ids never contribute.
        let mut subdimension_scores: BTreeMap<Subdimension, i32> = BTreeMap::new();
        for item in self.catalog.items() {
            let ItemClassification::Scored {
                subdimension,
                direction,
            } = item.classification
            else {
                continue;
            };
            let Some(&value) = responses.get(&item.id) else {
                continue;
            };
            *subdimension_scores.entry(subdimension).or_insert(0) +=
                item_points(direction, value);
        }

        let mut dimension_scores: BTreeMap<Dimension, i32> = BTreeMap::new();
        for dimension in Dimension::ALL {
            let total = dimension
                .subdimensions()
                .iter()
                .map(|member| subdimension_scores.get(member).copied().unwrap_or(0))
                .sum();
            dimension_scores.insert(dimension, total);
        }

        Ok(CalculatedResult {
            validity,
            subdimension_scores,
            dimension_scores,
        })
    }
}

/// Point value of one answered item. Reverse keying reflects the response on
/// the 5-point scale, so forward(v) + reverse(v) == 6 for v in 1..=5.
/// Out-of-range values pass through unclamped, matching the reference
/// implementation.
fn item_points(direction: Direction, value: i16) -> i32 {
    match direction {
        Direction::Forward => i32::from(value),
        Direction::Reverse => 6 - i32::from(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ScoringEngine {
        ScoringEngine::new(Arc::new(ItemCatalog::standard()))
    }

    fn responses(entries: &[(u16, i16)]) -> ResponseMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn forward_and_reverse_points_complement_to_six() {
        for value in 1..=5 {
            let forward = item_points(Direction::Forward, value);
            let reverse = item_points(Direction::Reverse, value);
            assert_eq!(forward + reverse, 6);
        }
    }

    #[test]
    fn forward_item_scores_unchanged() {
        // Item 1 is forward-keyed on NS1.
        let result = engine()
            .score(Some(&responses(&[(1, 5)])))
            .expect("scores");
        assert_eq!(result.subdimension_scores.get(&Subdimension::NS1), Some(&5));
        assert_eq!(result.dimension_scores[&Dimension::NS], 5);
    }

    #[test]
    fn reverse_item_scores_reflected() {
        // Item 2 is reverse-keyed on HA1.
        let result = engine()
            .score(Some(&responses(&[(2, 2)])))
            .expect("scores");
        assert_eq!(result.subdimension_scores.get(&Subdimension::HA1), Some(&4));
        assert_eq!(result.dimension_scores[&Dimension::HA], 4);
    }

    #[test]
    fn subtotals_stay_sparse() {
        let result = engine()
            .score(Some(&responses(&[(1, 3)])))
            .expect("scores");
        assert_eq!(result.subdimension_scores.len(), 1);
        assert!(!result.subdimension_scores.contains_key(&Subdimension::NS2));
        // Dimension totals are dense regardless.
        assert_eq!(result.dimension_scores.len(), 7);
        assert_eq!(result.dimension_scores[&Dimension::ST], 0);
    }

    #[test]
    fn unknown_item_ids_are_ignored() {
        let result = engine()
            .score(Some(&responses(&[(9999, 3)])))
            .expect("scores");
        assert!(result.subdimension_scores.is_empty());
        assert!(result.dimension_scores.values().all(|&total| total == 0));
    }

    #[test]
    fn out_of_range_values_pass_through_unclamped() {
        // Item 2 is reverse-keyed: 6 - (-3) = 9. Deliberately permissive.
        let result = engine()
            .score(Some(&responses(&[(2, -3)])))
            .expect("scores");
        assert_eq!(result.subdimension_scores.get(&Subdimension::HA1), Some(&9));
    }

    #[test]
    fn missing_input_is_a_distinct_failure() {
        let err = engine().score(None).expect_err("must fail");
        assert!(matches!(err, ScoringError::MissingResponses));
    }

    #[test]
    fn validity_items_never_contribute_to_scores() {
        let valid = responses(&[(36, 4), (101, 1), (120, 5), (132, 2)]);
        let result = engine().score(Some(&valid)).expect("scores");
        assert!(result.validity.all_valid);
        assert!(result.subdimension_scores.is_empty());
        assert!(result.dimension_scores.values().all(|&total| total == 0));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = engine()
            .score(Some(&responses(&[(1, 5)])))
            .expect("scores");
        let json = serde_json::to_value(&result).expect("serializes");
        assert!(json.get("subdimensionScores").is_some());
        assert!(json.get("dimensionScores").is_some());
        assert_eq!(json["subdimensionScores"]["NS1"], 5);
        assert_eq!(json["validity"]["allValid"], false);
    }
}
