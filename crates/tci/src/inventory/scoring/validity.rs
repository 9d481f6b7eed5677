use super::ResponseMap;
use crate::inventory::catalog::ItemCatalog;
use serde::{Deserialize, Serialize};

/// Outcome of one planted attention check. `actual` is `None` when the item
/// was never answered, which is distinguishable from any 1-5 response and
/// always fails the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidityDetail {
    pub item: u16,
    pub expected: i16,
    pub actual: Option<i16>,
    pub valid: bool,
}

/// Report over all planted checks, in instrument order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidityReport {
    pub all_valid: bool,
    pub details: Vec<ValidityDetail>,
}

/// Evaluate every attention check against the responses. Runs independently
/// of dimension scoring and never influences it.
pub(super) fn evaluate(catalog: &ItemCatalog, responses: &ResponseMap) -> ValidityReport {
    let details: Vec<ValidityDetail> = catalog
        .validity_expectations()
        .into_iter()
        .map(|(item, expected)| {
            let actual = responses.get(&item).copied();
            ValidityDetail {
                item,
                expected,
                actual,
                valid: actual == Some(expected),
            }
        })
        .collect();

    ValidityReport {
        all_valid: details.iter().all(|detail| detail.valid),
        details,
    }
}
