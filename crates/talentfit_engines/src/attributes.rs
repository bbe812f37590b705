#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use talentfit_contracts::comparison::{ComparisonDomain, ComparisonItem, FitStatus};
use talentfit_contracts::registry::CanonicalRegistry;
use talentfit_contracts::report::NormalizedReport;

use crate::scale::clamp_score;

/// Benchmark value assumed for a key the role does not mention (0-10 midpoint).
pub const BENCHMARK_NEUTRAL: f64 = 5.5;
pub const NATIVE_SCALE_FACTOR: f64 = 10.0;

pub const CRITICAL_DEFICIT: f64 = -20.0;
pub const MODERATE_DEFICIT: f64 = -10.0;
pub const SURPLUS_EXCESS: f64 = 20.0;

/// One item per registry key, in registry order, whatever the report contains.
pub fn compare_attributes(
    normalized: &NormalizedReport,
    benchmark: &BTreeMap<String, f64>,
    registry: &dyn CanonicalRegistry,
) -> Vec<ComparisonItem> {
    let mut items = Vec::with_capacity(registry.len());
    for key in registry.keys() {
        let candidate_raw = registry.score_for(key, &normalized.scores).unwrap_or(0.0);
        let benchmark_raw = registry
            .score_for(key, benchmark)
            .unwrap_or(BENCHMARK_NEUTRAL);

        let candidate = clamp_score(candidate_raw * NATIVE_SCALE_FACTOR);
        let target = clamp_score(benchmark_raw * NATIVE_SCALE_FACTOR);
        let delta = candidate - target;

        items.push(ComparisonItem::new(
            ComparisonDomain::Attribute,
            key.key.clone(),
            key.label.clone(),
            candidate,
            target,
            attribute_fit(delta),
            attribute_status(delta),
        ));
    }
    items
}

/// Linear distance, no tolerance band.
pub fn attribute_fit(delta: f64) -> f64 {
    (100.0 - delta.abs()).max(0.0)
}

/// Signed thresholds: deficits flag from -10, surpluses only beyond +20.
pub fn attribute_status(delta: f64) -> FitStatus {
    if delta < CRITICAL_DEFICIT {
        FitStatus::Critical
    } else if delta < MODERATE_DEFICIT {
        FitStatus::Moderate
    } else if delta > SURPLUS_EXCESS {
        FitStatus::Surplus
    } else {
        FitStatus::Aligned
    }
}
