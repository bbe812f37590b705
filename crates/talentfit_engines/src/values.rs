#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use talentfit_contracts::benchmark::ValuePreference;
use talentfit_contracts::comparison::{ComparisonDomain, ComparisonItem, FitStatus};
use talentfit_contracts::report::{NormalizedReport, ValueCategory};

use crate::labels::value_preference_score;
use crate::scale::clamp_score;

pub const ALIGNED_DISTANCE: f64 = 20.0;
pub const MODERATE_DISTANCE: f64 = 35.0;

pub const ALIGNED_FIT: f64 = 100.0;
pub const MODERATE_FIT: f64 = 65.0;
pub const CRITICAL_FIT: f64 = 20.0;

/// Exactly seven items, one per category in declared order.
pub fn compare_values(
    normalized: &NormalizedReport,
    benchmark: &BTreeMap<String, ValuePreference>,
) -> Vec<ComparisonItem> {
    let mut items = Vec::with_capacity(ValueCategory::ALL.len());
    for category in ValueCategory::ALL {
        let candidate = clamp_score(normalized.value_score(category).unwrap_or(0.0));
        let target = benchmark_preference_score(benchmark, category);
        let delta = candidate - target;
        let (fit, status) = values_fit(delta);

        items.push(ComparisonItem::new(
            ComparisonDomain::Value,
            category.as_str().to_string(),
            category.label().to_string(),
            candidate,
            target,
            fit,
            status,
        ));
    }
    items
}

/// Canonical key first, then display label, then the "medio" default.
fn benchmark_preference_score(
    benchmark: &BTreeMap<String, ValuePreference>,
    category: ValueCategory,
) -> f64 {
    let preference = benchmark
        .get(category.as_str())
        .or_else(|| benchmark.get(category.label()))
        .cloned()
        .unwrap_or_else(ValuePreference::default_level);
    value_preference_score(&preference)
}

/// Stepped on the magnitude of the delta.
pub fn values_fit(delta: f64) -> (f64, FitStatus) {
    let distance = delta.abs();
    if distance <= ALIGNED_DISTANCE {
        (ALIGNED_FIT, FitStatus::Aligned)
    } else if distance <= MODERATE_DISTANCE {
        (MODERATE_FIT, FitStatus::Moderate)
    } else {
        (CRITICAL_FIT, FitStatus::Critical)
    }
}
