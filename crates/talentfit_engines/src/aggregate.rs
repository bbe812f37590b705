#![forbid(unsafe_code)]

use talentfit_contracts::benchmark::Benchmark;
use talentfit_contracts::comparison::ComparisonItem;
use talentfit_contracts::registry::CanonicalRegistry;
use talentfit_contracts::report::NormalizedReport;

use crate::attributes::compare_attributes;
use crate::disc::compare_disc;
use crate::values::compare_values;

/// Attribute items, then DISC, then values, each in its comparator's order.
/// Empty when either side is absent; never sorted or de-duplicated.
pub fn compare_all(
    normalized: Option<&NormalizedReport>,
    benchmark: Option<&Benchmark>,
    registry: &dyn CanonicalRegistry,
) -> Vec<ComparisonItem> {
    let (Some(normalized), Some(benchmark)) = (normalized, benchmark) else {
        return Vec::new();
    };

    let mut items = compare_attributes(normalized, &benchmark.attributes, registry);
    items.extend(compare_disc(normalized, benchmark.disc.as_ref()));
    items.extend(compare_values(normalized, &benchmark.values));
    items
}
