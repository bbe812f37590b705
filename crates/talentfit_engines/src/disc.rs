#![forbid(unsafe_code)]

use talentfit_contracts::comparison::{ComparisonDomain, ComparisonItem, FitStatus};
use talentfit_contracts::report::{DiscAxis, DiscProfile, NormalizedReport};

use crate::scale::clamp_score;

/// Deltas up to this magnitude are a perfect fit.
pub const TOLERANCE_BAND: f64 = 15.0;
/// Fit points lost per point of delta beyond the band (fit hits 0 at |delta| = 65).
pub const DECAY_PER_POINT: f64 = 2.0;

pub const CRITICAL_DISTANCE: f64 = 30.0;
pub const MODERATE_DISTANCE: f64 = 15.0;

/// Exactly four items, D, I, S, C. A missing benchmark compares against the neutral profile.
pub fn compare_disc(
    normalized: &NormalizedReport,
    benchmark: Option<&DiscProfile>,
) -> Vec<ComparisonItem> {
    let target_profile = benchmark.copied().unwrap_or_else(DiscProfile::neutral);
    let mut items = Vec::with_capacity(DiscAxis::ALL.len());
    for axis in DiscAxis::ALL {
        let candidate = clamp_score(normalized.disc.get(axis));
        let target = clamp_score(target_profile.get(axis));
        let delta = candidate - target;

        items.push(ComparisonItem::new(
            ComparisonDomain::Disc,
            axis.as_str().to_string(),
            axis.label().to_string(),
            candidate,
            target,
            disc_fit(delta),
            disc_status(delta),
        ));
    }
    items
}

pub fn disc_fit(delta: f64) -> f64 {
    let distance = delta.abs();
    if distance <= TOLERANCE_BAND {
        return 100.0;
    }
    (100.0 - (distance - TOLERANCE_BAND) * DECAY_PER_POINT).max(0.0)
}

/// Symmetric: only the magnitude of the delta matters.
pub fn disc_status(delta: f64) -> FitStatus {
    let distance = delta.abs();
    if distance > CRITICAL_DISTANCE {
        FitStatus::Critical
    } else if distance > MODERATE_DISTANCE {
        FitStatus::Moderate
    } else {
        FitStatus::Aligned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::normalize;

    #[test]
    fn at_disc_01_delta_thirty_is_moderate_not_critical() {
        let report = normalize(&json!({"disc": {"D": 80}})).unwrap();
        let items = compare_disc(&report, None);
        let d = &items[0];
        assert_eq!(d.key, "D");
        assert_eq!(d.delta, 30.0);
        assert_eq!(d.status, FitStatus::Moderate);
        assert_eq!(d.fit, 70.0);
    }

    #[test]
    fn at_disc_02_always_four_items_in_fixed_order() {
        let report = normalize(&json!({})).unwrap();
        let items = compare_disc(&report, None);
        let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["D", "I", "S", "C"]);
        assert!(items.iter().all(|i| i.fit == 100.0 && i.status == FitStatus::Aligned));
    }

    #[test]
    fn at_disc_03_tolerance_band_and_decay() {
        assert_eq!(disc_fit(15.0), 100.0);
        assert_eq!(disc_fit(-15.0), 100.0);
        assert_eq!(disc_fit(16.0), 98.0);
        assert_eq!(disc_fit(-40.0), 50.0);
        assert_eq!(disc_fit(65.0), 0.0);
        assert_eq!(disc_fit(90.0), 0.0);
    }

    #[test]
    fn at_disc_04_status_is_symmetric() {
        assert_eq!(disc_status(-31.0), FitStatus::Critical);
        assert_eq!(disc_status(31.0), FitStatus::Critical);
        assert_eq!(disc_status(-16.0), FitStatus::Moderate);
        assert_eq!(disc_status(15.0), FitStatus::Aligned);
    }

    #[test]
    fn at_disc_05_explicit_benchmark_is_used() {
        let report = normalize(&json!({"disc": {"S": 20, "C": 95}})).unwrap();
        let benchmark = DiscProfile {
            d: 50.0,
            i: 50.0,
            s: 70.0,
            c: 60.0,
        };
        let items = compare_disc(&report, Some(&benchmark));
        assert_eq!(items[2].delta, -50.0);
        assert_eq!(items[2].status, FitStatus::Critical);
        assert_eq!(items[2].fit, 30.0);
        assert_eq!(items[3].delta, 35.0);
        assert_eq!(items[3].fit, 60.0);
    }
}
