#![forbid(unsafe_code)]

//! Averages and gap views that rendering/ranking consumers derive from a comparison list.

use talentfit_contracts::comparison::{
    ComparisonDomain, ComparisonItem, ComparisonSummary, FitStatus,
};

/// Unweighted mean of every item's fit, rounded. Domains with more items
/// (attributes) weigh more; that is the observed scoring behavior.
pub fn global_fit(items: &[ComparisonItem]) -> Option<u8> {
    mean_fit(items.iter())
}

pub fn domain_fit(items: &[ComparisonItem], domain: ComparisonDomain) -> Option<u8> {
    mean_fit(items.iter().filter(|item| item.domain == domain))
}

pub fn summarize(items: &[ComparisonItem]) -> ComparisonSummary {
    let count = |status: FitStatus| items.iter().filter(|item| item.status == status).count();
    ComparisonSummary {
        global_fit: global_fit(items),
        attribute_fit: domain_fit(items, ComparisonDomain::Attribute),
        disc_fit: domain_fit(items, ComparisonDomain::Disc),
        values_fit: domain_fit(items, ComparisonDomain::Value),
        critical: count(FitStatus::Critical),
        moderate: count(FitStatus::Moderate),
        aligned: count(FitStatus::Aligned),
        surplus: count(FitStatus::Surplus),
    }
}

/// Critical and moderate items, most severe first, then largest deficit first.
/// Returns a new list; the comparison order itself is left untouched.
pub fn gap_list(items: &[ComparisonItem]) -> Vec<ComparisonItem> {
    let mut gaps: Vec<ComparisonItem> = items
        .iter()
        .filter(|item| item.status.is_gap())
        .cloned()
        .collect();
    gaps.sort_by(|a, b| {
        a.status
            .cmp(&b.status)
            .then_with(|| a.delta.total_cmp(&b.delta))
    });
    gaps
}

fn mean_fit<'a>(items: impl Iterator<Item = &'a ComparisonItem>) -> Option<u8> {
    let (sum, count) = items.fold((0.0_f64, 0_usize), |(sum, count), item| {
        (sum + item.fit, count + 1)
    });
    if count == 0 {
        return None;
    }
    let mean = (sum / count as f64).round().clamp(0.0, 100.0);
    Some(mean as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        domain: ComparisonDomain,
        key: &str,
        candidate: f64,
        fit: f64,
        status: FitStatus,
    ) -> ComparisonItem {
        ComparisonItem::v1(
            domain,
            key.to_string(),
            key.to_string(),
            candidate,
            50.0,
            fit,
            status,
        )
        .unwrap()
    }

    #[test]
    fn at_summary_01_global_fit_rounds_mean() {
        let items = vec![
            item(ComparisonDomain::Attribute, "a", 50.0, 100.0, FitStatus::Aligned),
            item(ComparisonDomain::Disc, "D", 80.0, 70.0, FitStatus::Moderate),
            item(ComparisonDomain::Value, "economic", 0.0, 20.0, FitStatus::Critical),
        ];
        assert_eq!(global_fit(&items), Some(63));
        assert_eq!(global_fit(&[]), None);
    }

    #[test]
    fn at_summary_02_domain_fit_and_counts() {
        let items = vec![
            item(ComparisonDomain::Attribute, "a", 50.0, 100.0, FitStatus::Aligned),
            item(ComparisonDomain::Attribute, "b", 95.0, 55.0, FitStatus::Surplus),
            item(ComparisonDomain::Disc, "D", 80.0, 70.0, FitStatus::Moderate),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.attribute_fit, Some(78));
        assert_eq!(summary.disc_fit, Some(70));
        assert_eq!(summary.values_fit, None);
        assert_eq!(summary.global_fit, Some(75));
        assert_eq!(
            (summary.critical, summary.moderate, summary.aligned, summary.surplus),
            (0, 1, 1, 1)
        );
    }

    #[test]
    fn at_summary_03_gap_list_orders_by_severity_then_deficit() {
        let items = vec![
            item(ComparisonDomain::Attribute, "mild", 35.0, 85.0, FitStatus::Moderate),
            item(ComparisonDomain::Attribute, "ok", 50.0, 100.0, FitStatus::Aligned),
            item(ComparisonDomain::Attribute, "worse", 10.0, 60.0, FitStatus::Critical),
            item(ComparisonDomain::Attribute, "bad", 25.0, 75.0, FitStatus::Critical),
        ];
        let keys: Vec<String> = gap_list(&items).into_iter().map(|i| i.key).collect();
        assert_eq!(keys, vec!["worse", "bad", "mild"]);
        assert_eq!(items[1].key, "ok");
    }
}
