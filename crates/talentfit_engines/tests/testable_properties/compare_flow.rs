#![forbid(unsafe_code)]

use serde_json::{json, Value};
use talentfit_contracts::benchmark::Benchmark;
use talentfit_contracts::comparison::{ComparisonDomain, FitStatus};
use talentfit_contracts::registry::{CanonicalRegistry, StaticRegistry};
use talentfit_engines::attributes::compare_attributes;
use talentfit_engines::benchmark::parse_benchmark;
use talentfit_engines::disc::compare_disc;
use talentfit_engines::scale::to_scale_100;
use talentfit_engines::values::compare_values;
use talentfit_engines::{compare_all, global_fit, normalize, summarize};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn candidate_report() -> Value {
    json!({
        "scores": {"empathy": 9.3, "leadership": 4},
        "disc_scores": "{\"natural\": {\"D\": 80, \"I\": 45, \"S\": 20, \"C\": 60}}",
        "values_index": [
            {"value_name": "Econômico", "score": 36},
            {"value_name": "Teórico", "score": 7.5},
            {"value_name": "Espiritual", "score": 5}
        ],
        "fit": "68"
    })
}

fn role_benchmark() -> Value {
    json!({
        "attribute_scores": {"empathy": 7.0, "leadership": 8},
        "disc": {"D": 50, "I": 50, "S": 70, "C": 60},
        "values": {"economic": "alto", "Teórico": 8}
    })
}

#[test]
fn at_flow_01_null_report_is_absent() {
    assert!(normalize(&Value::Null).is_none());
}

#[test]
fn at_flow_02_scale_rule_examples() {
    assert_eq!(to_scale_100(8.5), 85.0);
    assert_eq!(to_scale_100(92.0), 92.0);
    assert_eq!(to_scale_100(10.0), 100.0);
}

#[test]
fn at_flow_03_domain_examples_end_to_end() {
    let registry = StaticRegistry::builtin();
    let report = normalize(&candidate_report()).unwrap();
    let benchmark = parse_benchmark(&role_benchmark()).unwrap();

    let attributes = compare_attributes(&report, &benchmark.attributes, &registry);
    let empathy = &attributes[0];
    assert!(close(empathy.candidate_score, 93.0));
    assert!(close(empathy.benchmark_score, 70.0));
    assert!(close(empathy.delta, 23.0));
    assert!(close(empathy.fit, 77.0));
    assert_eq!(empathy.status, FitStatus::Surplus);

    let disc = compare_disc(&report, benchmark.disc.as_ref());
    assert_eq!(disc[0].delta, 30.0);
    assert_eq!(disc[0].status, FitStatus::Moderate);
    assert_eq!(disc[0].fit, 70.0);

    let values = compare_values(&report, &benchmark.values);
    let economic = values.iter().find(|i| i.key == "economic").unwrap();
    assert_eq!(economic.candidate_score, 36.0);
    assert_eq!(economic.benchmark_score, 85.0);
    assert_eq!(economic.delta, -49.0);
    assert_eq!(economic.status, FitStatus::Critical);
    assert_eq!(economic.fit, 20.0);
}

#[test]
fn at_flow_04_compare_all_requires_both_sides() {
    let registry = StaticRegistry::builtin();
    let report = normalize(&candidate_report()).unwrap();
    let benchmark = parse_benchmark(&role_benchmark()).unwrap();
    assert!(compare_all(Some(&report), None, &registry).is_empty());
    assert!(compare_all(None, Some(&benchmark), &registry).is_empty());
}

#[test]
fn at_flow_05_fixed_domain_counts_even_for_sparse_data() {
    let registry = StaticRegistry::builtin();
    let report = normalize(&json!({})).unwrap();
    let items = compare_all(Some(&report), Some(&Benchmark::default()), &registry);

    let count = |domain: ComparisonDomain| items.iter().filter(|i| i.domain == domain).count();
    assert_eq!(count(ComparisonDomain::Attribute), registry.len());
    assert_eq!(count(ComparisonDomain::Disc), 4);
    assert_eq!(count(ComparisonDomain::Value), 7);
}

#[test]
fn at_flow_06_every_item_respects_scale_and_delta_invariants() {
    let registry = StaticRegistry::builtin();
    let report = normalize(&candidate_report()).unwrap();
    let benchmark = parse_benchmark(&role_benchmark()).unwrap();
    let items = compare_all(Some(&report), Some(&benchmark), &registry);
    assert_eq!(items.len(), registry.len() + 11);
    for item in &items {
        assert!((0.0..=100.0).contains(&item.candidate_score));
        assert!((0.0..=100.0).contains(&item.benchmark_score));
        assert!((0.0..=100.0).contains(&item.fit));
        assert!(close(item.delta, item.candidate_score - item.benchmark_score));
    }
}

#[test]
fn at_flow_07_global_fit_is_unweighted_item_mean() {
    let registry = StaticRegistry::builtin();
    let report = normalize(&candidate_report()).unwrap();
    let benchmark = parse_benchmark(&role_benchmark()).unwrap();
    let items = compare_all(Some(&report), Some(&benchmark), &registry);

    let mean = items.iter().map(|i| i.fit).sum::<f64>() / items.len() as f64;
    assert_eq!(global_fit(&items), Some(mean.round() as u8));
    assert_eq!(summarize(&items).global_fit, global_fit(&items));
}

#[test]
fn at_flow_08_repeated_runs_are_identical() {
    let registry = StaticRegistry::builtin();
    let run = || {
        let report = normalize(&candidate_report()).unwrap();
        let benchmark = parse_benchmark(&role_benchmark()).unwrap();
        compare_all(Some(&report), Some(&benchmark), &registry)
    };
    assert_eq!(run(), run());
}
