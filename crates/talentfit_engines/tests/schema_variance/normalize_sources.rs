#![forbid(unsafe_code)]

use serde_json::json;
use talentfit_contracts::report::{ValueCategory, ValueKey};
use talentfit_engines::normalize;

#[test]
fn at_variance_01_disc_from_metadata_mirror_as_text() {
    let report = normalize(&json!({
        "metadata": "{\"disc_scores\": {\"estilo_natural\": {\"D\": 12, \"C\": 88}}}"
    }))
    .unwrap();
    assert_eq!(report.disc.d, 12.0);
    assert_eq!(report.disc.i, 50.0);
    assert_eq!(report.disc.c, 88.0);
}

#[test]
fn at_variance_02_values_sources_probe_in_order() {
    let report = normalize(&json!({
        "values_index": [],
        "values_scores": "{\"values_index\": [{\"name\": \"Regulador\", \"score\": 6}]}",
        "metadata": {"values_scores": {"Regulador": 2}}
    }))
    .unwrap();
    assert_eq!(report.values.len(), 1);
    assert_eq!(
        report.values[&ValueKey::Canonical(ValueCategory::Regulatory)].score,
        60.0
    );
}

#[test]
fn at_variance_03_non_numeric_entries_are_silently_excluded() {
    let report = normalize(&json!({
        "scores": {"empathy": "high", "leadership": null, "self_esteem": [1]},
        "values_scores": {"Político": "muito", "Altruísta": 4}
    }))
    .unwrap();
    assert!(report.scores.is_empty());
    assert_eq!(report.values.len(), 1);
}

#[test]
fn at_variance_04_legacy_answers_override_earlier_sources() {
    let report = normalize(&json!({
        "scores": {"decision_making": 3},
        "metadata": {"dimensional_balance": {"decision_making": 5}},
        "answers": {"decision_making": "6.5"}
    }))
    .unwrap();
    assert_eq!(report.scores["decision_making"], 6.5);
}

#[test]
fn at_variance_05_attributes_list_kept_verbatim() {
    let records = json!([
        {"component": "Empatia", "score": 8, "extra": {"band": "A"}},
        {"component": "Autoestima", "score": "6"}
    ]);
    let report = normalize(&json!({"metadata": {"attributes": records.clone()}})).unwrap();
    assert_eq!(serde_json::Value::Array(report.attributes.clone()), records);
    assert_eq!(report.scores["Autoestima"], 6.0);
}
