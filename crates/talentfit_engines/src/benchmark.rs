#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde_json::Value;
use talentfit_contracts::benchmark::{Benchmark, ValuePreference};

use crate::normalizer::disc_from_map;
use crate::scale::coerce_number;
use crate::sources::{first_match, ExtractionSource};

const ATTRIBUTE_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("attribute_scores", &["attribute_scores"]),
    ExtractionSource::new("scores", &["scores"]),
    ExtractionSource::new("attributes", &["attributes"]),
];

const DISC_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("disc", &["disc"]),
    ExtractionSource::new("disc_preferences", &["disc_preferences"]),
    ExtractionSource::new("ideal_disc", &["ideal_disc"]),
];

const VALUES_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("values", &["values"]),
    ExtractionSource::new("values_preferences", &["values_preferences"]),
    ExtractionSource::new("ideal_values", &["ideal_values"]),
];

/// Reads a role's target profile. `None` for null or non-object input.
pub fn parse_benchmark(raw: &Value) -> Option<Benchmark> {
    let decoded = ExtractionSource::new("benchmark", &[]).resolve(raw)?;
    if !decoded.is_object() {
        return None;
    }
    let root = decoded.as_ref();

    let attributes = first_match(root, ATTRIBUTE_SOURCES, |source| {
        let map = source.as_object()?;
        Some(
            map.iter()
                .filter_map(|(name, score)| Some((name.clone(), coerce_number(score)?)))
                .collect::<BTreeMap<String, f64>>(),
        )
    })
    .map(|(_, attributes)| attributes)
    .unwrap_or_default();

    let disc = first_match(root, DISC_SOURCES, |source| source.as_object().map(disc_from_map))
        .map(|(_, disc)| disc);

    let values = first_match(root, VALUES_SOURCES, |source| {
        let map = source.as_object()?;
        Some(
            map.iter()
                .filter_map(|(name, preference)| {
                    Some((name.clone(), value_preference(preference)?))
                })
                .collect::<BTreeMap<String, ValuePreference>>(),
        )
    })
    .map(|(_, values)| values)
    .unwrap_or_default();

    Some(Benchmark {
        attributes,
        disc,
        values,
    })
}

fn value_preference(raw: &Value) -> Option<ValuePreference> {
    if let Some(number) = coerce_number(raw) {
        return Some(ValuePreference::Numeric(number));
    }
    match raw {
        Value::String(level) => Some(ValuePreference::Level(level.clone())),
        Value::Object(_) => raw.get("score").and_then(value_preference),
        _ => None,
    }
}
