#![forbid(unsafe_code)]

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};
use talentfit_contracts::report::{DiscAxis, DiscProfile, NormalizedReport, ValueKey, ValueScore};
use tracing::{debug, warn};

use crate::labels::canonical_value_key;
use crate::scale::{clamp_score, coerce_number, to_scale_100};
use crate::sources::{
    decode_embedded, first_match, for_each_source, ATTRIBUTE_RECORD_SOURCES, ATTRIBUTE_SCORE_SOURCES,
    DISC_NATURAL_KEYS, DISC_SOURCES, FIT_SOURCES, VALUES_SOURCES, VALUES_WRAPPER_KEYS,
};

/// What to do with a values label that matches none of the seven categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownValueLabelPolicy {
    /// Keep the entry under its normalized label.
    #[default]
    Retain,
    Drop,
}

impl UnknownValueLabelPolicy {
    pub fn from_env_value(raw: Option<String>) -> Self {
        match raw
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("drop") => Self::Drop,
            _ => Self::Retain,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Drop => "drop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaNormalizer {
    unknown_value_labels: UnknownValueLabelPolicy,
}

impl SchemaNormalizer {
    pub fn new(unknown_value_labels: UnknownValueLabelPolicy) -> Self {
        Self {
            unknown_value_labels,
        }
    }

    /// `None` only for a null report; any other shape yields a (possibly all-default) report.
    pub fn normalize(&self, raw: &Value) -> Option<NormalizedReport> {
        if raw.is_null() {
            return None;
        }

        let attributes = extract_attribute_records(raw);
        let mut scores = merge_attribute_scores(raw);
        if scores.is_empty() {
            scores = scores_from_attribute_records(&attributes);
        }

        Some(NormalizedReport {
            disc: extract_disc(raw),
            values: self.extract_values(raw),
            attributes,
            scores,
            fit: extract_fit(raw),
        })
    }

    fn extract_values(&self, raw: &Value) -> BTreeMap<ValueKey, ValueScore> {
        let hit = first_match(raw, VALUES_SOURCES, |source| {
            let entries = self.values_from_source(source);
            if entries.is_empty() {
                None
            } else {
                Some(entries)
            }
        });
        match hit {
            Some((source, entries)) => {
                debug!(source, count = entries.len(), "values extracted");
                entries
            }
            None => BTreeMap::new(),
        }
    }

    fn values_from_source(&self, source: &Value) -> BTreeMap<ValueKey, ValueScore> {
        let mut out = BTreeMap::new();
        match unwrap_values_wrapper(source) {
            Value::Array(records) => {
                for record in records {
                    let Some(label) = record_label(record) else {
                        continue;
                    };
                    let Some(score) = record.get("score").and_then(coerce_number) else {
                        continue;
                    };
                    self.insert_value(&mut out, label, score, description_of(record));
                }
            }
            Value::Object(mapping) => {
                for (label, entry) in mapping {
                    let (score, description) = match entry {
                        Value::Object(_) => (
                            entry.get("score").and_then(coerce_number),
                            description_of(entry),
                        ),
                        _ => (coerce_number(entry), None),
                    };
                    if let Some(score) = score {
                        self.insert_value(&mut out, label, score, description);
                    }
                }
            }
            _ => {}
        }
        out
    }

    fn insert_value(
        &self,
        out: &mut BTreeMap<ValueKey, ValueScore>,
        label: &str,
        raw_score: f64,
        description: Option<String>,
    ) {
        let key = canonical_value_key(label);
        if !key.is_canonical() {
            warn!(
                label,
                policy = self.unknown_value_labels.as_str(),
                "values label matches no canonical category"
            );
            if self.unknown_value_labels == UnknownValueLabelPolicy::Drop {
                return;
            }
        }
        out.insert(
            key,
            ValueScore {
                score: clamp_score(to_scale_100(raw_score)),
                description,
            },
        );
    }
}

/// Normalizes with the default (retain unknown labels) policy.
pub fn normalize(raw: &Value) -> Option<NormalizedReport> {
    SchemaNormalizer::default().normalize(raw)
}

fn extract_disc(raw: &Value) -> DiscProfile {
    let hit = first_match(raw, DISC_SOURCES, |source| {
        let map = source.as_object().filter(|map| !map.is_empty())?;
        Some(disc_from_map(&preferred_disc_record(map)))
    });
    match hit {
        Some((source, disc)) => {
            debug!(source, "disc extracted");
            disc
        }
        None => DiscProfile::neutral(),
    }
}

/// First non-empty natural-style sub-record (object or JSON text), else the source itself.
fn preferred_disc_record(source: &Map<String, Value>) -> Cow<'_, Map<String, Value>> {
    DISC_NATURAL_KEYS
        .iter()
        .filter_map(|key| source.get(*key))
        .find_map(|natural| match decode_embedded(Cow::Borrowed(natural))? {
            Cow::Borrowed(Value::Object(map)) if !map.is_empty() => Some(Cow::Borrowed(map)),
            Cow::Owned(Value::Object(map)) if !map.is_empty() => Some(Cow::Owned(map)),
            _ => None,
        })
        .unwrap_or(Cow::Borrowed(source))
}

/// Reads the four axes from one record; absent axes stay at the neutral midpoint.
pub(crate) fn disc_from_map(map: &Map<String, Value>) -> DiscProfile {
    let mut disc = DiscProfile::neutral();
    for axis in DiscAxis::ALL {
        if let Some(value) = axis_value(map, axis) {
            disc.set(axis, clamp_score(value));
        }
    }
    disc
}

fn axis_value(map: &Map<String, Value>, axis: DiscAxis) -> Option<f64> {
    axis.source_names().iter().find_map(|name| {
        map.iter()
            .filter(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .find_map(|(_, value)| coerce_number(value))
    })
}

fn unwrap_values_wrapper(source: &Value) -> &Value {
    if let Value::Object(map) = source {
        if let Some(inner) = VALUES_WRAPPER_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find(|inner| inner.is_array())
        {
            return inner;
        }
    }
    source
}

fn record_label(record: &Value) -> Option<&str> {
    ["value_name", "name", "dimension"]
        .iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|label| !label.is_empty())
}

fn description_of(entry: &Value) -> Option<String> {
    entry
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn merge_attribute_scores(raw: &Value) -> BTreeMap<String, f64> {
    let mut merged = BTreeMap::new();
    for_each_source(raw, ATTRIBUTE_SCORE_SOURCES, |source, value| {
        let Some(map) = value.as_object() else {
            debug!(source, "attribute score source is not a mapping; skipped");
            return;
        };
        for (name, score) in map {
            if let Some(score) = coerce_number(score) {
                merged.insert(name.clone(), score);
            }
        }
    });
    merged
}

fn extract_attribute_records(raw: &Value) -> Vec<Value> {
    first_match(raw, ATTRIBUTE_RECORD_SOURCES, |source| source.as_array().cloned())
        .map(|(_, records)| records)
        .unwrap_or_default()
}

fn scores_from_attribute_records(records: &[Value]) -> BTreeMap<String, f64> {
    records
        .iter()
        .filter_map(|record| {
            let component = record.get("component").and_then(Value::as_str)?.trim();
            if component.is_empty() {
                return None;
            }
            let score = record.get("score").and_then(coerce_number)?;
            Some((component.to_string(), score))
        })
        .collect()
}

fn extract_fit(raw: &Value) -> f64 {
    first_match(raw, FIT_SOURCES, coerce_number)
        .map(|(_, fit)| clamp_score(fit))
        .unwrap_or(0.0)
}
