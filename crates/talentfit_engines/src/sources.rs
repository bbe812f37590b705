#![forbid(unsafe_code)]

//! Named, ordered source locations for every field the normalizer reconciles.
//! Precedence lives in these tables, not in the extraction code.

use std::borrow::Cow;

use serde_json::Value;
use tracing::debug;

/// One place inside a raw report where a logical field may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionSource {
    pub name: &'static str,
    pub path: &'static [&'static str],
}

impl ExtractionSource {
    pub const fn new(name: &'static str, path: &'static [&'static str]) -> Self {
        Self { name, path }
    }

    /// Walks the path, decoding JSON-as-text objects/arrays along the way.
    /// Missing keys, nulls and undecodable text all resolve to `None`.
    pub fn resolve<'a>(&self, raw: &'a Value) -> Option<Cow<'a, Value>> {
        let mut current = decode_embedded(Cow::Borrowed(raw))?;
        for segment in self.path {
            current = match current {
                Cow::Borrowed(value) => Cow::Borrowed(value.get(*segment)?),
                Cow::Owned(mut value) => Cow::Owned(value.get_mut(*segment)?.take()),
            };
            current = decode_embedded(current)?;
        }
        Some(current)
    }
}

pub const DISC_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("disc_scores", &["disc_scores"]),
    ExtractionSource::new("disc", &["disc"]),
    ExtractionSource::new("disc_profile", &["disc_profile"]),
    ExtractionSource::new("metadata.disc_scores", &["metadata", "disc_scores"]),
    ExtractionSource::new("metadata.disc", &["metadata", "disc"]),
    ExtractionSource::new("analysis.disc", &["analysis", "disc"]),
];

/// Sub-records preferred over the enclosing DISC source when present.
pub const DISC_NATURAL_KEYS: &[&str] = &["natural", "estilo_natural"];

pub const VALUES_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("values_index", &["values_index"]),
    ExtractionSource::new("values_scores", &["values_scores"]),
    ExtractionSource::new("metadata.values_scores", &["metadata", "values_scores"]),
];

/// Keys under which a one-level wrapper object may carry the values array.
pub const VALUES_WRAPPER_KEYS: &[&str] = &["values", "values_index"];

/// Merged in this order; a later source overwrites an earlier one per key.
pub const ATTRIBUTE_SCORE_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("scores", &["scores"]),
    ExtractionSource::new("dimensional_balance", &["dimensional_balance"]),
    ExtractionSource::new("metadata.scores", &["metadata", "scores"]),
    ExtractionSource::new(
        "metadata.dimensional_balance",
        &["metadata", "dimensional_balance"],
    ),
    ExtractionSource::new(
        "analysis.dimensional_balance",
        &["analysis", "dimensional_balance"],
    ),
    ExtractionSource::new("competencies", &["competencies"]),
    ExtractionSource::new("answers", &["answers"]),
    ExtractionSource::new("metadata.answers", &["metadata", "answers"]),
];

pub const ATTRIBUTE_RECORD_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("attributes", &["attributes"]),
    ExtractionSource::new("metadata.attributes", &["metadata", "attributes"]),
];

pub const FIT_SOURCES: &[ExtractionSource] = &[
    ExtractionSource::new("fit", &["fit"]),
    ExtractionSource::new("fit_score", &["fit_score"]),
];

/// Chain of responsibility: the first source whose extractor yields a value wins.
pub fn first_match<T>(
    raw: &Value,
    sources: &[ExtractionSource],
    mut extract: impl FnMut(&Value) -> Option<T>,
) -> Option<(&'static str, T)> {
    sources.iter().find_map(|source| {
        let value = source.resolve(raw)?;
        let out = extract(value.as_ref())?;
        Some((source.name, out))
    })
}

/// Visits every resolvable source in declared order.
pub fn for_each_source(
    raw: &Value,
    sources: &[ExtractionSource],
    mut visit: impl FnMut(&'static str, &Value),
) {
    for source in sources {
        if let Some(value) = source.resolve(raw) {
            visit(source.name, value.as_ref());
        }
    }
}

pub(crate) fn decode_embedded(value: Cow<'_, Value>) -> Option<Cow<'_, Value>> {
    if value.is_null() {
        return None;
    }
    if let Value::String(text) = value.as_ref() {
        let trimmed = text.trim();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return parse_embedded_json(trimmed).map(Cow::Owned);
        }
    }
    Some(value)
}

fn parse_embedded_json(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(err) => {
            debug!(error = %err, "embedded json field did not parse; treating as no data");
            None
        }
    }
}
