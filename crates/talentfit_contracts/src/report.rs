#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::common::validate_score;
use crate::{ContractViolation, Validate};

/// Neutral midpoint used for every DISC axis a report or benchmark leaves out.
pub const DISC_NEUTRAL: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiscAxis {
    D,
    I,
    S,
    C,
}

impl DiscAxis {
    pub const ALL: [DiscAxis; 4] = [DiscAxis::D, DiscAxis::I, DiscAxis::S, DiscAxis::C];

    pub fn as_str(self) -> &'static str {
        match self {
            DiscAxis::D => "D",
            DiscAxis::I => "I",
            DiscAxis::S => "S",
            DiscAxis::C => "C",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiscAxis::D => "Dominância",
            DiscAxis::I => "Influência",
            DiscAxis::S => "Estabilidade",
            DiscAxis::C => "Conformidade",
        }
    }

    /// Field names accepted for the axis, compared case-insensitively.
    /// The single letter always comes first.
    pub fn source_names(self) -> &'static [&'static str] {
        match self {
            DiscAxis::D => &["d", "dominance", "dominancia"],
            DiscAxis::I => &["i", "influence", "influencia"],
            DiscAxis::S => &["s", "steadiness", "estabilidade"],
            DiscAxis::C => &["c", "compliance", "conscientiousness", "conformidade"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscProfile {
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "I")]
    pub i: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

impl DiscProfile {
    pub fn neutral() -> Self {
        Self {
            d: DISC_NEUTRAL,
            i: DISC_NEUTRAL,
            s: DISC_NEUTRAL,
            c: DISC_NEUTRAL,
        }
    }

    pub fn get(&self, axis: DiscAxis) -> f64 {
        match axis {
            DiscAxis::D => self.d,
            DiscAxis::I => self.i,
            DiscAxis::S => self.s,
            DiscAxis::C => self.c,
        }
    }

    pub fn set(&mut self, axis: DiscAxis, value: f64) {
        match axis {
            DiscAxis::D => self.d = value,
            DiscAxis::I => self.i = value,
            DiscAxis::S => self.s = value,
            DiscAxis::C => self.c = value,
        }
    }
}

impl Default for DiscProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Validate for DiscProfile {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_score("disc_profile.d", self.d, 0.0, 100.0)?;
        validate_score("disc_profile.i", self.i, 0.0, 100.0)?;
        validate_score("disc_profile.s", self.s, 0.0, 100.0)?;
        validate_score("disc_profile.c", self.c, 0.0, 100.0)
    }
}

/// The seven motivational categories of the values index, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueCategory {
    Aesthetic,
    Economic,
    Individualistic,
    Political,
    Altruistic,
    Regulatory,
    Theoretical,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 7] = [
        ValueCategory::Aesthetic,
        ValueCategory::Economic,
        ValueCategory::Individualistic,
        ValueCategory::Political,
        ValueCategory::Altruistic,
        ValueCategory::Regulatory,
        ValueCategory::Theoretical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueCategory::Aesthetic => "aesthetic",
            ValueCategory::Economic => "economic",
            ValueCategory::Individualistic => "individualistic",
            ValueCategory::Political => "political",
            ValueCategory::Altruistic => "altruistic",
            ValueCategory::Regulatory => "regulatory",
            ValueCategory::Theoretical => "theoretical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ValueCategory::Aesthetic => "Estético",
            ValueCategory::Economic => "Econômico",
            ValueCategory::Individualistic => "Individualista",
            ValueCategory::Political => "Político",
            ValueCategory::Altruistic => "Altruísta",
            ValueCategory::Regulatory => "Regulador",
            ValueCategory::Theoretical => "Teórico",
        }
    }

    /// Stems matched against the start of a normalized (diacritic-free, lowercase) label.
    pub fn label_prefixes(self) -> &'static [&'static str] {
        match self {
            ValueCategory::Aesthetic => &["aesthet", "estet", "esthet"],
            ValueCategory::Economic => &["econ"],
            ValueCategory::Individualistic => &["individual"],
            ValueCategory::Political => &["polit"],
            ValueCategory::Altruistic => &["altru"],
            ValueCategory::Regulatory => &["regul"],
            ValueCategory::Theoretical => &["theor", "teor"],
        }
    }

    pub fn from_normalized_label(label: &str) -> Option<Self> {
        ValueCategory::ALL.into_iter().find(|category| {
            category
                .label_prefixes()
                .iter()
                .any(|prefix| label.starts_with(prefix))
        })
    }
}

/// Key of the candidate values mapping. Labels that match no category are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKey {
    Canonical(ValueCategory),
    Unrecognized(String),
}

impl ValueKey {
    pub fn as_str(&self) -> &str {
        match self {
            ValueKey::Canonical(category) => category.as_str(),
            ValueKey::Unrecognized(label) => label.as_str(),
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, ValueKey::Canonical(_))
    }
}

impl fmt::Display for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueScore {
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Canonical shape of one assessment report, rebuilt on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedReport {
    pub disc: DiscProfile,
    pub values: BTreeMap<ValueKey, ValueScore>,
    /// Attribute records exactly as the producer sent them, kept for display.
    pub attributes: Vec<Value>,
    /// Attribute/competency name -> score on the producer's native scale.
    pub scores: BTreeMap<String, f64>,
    pub fit: f64,
}

impl NormalizedReport {
    pub fn value_score(&self, category: ValueCategory) -> Option<f64> {
        self.values
            .get(&ValueKey::Canonical(category))
            .map(|value| value.score)
    }
}

impl Validate for NormalizedReport {
    fn validate(&self) -> Result<(), ContractViolation> {
        self.disc.validate()?;
        for value in self.values.values() {
            if !value.score.is_finite() {
                return Err(ContractViolation::NotFinite {
                    field: "normalized_report.values.score",
                });
            }
        }
        if self.scores.values().any(|score| !score.is_finite()) {
            return Err(ContractViolation::NotFinite {
                field: "normalized_report.scores",
            });
        }
        validate_score("normalized_report.fit", self.fit, 0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_report_01_value_category_prefix_matching() {
        assert_eq!(
            ValueCategory::from_normalized_label("estetico"),
            Some(ValueCategory::Aesthetic)
        );
        assert_eq!(
            ValueCategory::from_normalized_label("economic"),
            Some(ValueCategory::Economic)
        );
        assert_eq!(
            ValueCategory::from_normalized_label("teorico"),
            Some(ValueCategory::Theoretical)
        );
        assert_eq!(
            ValueCategory::from_normalized_label("regulador"),
            Some(ValueCategory::Regulatory)
        );
        assert_eq!(ValueCategory::from_normalized_label("spiritual"), None);
    }

    #[test]
    fn at_report_02_value_key_orders_canonical_before_unrecognized() {
        let mut keys = vec![
            ValueKey::Unrecognized("spiritual".to_string()),
            ValueKey::Canonical(ValueCategory::Theoretical),
            ValueKey::Canonical(ValueCategory::Aesthetic),
        ];
        keys.sort();
        assert_eq!(keys[0], ValueKey::Canonical(ValueCategory::Aesthetic));
        assert_eq!(keys[2].as_str(), "spiritual");
    }

    #[test]
    fn at_report_03_disc_profile_get_set_and_validate() {
        let mut disc = DiscProfile::neutral();
        disc.set(DiscAxis::D, 80.0);
        assert_eq!(disc.get(DiscAxis::D), 80.0);
        assert_eq!(disc.get(DiscAxis::C), DISC_NEUTRAL);
        assert!(disc.validate().is_ok());
        disc.set(DiscAxis::S, 140.0);
        assert!(disc.validate().is_err());
    }

    #[test]
    fn at_report_04_serializes_value_keys_as_strings() {
        let mut values = BTreeMap::new();
        values.insert(
            ValueKey::Canonical(ValueCategory::Economic),
            ValueScore {
                score: 70.0,
                description: None,
            },
        );
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["economic"]["score"], 70.0);
        assert!(json["economic"].get("description").is_none());
    }
}
