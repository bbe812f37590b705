#![forbid(unsafe_code)]

use talentfit_contracts::benchmark::ValuePreference;
use talentfit_contracts::report::{ValueCategory, ValueKey};
use talentfit_contracts::text::normalize_label;

use crate::scale::{clamp_score, to_scale_100};

pub const LEVEL_HIGH_SCORE: f64 = 85.0;
pub const LEVEL_LOW_SCORE: f64 = 15.0;
pub const LEVEL_DEFAULT_SCORE: f64 = 50.0;

/// Canonicalizes a values label. Unmatched labels keep their normalized text.
pub fn canonical_value_key(label: &str) -> ValueKey {
    let normalized = normalize_label(label);
    match ValueCategory::from_normalized_label(&normalized) {
        Some(category) => ValueKey::Canonical(category),
        None => ValueKey::Unrecognized(normalized),
    }
}

/// Benchmark values preference on the 0-100 scale.
pub fn value_preference_score(preference: &ValuePreference) -> f64 {
    match preference {
        ValuePreference::Numeric(raw) => clamp_score(to_scale_100(*raw)),
        ValuePreference::Level(text) => level_score(text),
    }
}

fn level_score(text: &str) -> f64 {
    let token = text.to_lowercase();
    if token.contains("alto") || token.contains("high") {
        return LEVEL_HIGH_SCORE;
    }
    if token.contains("baixo") || token.contains("low") {
        return LEVEL_LOW_SCORE;
    }
    LEVEL_DEFAULT_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_labels_01_diacritic_and_case_variants_canonicalize() {
        for label in ["Estético", "estetico", "  AESTHETIC ", "Aesthetics"] {
            assert_eq!(
                canonical_value_key(label),
                ValueKey::Canonical(ValueCategory::Aesthetic)
            );
        }
        assert_eq!(
            canonical_value_key("Econômico"),
            ValueKey::Canonical(ValueCategory::Economic)
        );
        assert_eq!(
            canonical_value_key("Teórico"),
            ValueKey::Canonical(ValueCategory::Theoretical)
        );
    }

    #[test]
    fn at_labels_02_unknown_label_kept_normalized() {
        assert_eq!(
            canonical_value_key(" Espiritualidade "),
            ValueKey::Unrecognized("espiritualidade".to_string())
        );
    }

    #[test]
    fn at_labels_03_level_text_maps_to_fixed_scores() {
        let level = |text: &str| value_preference_score(&ValuePreference::Level(text.to_string()));
        assert_eq!(level("alto"), 85.0);
        assert_eq!(level("Muito Alto"), 85.0);
        assert_eq!(level("HIGH"), 85.0);
        assert_eq!(level("baixo"), 15.0);
        assert_eq!(level("low"), 15.0);
        assert_eq!(level("medio"), 50.0);
        assert_eq!(level("qualquer"), 50.0);
    }

    #[test]
    fn at_labels_04_numeric_preference_uses_scale_rule() {
        assert_eq!(value_preference_score(&ValuePreference::Numeric(7.0)), 70.0);
        assert_eq!(value_preference_score(&ValuePreference::Numeric(64.0)), 64.0);
        assert_eq!(value_preference_score(&ValuePreference::Numeric(10.0)), 100.0);
    }
}
