#![forbid(unsafe_code)]

use serde_json::Value;

/// Raw values at or below this are read as a 0-10 decile score.
pub const DECILE_CEILING: f64 = 10.0;

/// Maps an ambiguous score onto 0-100: anything above 10 is taken as already
/// being a percentage, anything else is a decile and gets multiplied by 10.
/// A true decile of 10 and a true percentage of 10 are indistinguishable here.
pub fn to_scale_100(raw: f64) -> f64 {
    if raw > DECILE_CEILING {
        raw
    } else {
        raw * 10.0
    }
}

pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Numbers pass through; numeric text is parsed. Everything else, including
/// blank text and non-finite results, is `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    if number.is_finite() {
        Some(number)
    } else {
        None
    }
}
