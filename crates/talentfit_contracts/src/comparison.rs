#![forbid(unsafe_code)]

use serde::Serialize;

use crate::common::{validate_score, validate_text};
use crate::{ContractViolation, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonDomain {
    Attribute,
    Disc,
    Value,
}

impl ComparisonDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonDomain::Attribute => "attribute",
            ComparisonDomain::Disc => "disc",
            ComparisonDomain::Value => "value",
        }
    }
}

/// Gap tier of one comparison. Declared from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStatus {
    Critical,
    Moderate,
    Aligned,
    Surplus,
}

impl FitStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FitStatus::Critical => "critical",
            FitStatus::Moderate => "moderate",
            FitStatus::Aligned => "aligned",
            FitStatus::Surplus => "surplus",
        }
    }

    pub fn is_gap(self) -> bool {
        matches!(self, FitStatus::Critical | FitStatus::Moderate)
    }
}

const DELTA_TOLERANCE: f64 = 1e-9;

/// One candidate-vs-benchmark data point. All scores are on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonItem {
    pub domain: ComparisonDomain,
    pub key: String,
    pub label: String,
    pub candidate_score: f64,
    pub benchmark_score: f64,
    pub delta: f64,
    pub fit: f64,
    pub status: FitStatus,
}

impl ComparisonItem {
    /// Unchecked build for comparators that already clamp their scores.
    /// `delta` is derived here so it always equals `candidate_score - benchmark_score`.
    pub fn new(
        domain: ComparisonDomain,
        key: String,
        label: String,
        candidate_score: f64,
        benchmark_score: f64,
        fit: f64,
        status: FitStatus,
    ) -> Self {
        Self {
            domain,
            key,
            label,
            candidate_score,
            benchmark_score,
            delta: candidate_score - benchmark_score,
            fit,
            status,
        }
    }

    pub fn v1(
        domain: ComparisonDomain,
        key: String,
        label: String,
        candidate_score: f64,
        benchmark_score: f64,
        fit: f64,
        status: FitStatus,
    ) -> Result<Self, ContractViolation> {
        let item = Self::new(
            domain,
            key,
            label,
            candidate_score,
            benchmark_score,
            fit,
            status,
        );
        item.validate()?;
        Ok(item)
    }
}

impl Validate for ComparisonItem {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("comparison_item.key", &self.key, 128)?;
        validate_text("comparison_item.label", &self.label, 128)?;
        validate_score(
            "comparison_item.candidate_score",
            self.candidate_score,
            0.0,
            100.0,
        )?;
        validate_score(
            "comparison_item.benchmark_score",
            self.benchmark_score,
            0.0,
            100.0,
        )?;
        validate_score("comparison_item.fit", self.fit, 0.0, 100.0)?;
        if !self.delta.is_finite() {
            return Err(ContractViolation::NotFinite {
                field: "comparison_item.delta",
            });
        }
        if (self.delta - (self.candidate_score - self.benchmark_score)).abs() > DELTA_TOLERANCE {
            return Err(ContractViolation::InvalidValue {
                field: "comparison_item.delta",
                reason: "must equal candidate_score - benchmark_score",
            });
        }
        Ok(())
    }
}

/// Consumer-facing averages over a comparison list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ComparisonSummary {
    pub global_fit: Option<u8>,
    pub attribute_fit: Option<u8>,
    pub disc_fit: Option<u8>,
    pub values_fit: Option<u8>,
    pub critical: usize,
    pub moderate: usize,
    pub aligned: usize,
    pub surplus: usize,
}
