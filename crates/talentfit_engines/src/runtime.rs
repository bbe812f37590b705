#![forbid(unsafe_code)]

use std::env;

use serde_json::Value;
use talentfit_contracts::registry::{validate_registry, CanonicalRegistry, StaticRegistry};
use talentfit_contracts::runtime::{
    CompareAllOk, CompareAllRequest, TalentFitCapabilityId, TalentFitRefuse, TalentFitRequest,
    TalentFitResponse,
};
use talentfit_contracts::{ReasonCodeId, Validate};
use tracing::{debug, warn};

use crate::aggregate::compare_all;
use crate::benchmark::parse_benchmark;
use crate::normalizer::{SchemaNormalizer, UnknownValueLabelPolicy};
use crate::summary::summarize;

pub mod reason_codes {
    use talentfit_contracts::ReasonCodeId;

    // TALENTFIT reason-code namespace.
    pub const TALENTFIT_OK_COMPARE_ALL: ReasonCodeId = ReasonCodeId(0x5446_0001);

    pub const TALENTFIT_INPUT_SCHEMA_INVALID: ReasonCodeId = ReasonCodeId(0x5446_00F1);
    pub const TALENTFIT_REPORT_MISSING: ReasonCodeId = ReasonCodeId(0x5446_00F2);
    pub const TALENTFIT_BENCHMARK_MISSING: ReasonCodeId = ReasonCodeId(0x5446_00F3);
    pub const TALENTFIT_INPUT_BUDGET_EXCEEDED: ReasonCodeId = ReasonCodeId(0x5446_00F4);
    pub const TALENTFIT_INTERNAL_PIPELINE_ERROR: ReasonCodeId = ReasonCodeId(0x5446_00F5);
    pub const TALENTFIT_REGISTRY_INVALID: ReasonCodeId = ReasonCodeId(0x5446_00F6);
}

pub const DEFAULT_MAX_REPORT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TalentFitConfig {
    pub unknown_value_labels: UnknownValueLabelPolicy,
    pub max_report_bytes: usize,
}

impl TalentFitConfig {
    pub fn mvp_v1() -> Self {
        Self {
            unknown_value_labels: UnknownValueLabelPolicy::Retain,
            max_report_bytes: DEFAULT_MAX_REPORT_BYTES,
        }
    }

    /// `mvp_v1` with `TALENTFIT_UNKNOWN_VALUE_LABELS` and `TALENTFIT_MAX_REPORT_BYTES` applied.
    pub fn from_env() -> Self {
        Self::from_env_values(
            env::var("TALENTFIT_UNKNOWN_VALUE_LABELS").ok(),
            env::var("TALENTFIT_MAX_REPORT_BYTES").ok(),
        )
    }

    fn from_env_values(
        unknown_value_labels: Option<String>,
        max_report_bytes: Option<String>,
    ) -> Self {
        let defaults = Self::mvp_v1();
        Self {
            unknown_value_labels: UnknownValueLabelPolicy::from_env_value(unknown_value_labels),
            max_report_bytes: max_report_bytes
                .as_deref()
                .map(str::trim)
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_report_bytes),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TalentFitRuntime<R = StaticRegistry> {
    config: TalentFitConfig,
    registry: R,
}

impl TalentFitRuntime<StaticRegistry> {
    pub fn new(config: TalentFitConfig) -> Self {
        Self::with_registry(config, StaticRegistry::builtin())
    }
}

impl<R: CanonicalRegistry> TalentFitRuntime<R> {
    pub fn with_registry(config: TalentFitConfig, registry: R) -> Self {
        Self { config, registry }
    }

    pub fn run(&self, req: &TalentFitRequest) -> TalentFitResponse {
        if req.validate().is_err() {
            return self.refuse(
                reason_codes::TALENTFIT_INPUT_SCHEMA_INVALID,
                "talentfit request failed contract validation",
            );
        }
        if let Err(violation) = validate_registry(&self.registry) {
            warn!(?violation, "canonical registry failed contract validation");
            return self.refuse(
                reason_codes::TALENTFIT_REGISTRY_INVALID,
                "canonical registry failed contract validation",
            );
        }

        match req {
            TalentFitRequest::CompareAll(r) => self.run_compare_all(r),
        }
    }

    fn run_compare_all(&self, req: &CompareAllRequest) -> TalentFitResponse {
        let Some(raw_report) = req.raw_report.as_ref().filter(|raw| !raw.is_null()) else {
            return self.refuse(
                reason_codes::TALENTFIT_REPORT_MISSING,
                "raw report is required",
            );
        };
        let Some(raw_benchmark) = req.benchmark.as_ref().filter(|raw| !raw.is_null()) else {
            return self.refuse(
                reason_codes::TALENTFIT_BENCHMARK_MISSING,
                "benchmark is required",
            );
        };

        if !self.within_budget(raw_report) || !self.within_budget(raw_benchmark) {
            return self.refuse(
                reason_codes::TALENTFIT_INPUT_BUDGET_EXCEEDED,
                "input exceeds max_report_bytes",
            );
        }

        let normalizer = SchemaNormalizer::new(self.config.unknown_value_labels);
        let Some(normalized) = normalizer.normalize(raw_report) else {
            return self.refuse(
                reason_codes::TALENTFIT_REPORT_MISSING,
                "raw report is required",
            );
        };
        let Some(benchmark) = parse_benchmark(raw_benchmark) else {
            return self.refuse(
                reason_codes::TALENTFIT_BENCHMARK_MISSING,
                "benchmark must be an object",
            );
        };

        let items = compare_all(Some(&normalized), Some(&benchmark), &self.registry);
        let summary = summarize(&items);
        debug!(
            items = items.len(),
            global_fit = ?summary.global_fit,
            "compare_all finished"
        );

        match CompareAllOk::v1(
            reason_codes::TALENTFIT_OK_COMPARE_ALL,
            self.registry.len(),
            items,
            summary,
        ) {
            Ok(ok) => TalentFitResponse::CompareAllOk(ok),
            Err(_) => self.refuse(
                reason_codes::TALENTFIT_INTERNAL_PIPELINE_ERROR,
                "failed to construct compare_all output",
            ),
        }
    }

    fn within_budget(&self, value: &Value) -> bool {
        serde_json::to_vec(value)
            .map(|bytes| bytes.len() <= self.config.max_report_bytes)
            .unwrap_or(false)
    }

    fn refuse(&self, reason_code: ReasonCodeId, message: &'static str) -> TalentFitResponse {
        let refuse = TalentFitRefuse::v1(
            TalentFitCapabilityId::CompareAll,
            reason_code,
            message.to_string(),
        )
        .expect("TalentFitRefuse::v1 must construct for static messages");
        TalentFitResponse::Refuse(refuse)
    }
}
