#![forbid(unsafe_code)]

use serde::Serialize;
use serde_json::Value;

use crate::common::validate_text;
use crate::comparison::{ComparisonDomain, ComparisonItem, ComparisonSummary};
use crate::report::{DiscAxis, ValueCategory};
use crate::{ContractViolation, ReasonCodeId, SchemaVersion, Validate};

pub const TALENTFIT_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TalentFitCapabilityId {
    CompareAll,
}

impl TalentFitCapabilityId {
    pub fn as_str(self) -> &'static str {
        match self {
            TalentFitCapabilityId::CompareAll => "TALENTFIT_COMPARE_ALL",
        }
    }
}

/// Raw inputs exactly as the producers emitted them. Either side may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareAllRequest {
    pub schema_version: SchemaVersion,
    pub raw_report: Option<Value>,
    pub benchmark: Option<Value>,
}

impl CompareAllRequest {
    pub fn v1(
        raw_report: Option<Value>,
        benchmark: Option<Value>,
    ) -> Result<Self, ContractViolation> {
        let req = Self {
            schema_version: TALENTFIT_CONTRACT_VERSION,
            raw_report,
            benchmark,
        };
        req.validate()?;
        Ok(req)
    }
}

impl Validate for CompareAllRequest {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != TALENTFIT_CONTRACT_VERSION {
            return Err(ContractViolation::InvalidValue {
                field: "compare_all_request.schema_version",
                reason: "must match TALENTFIT_CONTRACT_VERSION",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TalentFitRequest {
    CompareAll(CompareAllRequest),
}

impl Validate for TalentFitRequest {
    fn validate(&self) -> Result<(), ContractViolation> {
        match self {
            TalentFitRequest::CompareAll(req) => req.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareAllOk {
    pub schema_version: SchemaVersion,
    pub capability_id: TalentFitCapabilityId,
    pub reason_code: ReasonCodeId,
    /// Size of the registry the attribute items were produced from.
    pub attribute_count: usize,
    pub items: Vec<ComparisonItem>,
    pub summary: ComparisonSummary,
}

impl CompareAllOk {
    pub fn v1(
        reason_code: ReasonCodeId,
        attribute_count: usize,
        items: Vec<ComparisonItem>,
        summary: ComparisonSummary,
    ) -> Result<Self, ContractViolation> {
        let ok = Self {
            schema_version: TALENTFIT_CONTRACT_VERSION,
            capability_id: TalentFitCapabilityId::CompareAll,
            reason_code,
            attribute_count,
            items,
            summary,
        };
        ok.validate()?;
        Ok(ok)
    }
}

impl Validate for CompareAllOk {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != TALENTFIT_CONTRACT_VERSION {
            return Err(ContractViolation::InvalidValue {
                field: "compare_all_ok.schema_version",
                reason: "must match TALENTFIT_CONTRACT_VERSION",
            });
        }
        for item in &self.items {
            item.validate()?;
        }
        let count = |domain: ComparisonDomain| {
            self.items
                .iter()
                .filter(|item| item.domain == domain)
                .count()
        };
        if count(ComparisonDomain::Attribute) != self.attribute_count {
            return Err(ContractViolation::InvalidValue {
                field: "compare_all_ok.items",
                reason: "must contain one attribute item per registry key",
            });
        }
        if count(ComparisonDomain::Disc) != DiscAxis::ALL.len() {
            return Err(ContractViolation::InvalidValue {
                field: "compare_all_ok.items",
                reason: "must contain exactly 4 disc items",
            });
        }
        if count(ComparisonDomain::Value) != ValueCategory::ALL.len() {
            return Err(ContractViolation::InvalidValue {
                field: "compare_all_ok.items",
                reason: "must contain exactly 7 value items",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentFitRefuse {
    pub schema_version: SchemaVersion,
    pub capability_id: TalentFitCapabilityId,
    pub reason_code: ReasonCodeId,
    pub message: String,
}

impl TalentFitRefuse {
    pub fn v1(
        capability_id: TalentFitCapabilityId,
        reason_code: ReasonCodeId,
        message: String,
    ) -> Result<Self, ContractViolation> {
        let refuse = Self {
            schema_version: TALENTFIT_CONTRACT_VERSION,
            capability_id,
            reason_code,
            message,
        };
        refuse.validate()?;
        Ok(refuse)
    }
}

impl Validate for TalentFitRefuse {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != TALENTFIT_CONTRACT_VERSION {
            return Err(ContractViolation::InvalidValue {
                field: "talentfit_refuse.schema_version",
                reason: "must match TALENTFIT_CONTRACT_VERSION",
            });
        }
        validate_text("talentfit_refuse.message", &self.message, 192)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TalentFitResponse {
    CompareAllOk(CompareAllOk),
    Refuse(TalentFitRefuse),
}
