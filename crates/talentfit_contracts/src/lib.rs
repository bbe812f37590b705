#![forbid(unsafe_code)]

pub mod benchmark;
pub mod common;
pub mod comparison;
pub mod registry;
pub mod report;
pub mod runtime;
pub mod text;

pub use common::{ContractViolation, ReasonCodeId, SchemaVersion, Validate};
