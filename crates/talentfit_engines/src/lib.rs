#![forbid(unsafe_code)]

pub mod aggregate;
pub mod attributes;
pub mod benchmark;
pub mod disc;
pub mod labels;
pub mod normalizer;
pub mod runtime;
pub mod scale;
pub mod sources;
pub mod summary;
pub mod values;

pub use aggregate::compare_all;
pub use normalizer::{normalize, SchemaNormalizer, UnknownValueLabelPolicy};
pub use runtime::{TalentFitConfig, TalentFitRuntime};
pub use summary::{domain_fit, gap_list, global_fit, summarize};
