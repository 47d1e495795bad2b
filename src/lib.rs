pub mod aggregate;
pub mod classify;
pub mod cleaning;
pub mod codes;
pub mod core;
pub mod ingest;
pub mod roles;
pub mod tagging;

pub use crate::{
    aggregate::FrequencyTable,
    core::{cleaned_candidates, Pipeline, PipelineReport, SvmineError},
};
