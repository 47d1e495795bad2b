pub mod errors;
pub mod models;
pub mod pipeline;

pub use errors::SvmineError;
pub use models::{RejectReason, RejectedLine, SvPair, Utterance};
pub use pipeline::{cleaned_candidates, Pipeline, PipelineReport};
