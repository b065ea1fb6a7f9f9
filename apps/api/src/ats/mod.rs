// ATS scoring engine: keyword extraction, gap detection, formatting audit,
// recommendations and scoring, composed by the analyzer.
// Everything except `handlers` is synchronous and free of I/O.

pub mod analyzer;
pub mod catalog;
pub mod formatting;
pub mod gaps;
pub mod handlers;
pub mod keywords;
pub mod recommendations;
pub mod scoring;

#[cfg(test)]
pub mod test_support;

pub use analyzer::{Analyzer, ResumeAnalyzer};
pub use catalog::{KeywordCatalog, KeywordGroup};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid resume: {0}")]
    InvalidResume(String),

    #[error("Invalid keyword catalog: {0}")]
    Catalog(String),

    #[error("Resume serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
