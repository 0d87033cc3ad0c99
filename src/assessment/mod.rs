//! Assessment data: the immutable input rendered by the three layers.
//!
//! DESIGN
//! ======
//! The record is supplied once per session, either from a JSON export or
//! the built-in demonstration assessment, and never mutated. Everything
//! the views display that is not stored verbatim (quick stats, bands,
//! category lists) is derived in [`snapshot`].

pub mod demo;
pub mod model;
pub mod snapshot;

use std::path::{Path, PathBuf};

pub use demo::demo_assessment;
pub use model::{
    BiomarkerCorrelation, ComprehensiveData, DetailedInsight, Difficulty, FindingTrend, HealthAssessment,
    HistoricalTrend, ImmediateAction, KeyFinding, LayerProgress, Priority, Recommendation, ResearchReference,
    Severity, TechnicalDetail,
};
pub use snapshot::{
    ConfidenceBand, CorrelationStrength, HealthSnapshot, QuickStat, StatTrend, filter_insights, insight_categories,
    score_description,
};

/// Errors produced while loading an assessment record.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    /// The file could not be read.
    #[error("failed to read assessment {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid assessment record.
    #[error("invalid assessment JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse an assessment from its camelCase JSON form.
///
/// # Errors
///
/// Returns [`AssessmentError::Parse`] if the JSON does not match the record.
pub fn parse_assessment(json: &str) -> Result<HealthAssessment, AssessmentError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an assessment JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_assessment(path: &Path) -> Result<HealthAssessment, AssessmentError> {
    let json = std::fs::read_to_string(path).map_err(|source| AssessmentError::Read { path: path.to_owned(), source })?;
    parse_assessment(&json)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
