// ============================================================
// Layer 3 — Advisor Errors
// ============================================================
// Every failure the recommendation pipeline can report.
//
// Extraction failures share the user-facing message of an
// entity-free description; the detail goes to the log.
//
// All variants except SchemaMismatch are recovered at the CLI
// boundary and rendered as {"success": false, "error": ...}.
// A catalog with the wrong columns aborts the run instead,
// since no partial result is meaningful.

use thiserror::Error;

/// Message shown when the description yields nothing searchable.
pub const VAGUE_DESCRIPTION: &str = "Cannot analyse your status: please be more specific!";

/// Message shown when no catalog row survives matching.
pub const NO_SUPPLEMENTS: &str = "No supplements available that satisfy your requirements";

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Entity extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Catalog load failed: {0}")]
    DataLoadFailure(String),

    #[error("No diagnostic procedures or biological structures found in the description")]
    NoEntitiesOfInterest,

    #[error("No catalog statements mention the extracted entities")]
    NoMatches,

    #[error("Table '{table}' is missing required column '{column}'")]
    SchemaMismatch { table: String, column: String },
}

impl AdvisorError {
    /// Only a schema mismatch is unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AdvisorError::SchemaMismatch { .. })
    }

    /// Text for the `error` field of a failure response.
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::NoEntitiesOfInterest
            | AdvisorError::ExtractionFailure(_) => VAGUE_DESCRIPTION.to_string(),
            AdvisorError::NoMatches              => NO_SUPPLEMENTS.to_string(),
            other                                => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
