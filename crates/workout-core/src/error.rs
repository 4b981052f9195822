use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the workout analyzer.
#[derive(Error, Debug)]
pub enum WorkoutError {
    /// The input document does not exist.
    #[error("File not found: {0}")]
    SourceNotFound(PathBuf),

    /// The input document exists but could not be read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input document is not valid JSON, or its top level is not an object.
    #[error("Invalid JSON in {path}: {reason}")]
    MalformedSource { path: PathBuf, reason: String },

    /// No session was recorded for the requested exercise.
    #[error("No data for {0}")]
    NoExerciseData(String),

    /// No session was recorded on the requested date.
    #[error("No workout found on {0}")]
    NoSessionOnDate(String),

    /// A report was requested before any session was loaded.
    #[error("No workout data available")]
    EmptyCollection,

    /// A result could not be serialised to JSON.
    #[error("Failed to serialize JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Stable machine-readable reason code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutError::SourceNotFound(_) => "source_not_found",
            WorkoutError::FileRead { .. } => "source_unreadable",
            WorkoutError::MalformedSource { .. } => "malformed_source",
            WorkoutError::NoExerciseData(_) | WorkoutError::NoSessionOnDate(_) => "no_data",
            WorkoutError::EmptyCollection => "empty_collection",
            WorkoutError::JsonParse(_) => "serialization",
        }
    }
}

/// Convenience alias used throughout the workout crates.
pub type Result<T> = std::result::Result<T, WorkoutError>;
