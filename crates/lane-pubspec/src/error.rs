//! Errors raised while extracting the build number.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("pubspec.yaml file not found in {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Build number not found in pubspec.yaml (missing {field})")]
    FieldMissing { field: &'static str },

    #[error("Failed to parse {}: {message}", .path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid '{field}' in pubspec.yaml: expected a string, found {found}")]
    InvalidField {
        field: &'static str,
        found: &'static str,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

impl From<ExtractionError> for lane_core::LaneError {
    fn from(err: ExtractionError) -> Self {
        Self::action_failed(crate::action::ACTION_NAME, err)
    }
}
