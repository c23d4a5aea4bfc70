//! Errors raised while running actions and lanes.

use crate::action::Platform;
use thiserror::Error;

/// Failure of a lane run.
///
/// Every variant is terminal: the lane stops at the first error and no
/// later action runs.
#[derive(Error, Debug)]
pub enum LaneError {
    #[error("Action '{action}' failed: {source}")]
    ActionFailed {
        action: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Action '{action}' does not support platform '{platform}'")]
    UnsupportedPlatform { action: String, platform: Platform },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LaneError>;

impl LaneError {
    /// Wraps an action-specific error with the name of the failing action.
    pub fn action_failed(
        action: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ActionFailed {
            action: action.into(),
            source: source.into(),
        }
    }
}
