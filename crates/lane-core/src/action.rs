//! Action trait and the descriptive metadata hosts show for each action.

use crate::context::LaneContext;
use crate::error::Result;
use std::fmt;

/// Target platform of a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
    Mac,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Ios, Self::Android, Self::Mac];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Mac => "mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-configurable option an action accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItem {
    pub key: &'static str,
    pub description: &'static str,
    pub optional: bool,
}

/// Documentation of a value an action publishes into the lane context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Static description of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [ConfigItem],
    pub outputs: &'static [OutputEntry],
    /// Description of the value returned by [`Action::run`], if documented.
    pub return_value: Option<&'static str>,
    pub authors: &'static [&'static str],
}

/// A single step of a lane.
///
/// Implementors read inputs from the filesystem or the context, publish
/// results into the context, and report any failure as a [`crate::LaneError`].
pub trait Action: Send + Sync {
    fn metadata(&self) -> &ActionMetadata;

    /// Runs the action against `ctx`.
    ///
    /// Returns the action's primary value, if it has one.
    fn run(&self, ctx: &LaneContext) -> Result<Option<String>>;

    /// Whether the action can run on `platform`. Supported everywhere unless
    /// overridden.
    fn is_supported(&self, _platform: Platform) -> bool {
        true
    }
}
