//! Shared run context passed between actions.

use crate::error::Result;
use dashmap::DashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Symbolic keys under which actions publish values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SharedValue {
    /// Build number read from `pubspec.yaml`.
    PubspecBuildNumber,
    /// Key published by an action outside this workspace.
    Custom(String),
}

impl SharedValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PubspecBuildNumber => "PUBSPEC_BUILD_NUMBER",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for SharedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value store scoped to a single lane run.
///
/// Each run builds its own context; nothing is kept between runs. Writes
/// are single upserts on the underlying map, so a value is never observed
/// half-written even when a host drives steps from several threads.
#[derive(Debug)]
pub struct LaneContext {
    working_dir: PathBuf,
    values: DashMap<SharedValue, String>,
}

impl LaneContext {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            values: DashMap::new(),
        }
    }

    /// Creates a context rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Stores `value` under `key`, returning the previous value if any.
    pub fn set(&self, key: SharedValue, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        tracing::debug!("lane context: {} = {:?}", key, value);
        self.values.insert(key, value)
    }

    pub fn get(&self, key: &SharedValue) -> Option<String> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, key: &SharedValue) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns all entries sorted by key.
    pub fn snapshot(&self) -> Vec<(SharedValue, String)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
