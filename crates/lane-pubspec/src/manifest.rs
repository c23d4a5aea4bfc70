//! pubspec.yaml loading with typed access to top-level fields.

use crate::error::{ExtractionError, Result};
use std::path::{Path, PathBuf};
use yaml_rust2::{Yaml, YamlLoader};

pub const MANIFEST_FILENAME: &str = "pubspec.yaml";

/// A parsed pubspec.yaml.
///
/// Only the first YAML document of the file is kept. The manifest is
/// read-only; nothing here writes back to disk.
#[derive(Debug, Clone)]
pub struct PubspecManifest {
    path: PathBuf,
    doc: Yaml,
}

impl PubspecManifest {
    /// Loads `pubspec.yaml` from `dir`.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::FileNotFound` - no manifest in `dir`
    /// - `ExtractionError::Io` - the file exists but cannot be read
    /// - `ExtractionError::ParseError` - the content is not valid YAML
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        tracing::debug!("Loading manifest: {}", path.display());

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Manifest not found: {}", path.display());
                return Err(ExtractionError::FileNotFound { path });
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Err(ExtractionError::Io { path, source: e });
            }
        };

        Self::parse(&content, path)
    }

    /// Parses manifest content that was read from `path`.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut docs =
            YamlLoader::load_from_str(content).map_err(|e| ExtractionError::ParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        // An empty file has no documents; treat it like an empty mapping.
        let doc = if docs.is_empty() {
            Yaml::Null
        } else {
            docs.swap_remove(0)
        };

        tracing::debug!("Parsed manifest: {}", path.display());
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.doc["name"].as_str()
    }

    /// Returns the `version` field as text.
    ///
    /// Absent, `null`, `false` and empty values are reported as `None`.
    /// Floats keep their source text. Integers are rejected: the parser has
    /// already normalized them, so `007` or `0x1F` can't be given back as written.
    pub fn version(&self) -> Result<Option<String>> {
        let found = match &self.doc["version"] {
            Yaml::String(s) if s.is_empty() => return Ok(None),
            Yaml::String(s) | Yaml::Real(s) => return Ok(Some(s.clone())),
            Yaml::Null | Yaml::BadValue | Yaml::Boolean(false) => return Ok(None),
            Yaml::Integer(_) => "an integer",
            Yaml::Boolean(true) => "a boolean",
            Yaml::Array(_) => "a sequence",
            Yaml::Hash(_) => "a mapping",
            Yaml::Alias(_) => "an alias",
        };
        Err(ExtractionError::InvalidField {
            field: "version",
            found,
        })
    }
}
