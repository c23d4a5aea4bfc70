//! Build number extraction.

use crate::error::{ExtractionError, Result};
use crate::manifest::PubspecManifest;
use std::path::Path;

/// Reads the build number from a project's pubspec.yaml.
///
/// Nothing is cached; every call reads the manifest from disk again.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildNumberExtractor;

impl BuildNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Returns the build number of the manifest in `working_dir`.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::FileNotFound` - no pubspec.yaml in `working_dir`
    /// - `ExtractionError::ParseError` - the manifest is not valid YAML
    /// - `ExtractionError::FieldMissing` - no `version`, or no build segment in it
    /// - `ExtractionError::InvalidField` - `version` is an integer or not a scalar
    pub fn extract(&self, working_dir: &Path) -> Result<String> {
        let manifest = PubspecManifest::load(working_dir)?;
        self.extract_from_manifest(&manifest)
    }

    pub fn extract_from_manifest(&self, manifest: &PubspecManifest) -> Result<String> {
        let version = manifest
            .version()?
            .ok_or(ExtractionError::FieldMissing { field: "version" })?;

        let build_number = split_build_number(&version).ok_or(ExtractionError::FieldMissing {
            field: "build number",
        })?;

        tracing::debug!(
            "Build number '{}' from version '{}' of {} in {}",
            build_number,
            version,
            manifest.name().unwrap_or("unnamed package"),
            manifest.path().display()
        );

        Ok(build_number.to_string())
    }
}

/// Returns the part of `version` after the last `+`.
///
/// A version without `+` is returned whole. Trailing empty segments are
/// skipped, so `"1.0.0+"` yields `"1.0.0"`; a version made only of `+`
/// yields `None`.
pub fn split_build_number(version: &str) -> Option<&str> {
    version.split('+').rfind(|segment| !segment.is_empty())
}
