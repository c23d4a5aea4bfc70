//! Build number extraction from pubspec.yaml.
//!
//! [`BuildNumberExtractor`] reads the `version` field of a project's
//! `pubspec.yaml` and returns the segment after the last `+`.
//! [`GetBuildNumberFromPubspec`] wraps it as a lane action that publishes
//! the value under `PUBSPEC_BUILD_NUMBER`.

pub mod action;
pub mod error;
pub mod extractor;
pub mod manifest;

pub use action::GetBuildNumberFromPubspec;
pub use error::{ExtractionError, Result};
pub use extractor::{BuildNumberExtractor, split_build_number};
pub use manifest::{MANIFEST_FILENAME, PubspecManifest};
