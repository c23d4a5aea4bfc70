//! `get_build_number_from_pubspec` lane action.

use crate::extractor::BuildNumberExtractor;
use lane_core::{
    Action, ActionMetadata, LaneContext, OutputEntry, Platform, Result, SharedValue,
};

pub const ACTION_NAME: &str = "get_build_number_from_pubspec";

static METADATA: ActionMetadata = ActionMetadata {
    name: ACTION_NAME,
    description: "Get build number from pubspec.yaml",
    options: &[],
    outputs: &[OutputEntry {
        key: "PUBSPEC_BUILD_NUMBER",
        description: "The build number from pubspec.yaml",
    }],
    return_value: None,
    authors: &["XTREME1738"],
};

/// Publishes the build number of the working directory's pubspec.yaml
/// under [`SharedValue::PubspecBuildNumber`].
///
/// The context is written only after extraction succeeds; a failed run
/// leaves it untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetBuildNumberFromPubspec {
    extractor: BuildNumberExtractor,
}

impl GetBuildNumberFromPubspec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Action for GetBuildNumberFromPubspec {
    fn metadata(&self) -> &ActionMetadata {
        &METADATA
    }

    fn run(&self, ctx: &LaneContext) -> Result<Option<String>> {
        let build_number = self.extractor.extract(ctx.working_dir())?;

        ctx.set(SharedValue::PubspecBuildNumber, build_number.clone());
        tracing::info!("{} = {}", SharedValue::PubspecBuildNumber, build_number);

        Ok(Some(build_number))
    }

    fn is_supported(&self, _platform: Platform) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use lane_core::LaneError;

    fn project(content: Option<&str>) -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        if let Some(content) = content {
            std::fs::write(temp_dir.path().join("pubspec.yaml"), content).unwrap();
        }
        temp_dir
    }

    fn source_of(err: LaneError) -> Box<dyn std::error::Error + Send + Sync> {
        match err {
            LaneError::ActionFailed { action, source } => {
                assert_eq!(action, ACTION_NAME);
                source
            }
            other => panic!("Expected ActionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata() {
        let action = GetBuildNumberFromPubspec::new();
        let meta = action.metadata();
        assert_eq!(meta.name, "get_build_number_from_pubspec");
        assert_eq!(meta.description, "Get build number from pubspec.yaml");
        assert!(meta.options.is_empty());
        assert_eq!(meta.outputs.len(), 1);
        assert_eq!(meta.outputs[0].key, SharedValue::PubspecBuildNumber.as_str());
        assert_eq!(meta.outputs[0].description, "The build number from pubspec.yaml");
        assert!(meta.return_value.is_none());
        assert_eq!(meta.authors, &["XTREME1738"]);
    }

    #[test]
    fn test_supported_on_all_platforms() {
        let action = GetBuildNumberFromPubspec::new();
        for platform in Platform::ALL {
            assert!(action.is_supported(platform));
        }
    }

    #[test]
    fn test_run_publishes_build_number() {
        let dir = project(Some("version: 1.2.3+45\n"));
        let ctx = LaneContext::new(dir.path());

        let result = GetBuildNumberFromPubspec::new().run(&ctx).unwrap();
        assert_eq!(result.as_deref(), Some("45"));
        assert_eq!(
            ctx.get(&SharedValue::PubspecBuildNumber).as_deref(),
            Some("45")
        );
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = project(Some("version: 1.2.3+45\n"));
        let ctx = LaneContext::new(dir.path());
        let action = GetBuildNumberFromPubspec::new();

        let first = action.run(&ctx).unwrap();
        let second = action.run(&ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(ctx.len(), 1);
        assert_eq!(
            ctx.get(&SharedValue::PubspecBuildNumber).as_deref(),
            Some("45")
        );
    }

    #[test]
    fn test_run_missing_file_leaves_context_untouched() {
        let dir = project(None);
        let ctx = LaneContext::new(dir.path());
        ctx.set(SharedValue::Custom("OTHER".into()), "kept");

        let err = GetBuildNumberFromPubspec::new().run(&ctx).unwrap_err();
        let source = source_of(err);
        assert!(matches!(
            source.downcast_ref::<ExtractionError>(),
            Some(ExtractionError::FileNotFound { .. })
        ));
        assert!(!ctx.contains(&SharedValue::PubspecBuildNumber));
        assert_eq!(ctx.snapshot().len(), 1);
    }

    #[test]
    fn test_run_failure_keeps_previous_value() {
        let dir = project(Some("name: app\n"));
        let ctx = LaneContext::new(dir.path());
        ctx.set(SharedValue::PubspecBuildNumber, "10");

        let err = GetBuildNumberFromPubspec::new().run(&ctx).unwrap_err();
        let source = source_of(err);
        assert!(matches!(
            source.downcast_ref::<ExtractionError>(),
            Some(ExtractionError::FieldMissing { field: "version" })
        ));
        assert_eq!(
            ctx.get(&SharedValue::PubspecBuildNumber).as_deref(),
            Some("10")
        );
    }
}
