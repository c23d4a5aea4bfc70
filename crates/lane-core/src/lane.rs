//! Sequential lane runner.

use crate::action::{Action, Platform};
use crate::context::LaneContext;
use crate::error::{LaneError, Result};

/// An ordered list of actions executed on one context.
///
/// Actions run strictly one after another. The first failure stops the
/// lane; actions after it never run.
pub struct Lane {
    name: String,
    platform: Option<Platform>,
    actions: Vec<Box<dyn Action>>,
}

impl Lane {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform: None,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    #[must_use]
    pub fn action(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Runs every action in order and returns the value of the last one.
    pub fn run(&self, ctx: &LaneContext) -> Result<Option<String>> {
        tracing::info!(
            "Running lane '{}' ({} actions) in {}",
            self.name,
            self.actions.len(),
            ctx.working_dir().display()
        );

        let mut last = None;
        for action in &self.actions {
            let name = action.metadata().name;

            if let Some(platform) = self.platform
                && !action.is_supported(platform)
            {
                tracing::error!("Action '{}' does not support {}", name, platform);
                return Err(LaneError::UnsupportedPlatform {
                    action: name.to_string(),
                    platform,
                });
            }

            tracing::debug!("Running action '{}'", name);
            last = action.run(ctx).inspect_err(|e| {
                tracing::error!("Lane '{}' aborted: {}", self.name, e);
            })?;
        }

        tracing::info!("Lane '{}' finished", self.name);
        tracing::debug!("Lane '{}' context: {:?}", self.name, ctx.snapshot());
        Ok(last)
    }
}
