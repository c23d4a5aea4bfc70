//! Core abstractions for pubspec-lane.
//!
//! An [`Action`] is a single build-automation step. Actions run in order
//! inside a [`Lane`] and exchange values through a [`LaneContext`], which
//! is created fresh for every run.

pub mod action;
pub mod context;
pub mod error;
pub mod lane;

pub use action::{Action, ActionMetadata, ConfigItem, OutputEntry, Platform};
pub use context::{LaneContext, SharedValue};
pub use error::{LaneError, Result};
pub use lane::Lane;
