//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::store::TagWithCount;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A tag with its note count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    pub count: u32,
}

impl From<&TagWithCount> for TagListing {
    fn from(tag: &TagWithCount) -> Self {
        Self {
            name: tag.name().to_string(),
            count: tag.count(),
        }
    }
}

