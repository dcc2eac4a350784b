//! `rw platforms` and `rw platform` command implementations.

use clap::Args;
use rw_doctree::{extract_platforms_at, get_platform_at};

use super::source::{SourceArgs, to_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the platforms command.
#[derive(Args)]
pub(crate) struct PlatformsArgs {
    /// Path of the platforms subtree (overrides config).
    #[arg(long)]
    platforms_path: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl PlatformsArgs {
    /// Execute the platforms command.
    ///
    /// Prints an empty list when there is no platforms subtree.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the tree cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, tree) = self.source.load(self.platforms_path, &output)?;

        let platforms = tree
            .as_ref()
            .map(|tree| extract_platforms_at(tree, &config.platforms.path))
            .unwrap_or_default();
        output.data(&to_json(&platforms)?)?;

        Ok(())
    }
}

/// Arguments for the platform command.
#[derive(Args)]
pub(crate) struct PlatformArgs {
    /// Platform name (e.g., "python").
    name: String,

    /// Path of the platforms subtree (overrides config).
    #[arg(long)]
    platforms_path: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl PlatformArgs {
    /// Execute the platform command.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be built or the platform does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, tree) = self.source.load(self.platforms_path, &output)?;

        let platform = tree
            .as_ref()
            .and_then(|tree| get_platform_at(tree, &config.platforms.path, &self.name))
            .ok_or_else(|| CliError::NotFound(format!("Platform not found: {}", self.name)))?;
        output.data(&to_json(&platform)?)?;

        Ok(())
    }
}
