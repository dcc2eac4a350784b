//! `rw tree` command implementation.

use clap::Args;

use super::source::{SourceArgs, to_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// Prints the nested tree, or `null` for an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the tree cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, tree) = self.source.load(None, &output)?;

        let nav = tree.as_ref().map(|tree| tree.nav_item(tree.root()));
        output.data(&to_json(&nav)?)?;

        Ok(())
    }
}
