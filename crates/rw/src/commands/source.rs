//! Arguments shared by every command: input collection and configuration.

use std::path::PathBuf;

use clap::Args;
use rw_config::{CliSettings, Config};
use rw_doctree::{DocTree, TreeOptions, build_tree_with};

use crate::error::CliError;
use crate::input::read_documents;
use crate::output::Output;

/// Document source and tree building arguments.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Document collection file (.json, .yaml or .yml).
    #[arg(short, long, env = "RW_INPUT")]
    input: PathBuf,

    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Title of the root node when no root document exists (overrides config).
    #[arg(long)]
    root_title: Option<String>,

    /// Order hint for documents without one (overrides config).
    #[arg(long)]
    default_order: Option<i64>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Load configuration, read the input collection and build the tree.
    ///
    /// Returns `None` for the tree when the collection is empty.
    pub(crate) fn load(
        &self,
        platforms_path: Option<String>,
        output: &Output,
    ) -> Result<(Config, Option<DocTree>), CliError> {
        let cli_settings = CliSettings {
            root_title: self.root_title.clone(),
            default_order: self.default_order,
            platforms_path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if self.verbose
            && let Some(path) = &config.config_path
        {
            output.info(&format!("Using config: {}", path.display()));
        }

        let documents = read_documents(&self.input)?;
        let options = TreeOptions {
            root_title: config.tree.root_title.clone(),
            default_order: config.tree.default_order,
        };
        let tree = build_tree_with(documents, &options)?;

        match &tree {
            Some(tree) if self.verbose => output.success(&format!(
                "Built tree with {} nodes ({} synthesized)",
                tree.len(),
                tree.synthesized_count()
            )),
            Some(_) => {}
            None => output.warning("Input contains no documents"),
        }

        Ok((config, tree))
    }
}

/// Serialize a command result as pretty JSON.
pub(crate) fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
