//! `rw resolve` command implementation.

use clap::Args;
use rw_doctree::{BreadcrumbItem, DocTree, Document, NodeId, resolve_path};
use serde::Serialize;

use super::source::{SourceArgs, to_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Slug path to look up (empty for root).
    path: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Resolved node as printed by the command.
#[derive(Debug, Serialize)]
struct ResolvedNode<'a> {
    path: &'a str,
    segment: &'a str,
    title: &'a str,
    synthesized: bool,
    metadata: &'a Document,
    breadcrumbs: Vec<BreadcrumbItem>,
    children: Vec<&'a str>,
}

impl<'a> ResolvedNode<'a> {
    fn new(tree: &'a DocTree, id: NodeId) -> Self {
        let node = tree.node(id);
        Self {
            path: &node.path,
            segment: &node.segment,
            title: node.title(),
            synthesized: node.synthesized,
            metadata: &node.metadata,
            breadcrumbs: tree.breadcrumbs(id),
            children: tree
                .children(id)
                .iter()
                .map(|&child| tree.node(child).path.as_str())
                .collect(),
        }
    }
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be built or nothing exists at the path.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, tree) = self.source.load(None, &output)?;

        let resolved = tree
            .as_ref()
            .and_then(|tree| resolve_path(tree, &self.path).map(|id| ResolvedNode::new(tree, id)))
            .ok_or_else(|| CliError::NotFound(format!("No node found at path: {}", self.path)))?;

        output.data(&to_json(&resolved)?)?;

        Ok(())
    }
}
