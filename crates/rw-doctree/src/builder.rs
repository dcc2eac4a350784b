//! Tree building from a flat document collection.
//!
//! Documents are sorted (see [`sort_documents`]) and attached one by one:
//! - a slug normalizing to the root replaces the root placeholder metadata
//! - any other document is attached under the node at its parent path
//! - a missing parent is synthesized under the grandparent as an empty
//!   placeholder; a missing grandparent aborts the build
//! - a document whose normalized path still contains an `index` segment is
//!   skipped, since path resolution strips that segment and could never
//!   reach the node
//!
//! The path-to-node index lives only for the duration of one build.

use std::collections::HashMap;

use crate::document::Document;
use crate::error::BuildError;
use crate::slug::{INDEX_SEGMENT, normalize_slug};
use crate::sort::{DEFAULT_ORDER, sort_documents};
use crate::tree::{DocTree, Node, NodeId, TreeArena};

/// Options controlling tree construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeOptions {
    /// Title of the root placeholder used when no root document exists.
    pub root_title: String,
    /// Order hint assumed for documents without `sidebar_order`.
    pub default_order: i64,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root_title: "Home".to_owned(),
            default_order: DEFAULT_ORDER,
        }
    }
}

/// Build a document tree with default options.
///
/// Returns `Ok(None)` for an empty collection.
///
/// # Errors
///
/// Returns [`BuildError::MissingAncestor`] if a document has neither a parent
/// nor a grandparent in the tree.
pub fn build_tree(
    documents: impl IntoIterator<Item = Document>,
) -> Result<Option<DocTree>, BuildError> {
    build_tree_with(documents, &TreeOptions::default())
}

/// Build a document tree with explicit options.
///
/// Returns `Ok(None)` for an empty collection.
///
/// # Errors
///
/// Returns [`BuildError::MissingAncestor`] if a document has neither a parent
/// nor a grandparent in the tree.
pub fn build_tree_with(
    documents: impl IntoIterator<Item = Document>,
    options: &TreeOptions,
) -> Result<Option<DocTree>, BuildError> {
    let mut documents: Vec<Document> = documents.into_iter().collect();
    if documents.is_empty() {
        return Ok(None);
    }

    sort_documents(&mut documents, options.default_order);

    let document_count = documents.len();
    let mut builder = TreeBuilder::new(&options.root_title);
    for doc in documents {
        builder.insert(doc)?;
    }
    let tree = builder.finish();

    tracing::debug!(
        documents = document_count,
        nodes = tree.len(),
        synthesized = tree.synthesized_count(),
        "Built document tree"
    );

    Ok(Some(tree))
}

/// Incremental tree construction state for a single build.
struct TreeBuilder {
    arena: TreeArena,
    path_index: HashMap<String, NodeId>,
    root_documented: bool,
}

impl TreeBuilder {
    fn new(root_title: &str) -> Self {
        let arena = TreeArena::with_root(Document {
            title: Some(root_title.to_owned()),
            ..Default::default()
        });
        let mut path_index = HashMap::new();
        path_index.insert(String::new(), arena.root());

        Self {
            arena,
            path_index,
            root_documented: false,
        }
    }

    /// Attach a document at its normalized path.
    fn insert(&mut self, doc: Document) -> Result<(), BuildError> {
        let segments = normalize_slug(&doc.slug);

        let Some((segment, parent_segments)) = segments.split_last() else {
            if self.root_documented {
                tracing::warn!(slug = %doc.slug, "Duplicate root document skipped");
            } else {
                self.arena.set_metadata(self.arena.root(), doc);
                self.root_documented = true;
            }
            return Ok(());
        };

        let path = segments.join("/");
        if segments.contains(&INDEX_SEGMENT) {
            tracing::warn!(
                slug = %doc.slug,
                path = %path,
                "Document with unreachable index segment skipped"
            );
            return Ok(());
        }
        if self.path_index.contains_key(&path) {
            tracing::warn!(slug = %doc.slug, path = %path, "Duplicate document path skipped");
            return Ok(());
        }

        let segment = (*segment).to_owned();
        let parent = match self.path_index.get(&parent_segments.join("/")) {
            Some(&parent) => parent,
            None => self.synthesize(parent_segments, &doc.slug)?,
        };

        let id = self.arena.push_child(
            parent,
            Node {
                path: path.clone(),
                segment,
                metadata: doc,
                synthesized: false,
            },
        );
        self.path_index.insert(path, id);

        Ok(())
    }

    /// Create a placeholder for a missing parent under its grandparent.
    fn synthesize(&mut self, parent_segments: &[&str], slug: &str) -> Result<NodeId, BuildError> {
        let Some((segment, grandparent_segments)) = parent_segments.split_last() else {
            return Ok(self.arena.root());
        };
        let path = parent_segments.join("/");

        let Some(&grandparent) = self.path_index.get(&grandparent_segments.join("/")) else {
            return Err(BuildError::MissingAncestor {
                path,
                slug: slug.to_owned(),
            });
        };

        tracing::debug!(path = %path, slug, "Synthesized missing parent node");

        let id = self.arena.push_child(
            grandparent,
            Node {
                path: path.clone(),
                segment: (*segment).to_owned(),
                metadata: Document::default(),
                synthesized: true,
            },
        );
        self.path_index.insert(path, id);

        Ok(id)
    }

    fn finish(self) -> DocTree {
        debug_assert!(
            self.path_index
                .iter()
                .all(|(path, &id)| self.arena.node(id).path == *path)
        );
        self.arena.finish()
    }
}
