//! Node lookup by slug path.
//!
//! Paths are normalized the same way document slugs are, then walked from
//! the root one segment at a time using exact segment equality.

use crate::slug::normalize_slug;
use crate::tree::{DocTree, NodeId};

/// Find the node at a slug path.
///
/// The empty path (or `index`) resolves to the root. A miss at any segment
/// is logged and returns `None`; partial matches are never returned.
#[must_use]
pub fn resolve_path(tree: &DocTree, path: &str) -> Option<NodeId> {
    let mut current = tree.root();
    for segment in normalize_slug(path) {
        let Some(child) = tree.child(current, segment) else {
            tracing::info!(path, segment, "No child found for segment");
            return None;
        };
        current = child;
    }
    Some(current)
}

/// Find the node at a path given as a list of segments.
///
/// Segments are joined with `/` and resolved like [`resolve_path`].
#[must_use]
pub fn resolve_segments(tree: &DocTree, segments: &[&str]) -> Option<NodeId> {
    resolve_path(tree, &segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_tree;
    use crate::document::Document;

    fn sample_tree() -> DocTree {
        build_tree(vec![
            Document::new("index").with_title("Home"),
            Document::new("platforms").with_title("Platforms"),
            Document::new("platforms/python").with_title("Python"),
            Document::new("platforms/python/guides/flask").with_title("Flask"),
            Document::new("platforms/go/index").with_title("Go"),
            Document::new("api").with_title("API"),
        ])
        .unwrap()
        .unwrap()
    }

    #[test]
    fn test_resolve_empty_path_returns_root() {
        let tree = sample_tree();

        assert_eq!(resolve_path(&tree, ""), Some(tree.root()));
        assert_eq!(resolve_path(&tree, "/"), Some(tree.root()));
        assert_eq!(resolve_path(&tree, "index"), Some(tree.root()));
        assert_eq!(resolve_segments(&tree, &[]), Some(tree.root()));
    }

    #[test]
    fn test_resolve_nested_path() {
        let tree = sample_tree();

        let id = resolve_path(&tree, "platforms/python/guides/flask").unwrap();

        assert_eq!(tree.node(id).title(), "Flask");
    }

    #[test]
    fn test_resolve_synthesized_node() {
        let tree = sample_tree();

        let id = resolve_path(&tree, "platforms/python/guides").unwrap();

        assert!(tree.node(id).synthesized);
    }

    #[test]
    fn test_resolve_index_suffix() {
        let tree = sample_tree();

        assert_eq!(
            resolve_path(&tree, "platforms/go/index"),
            resolve_path(&tree, "platforms/go")
        );
        assert!(resolve_path(&tree, "platforms/go").is_some());
    }

    #[test]
    fn test_resolve_segments_matches_string_form() {
        let tree = sample_tree();

        assert_eq!(
            resolve_segments(&tree, &["platforms", "python"]),
            resolve_path(&tree, "platforms/python")
        );
        assert_eq!(
            resolve_segments(&tree, &["platforms", "go", "index"]),
            resolve_path(&tree, "platforms/go")
        );
    }

    #[test]
    fn test_resolve_missing_segment_returns_none() {
        let tree = sample_tree();

        assert_eq!(resolve_path(&tree, "platforms/rust"), None);
        assert_eq!(resolve_path(&tree, "missing/python"), None);
    }

    #[test]
    fn test_resolve_no_partial_progress() {
        let tree = sample_tree();

        assert_eq!(resolve_path(&tree, "platforms/python/unknown/deeper"), None);
    }

    #[test]
    fn test_resolve_is_exact_and_case_sensitive() {
        let tree = sample_tree();

        assert_eq!(resolve_path(&tree, "Platforms"), None);
        assert_eq!(resolve_path(&tree, "platform"), None);
    }

    #[test]
    fn test_resolve_round_trips_every_node() {
        let tree = sample_tree();

        for (id, node) in tree.iter() {
            assert_eq!(resolve_path(&tree, &node.path), Some(id), "path {}", node.path);
        }
    }
}
