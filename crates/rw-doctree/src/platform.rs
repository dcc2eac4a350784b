//! Platform listing derived from the `platforms` subtree.
//!
//! Every direct child of the platforms node becomes a [`Platform`] entry, in
//! sibling order. Guide extraction is not performed here; `guides` is always
//! empty and is left for callers that attach their own guide listing.

use serde::Serialize;

use crate::resolve::resolve_path;
use crate::tree::{DocTree, NodeId};

/// Default path of the subtree holding platform pages.
pub const PLATFORMS_PATH: &str = "platforms";

/// Kind of a platform listing entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A top-level platform.
    Platform,
}

/// Summary of a platform page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Platform {
    /// Platform key (node segment).
    pub key: String,
    /// Platform name (node segment).
    pub name: String,
    /// Entry type, always [`EntryType::Platform`].
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// URL path with leading slash.
    pub url: String,
    /// Display title from the platform document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Guides of the platform.
    pub guides: Vec<PlatformGuide>,
}

/// Guide listed under a platform.
///
/// Filled in by callers that extract guides themselves; this crate never
/// produces one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformGuide {
    /// Guide key (node segment).
    pub key: String,
    /// URL path with leading slash.
    pub url: String,
    /// Display title from the guide document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// List all platforms under [`PLATFORMS_PATH`].
#[must_use]
pub fn extract_platforms(tree: &DocTree) -> Vec<Platform> {
    extract_platforms_at(tree, PLATFORMS_PATH)
}

/// List all platforms under a custom base path.
///
/// Returns an empty list if the base path does not exist.
#[must_use]
pub fn extract_platforms_at(tree: &DocTree, base: &str) -> Vec<Platform> {
    let Some(platforms) = resolve_path(tree, base) else {
        return Vec::new();
    };

    tree.children(platforms)
        .iter()
        .map(|&id| to_platform(tree, id))
        .collect()
}

/// Get a single platform by name.
#[must_use]
pub fn get_platform(tree: &DocTree, name: &str) -> Option<Platform> {
    get_platform_at(tree, PLATFORMS_PATH, name)
}

/// Get a single platform by name under a custom base path.
///
/// `name` must equal the segment of a direct child of the base node; it is
/// not normalized, so `""`, `"index"` or a nested path never match.
#[must_use]
pub fn get_platform_at(tree: &DocTree, base: &str, name: &str) -> Option<Platform> {
    let platforms = resolve_path(tree, base)?;
    tree.child(platforms, name).map(|id| to_platform(tree, id))
}

fn to_platform(tree: &DocTree, id: NodeId) -> Platform {
    let node = tree.node(id);
    Platform {
        key: node.segment.clone(),
        name: node.segment.clone(),
        entry_type: EntryType::Platform,
        url: format!("/{}", node.path),
        title: node.metadata.title.clone(),
        guides: Vec::new(),
    }
}
