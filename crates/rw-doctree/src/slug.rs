//! Slug normalization.
//!
//! `a/b/index` and `a/b` denote the same tree position. Paths are stored
//! without a leading slash; the root path is the empty string.

/// Name of the trailing segment that collapses into its parent.
pub(crate) const INDEX_SEGMENT: &str = "index";

/// Split a slug into its path segments.
///
/// Empty segments (leading, trailing, or doubled `/`) are ignored. A final
/// `index` segment is dropped. An empty result denotes the root.
#[must_use]
pub fn normalize_slug(slug: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = slug.split('/').filter(|s| !s.is_empty()).collect();
    if segments.last() == Some(&INDEX_SEGMENT) {
        segments.pop();
    }
    segments
}

/// Normalize a slug and join it back into a path string.
#[must_use]
pub fn normalize_path(slug: &str) -> String {
    normalize_slug(slug).join("/")
}

/// Build the path of a child node from its parent's path.
#[must_use]
pub fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_owned()
    } else {
        format!("{parent}/{segment}")
    }
}
