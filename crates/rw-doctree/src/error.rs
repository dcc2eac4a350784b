//! Tree building errors.

/// Error returned when the document collection cannot form a tree.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    /// A document's parent and grandparent are both missing.
    ///
    /// Only a single missing level is bridged by a synthesized node.
    #[error("Missing parent and grandparent: {path} (required by {slug})")]
    MissingAncestor {
        /// Normalized path of the missing parent.
        path: String,
        /// Slug of the document that could not be placed.
        slug: String,
    },
}
