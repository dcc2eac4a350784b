//! Document hierarchy tree for RW.
//!
//! This crate provides:
//! - [`build_tree`]: Turn a flat list of [`Document`] records into a [`DocTree`]
//! - [`resolve_path`]: Look up a node by slug path
//! - [`extract_platforms`]: Project the `platforms` subtree into [`Platform`] entries
//!
//! Missing intermediate pages are synthesized as placeholder nodes, one level
//! deep. Siblings are ordered by `sidebar_order`, then title.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rw_doctree::{Document, build_tree, extract_platforms, resolve_path};
//!
//! let documents = vec![
//!     Document::new("index").with_title("Home"),
//!     Document::new("platforms/python").with_title("Python"),
//!     Document::new("platforms/go/index").with_title("Go"),
//! ];
//!
//! let Some(tree) = build_tree(documents)? else {
//!     return Ok(());
//! };
//!
//! // `platforms` has no document of its own and is synthesized
//! let platforms = resolve_path(&tree, "platforms").unwrap();
//! assert!(tree.node(platforms).synthesized);
//!
//! let keys: Vec<_> = extract_platforms(&tree).into_iter().map(|p| p.key).collect();
//! assert_eq!(keys, ["go", "python"]);
//! # Ok(())
//! # }
//! ```

mod builder;
mod document;
mod error;
mod platform;
mod resolve;
mod slug;
mod sort;
mod tree;

pub use builder::{TreeOptions, build_tree, build_tree_with};
pub use document::Document;
pub use error::BuildError;
pub use platform::{
    EntryType, PLATFORMS_PATH, Platform, PlatformGuide, extract_platforms, extract_platforms_at,
    get_platform, get_platform_at,
};
pub use resolve::{resolve_path, resolve_segments};
pub use slug::{join_path, normalize_path, normalize_slug};
pub use sort::{DEFAULT_ORDER, sort_documents};
pub use tree::{BreadcrumbItem, DocTree, NavItem, Node, NodeId};
