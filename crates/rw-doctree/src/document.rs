//! Document records supplied by the document-fetching layer.
//!
//! A [`Document`] carries the hierarchical slug used for tree placement, the
//! two fields that drive sibling ordering (`title` and `sidebar_order`), and
//! any additional frontmatter fields, which are passed through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single document record.
///
/// Only `slug` is required. Unknown fields are collected into `extra` and
/// serialized back unchanged, so the record round-trips through JSON or YAML
/// without losing frontmatter the tree does not understand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Hierarchical slug (e.g., "platforms/python/guides/flask").
    ///
    /// Required on input; only placeholder metadata leaves it empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,

    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Explicit ordering hint among siblings (lower sorts first).
    #[serde(
        default,
        alias = "order",
        skip_serializing_if = "Option::is_none"
    )]
    pub sidebar_order: Option<i64>,

    /// Additional metadata fields, passed through opaquely.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Document {
    /// Create a document with the given slug and no other fields.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the sidebar order hint.
    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.sidebar_order = Some(order);
        self
    }

    /// Check if the record carries no information at all.
    ///
    /// Placeholder metadata of synthesized nodes is always empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slug.is_empty()
            && self.title.is_none()
            && self.sidebar_order.is_none()
            && self.extra.is_empty()
    }
}
