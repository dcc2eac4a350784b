//! Deterministic processing order for document collections.
//!
//! Documents are ordered by:
//! 1. Depth (number of normalized slug segments), shallowest first
//! 2. `sidebar_order`, ascending; a missing hint sorts as `default_order`
//! 3. Title, case-insensitive; a missing title sorts as the empty string
//!
//! The sort is stable, so documents with equal keys keep their input order.

use crate::document::Document;
use crate::slug::normalize_slug;

/// Order hint assumed for documents without `sidebar_order`.
pub const DEFAULT_ORDER: i64 = 99_999;

/// Sort key of a document: depth, order hint, lowercase title.
type SortKey = (usize, i64, String);

/// Sort documents into tree-building order.
pub fn sort_documents(documents: &mut [Document], default_order: i64) {
    documents.sort_by_cached_key(|doc| sort_key(doc, default_order));
}

fn sort_key(doc: &Document, default_order: i64) -> SortKey {
    (
        normalize_slug(&doc.slug).len(),
        doc.sidebar_order.unwrap_or(default_order),
        doc.title.as_deref().unwrap_or_default().to_lowercase(),
    )
}
