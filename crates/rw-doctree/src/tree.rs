//! Document tree with index-based parent/children links.
//!
//! # Architecture
//!
//! Nodes are stored in a flat `Vec<Node>` owned by [`DocTree`]. Children and
//! parents are tracked by [`NodeId`] indices:
//! - each parent owns the ordered list of its children's ids
//! - the parent link is a plain index used only for upward traversal
//! - O(d) breadcrumb building where d is the node depth
//!
//! The tree is built once by [`build_tree`](crate::build_tree) and is
//! read-only afterwards.

use serde::Serialize;

use crate::document::Document;

/// Handle of a node inside a [`DocTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order (the root is 0).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One position in the document hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Normalized path without leading slash ("" for root).
    pub path: String,
    /// Last path segment ("" for root).
    pub segment: String,
    /// Document placed at this path, or an empty placeholder.
    pub metadata: Document,
    /// True when no document exists at this path.
    pub synthesized: bool,
}

impl Node {
    /// Display title: the document title, falling back to the segment.
    #[must_use]
    pub fn title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or(&self.segment)
    }
}

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
    /// Set when the node was inferred rather than authored.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub synthesized: bool,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

/// Immutable document tree.
///
/// Always contains a root node at [`DocTree::root`].
#[derive(Debug, PartialEq, Eq)]
pub struct DocTree {
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
}

impl DocTree {
    /// Root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get node data.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Get the parent of a node (`None` for root).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// Get the ordered children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }

    /// Find a direct child by its segment.
    #[must_use]
    pub fn child(&self, id: NodeId, segment: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].segment == segment)
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// Iterate over the ancestors of a node, nearest first, root last.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&current| self.parent(current))
    }

    /// Number of synthesized placeholder nodes.
    #[must_use]
    pub fn synthesized_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.synthesized).count()
    }

    /// Build breadcrumbs for a node.
    ///
    /// Returns breadcrumbs starting with the root's title for non-root nodes,
    /// followed by the remaining ancestors. The node itself is not included.
    /// The root node has no breadcrumbs.
    #[must_use]
    pub fn breadcrumbs(&self, id: NodeId) -> Vec<BreadcrumbItem> {
        if id == self.root() {
            return Vec::new();
        }

        let mut ancestors: Vec<NodeId> = self
            .ancestors(id)
            .filter(|&ancestor| ancestor != self.root())
            .collect();
        ancestors.reverse();

        let mut breadcrumbs = vec![BreadcrumbItem {
            title: self.node(self.root()).title().to_owned(),
            path: String::new(),
        }];
        breadcrumbs.extend(ancestors.into_iter().map(|ancestor| {
            let node = self.node(ancestor);
            BreadcrumbItem {
                title: node.title().to_owned(),
                path: node.path.clone(),
            }
        }));

        breadcrumbs
    }

    /// Build a nested [`NavItem`] for a node and its whole subtree.
    ///
    /// Uses an explicit work list, so stack usage does not grow with depth.
    #[must_use]
    pub fn nav_item(&self, id: NodeId) -> NavItem {
        // Pre-order: every node comes before its descendants.
        let mut order = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            order.push(current);
            pending.extend(self.children(current).iter().rev());
        }

        // Reverse pre-order finishes all children before their parent.
        let mut built: Vec<Option<NavItem>> = vec![None; self.nodes.len()];
        for &current in order.iter().skip(1).rev() {
            let item = self.nav_entry(current, &mut built);
            built[current.0] = Some(item);
        }
        self.nav_entry(id, &mut built)
    }

    fn nav_entry(&self, id: NodeId, built: &mut [Option<NavItem>]) -> NavItem {
        let node = self.node(id);
        NavItem {
            title: node.title().to_owned(),
            path: node.path.clone(),
            synthesized: node.synthesized,
            children: self
                .children(id)
                .iter()
                .filter_map(|&child| built[child.0].take())
                .collect(),
        }
    }
}

/// Arena under construction.
///
/// Only the tree builder appends nodes; once [`TreeArena::finish`] is called
/// the resulting [`DocTree`] cannot be mutated.
pub(crate) struct TreeArena {
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
}

impl TreeArena {
    /// Create an arena holding only the root node.
    pub(crate) fn with_root(metadata: Document) -> Self {
        Self {
            nodes: vec![Node {
                path: String::new(),
                segment: String::new(),
                metadata,
                synthesized: false,
            }],
            children: vec![Vec::new()],
            parents: vec![None],
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node as the last child of `parent`.
    ///
    /// # Returns
    ///
    /// Id of the added node.
    pub(crate) fn push_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.children.push(Vec::new());
        self.parents.push(Some(parent));
        self.children[parent.0].push(id);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Replace the metadata of an existing node.
    pub(crate) fn set_metadata(&mut self, id: NodeId, metadata: Document) {
        self.nodes[id.0].metadata = metadata;
    }

    pub(crate) fn finish(self) -> DocTree {
        DocTree {
            nodes: self.nodes,
            children: self.children,
            parents: self.parents,
        }
    }
}
