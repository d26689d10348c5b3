//! Core data model: the mind map and its nodes
//!
//! A `MindMap` owns all of its nodes in an ID-keyed index, so any node is an
//! O(1) lookup away. Nodes link to each other by ID: one optional parent and
//! an ordered child list. The map also owns the registry of globally visible
//! node IDs; that set is only mutated through [`crate::core::global`].

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{ExplorerError, Result};
use crate::core::extensions::ExtensionStore;

/// Stable, map-scoped node identifier.
///
/// Assigned at node creation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single node of a mind map.
///
/// The node knows its own ID, its visible core text, and its structural
/// links (parent and ordered children, both by ID). Optional typed
/// extensions hang off the [`ExtensionStore`].
#[derive(Debug)]
pub struct Node {
    /// Unique identifier within the owning map
    id: NodeId,
    /// Visible core text
    pub text: String,
    /// ID of the parent node; `None` for the root
    pub(crate) parent_id: Option<NodeId>,
    /// IDs of child nodes, in display order
    pub(crate) child_ids: Vec<NodeId>,
    /// Optional typed extensions (alias, ...)
    pub(crate) extensions: ExtensionStore,
}

impl Node {
    /// Create a detached node with the given ID and core text.
    pub fn new(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            parent_id: None,
            child_ids: Vec::new(),
            extensions: ExtensionStore::new(),
        }
    }

    /// The node's ID.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The parent's ID, or `None` for the root.
    pub fn parent_id(&self) -> Option<&NodeId> {
        self.parent_id.as_ref()
    }

    /// Child IDs in display order.
    pub fn child_ids(&self) -> &[NodeId] {
        &self.child_ids
    }

    /// Access the node's extension slots.
    pub fn extensions(&self) -> &ExtensionStore {
        &self.extensions
    }

    /// Mutable access to the node's extension slots.
    pub fn extensions_mut(&mut self) -> &mut ExtensionStore {
        &mut self.extensions
    }
}

/// A mind map: the node arena plus its indices.
///
/// Maintains the ID index and the global-visibility registry incrementally
/// as nodes are added and removed.
#[derive(Debug)]
pub struct MindMap {
    /// All nodes indexed by ID
    nodes: HashMap<NodeId, Node>,
    /// ID of the root node
    root_id: NodeId,
    /// IDs of globally visible nodes
    pub(crate) global_nodes: HashSet<NodeId>,
}

impl MindMap {
    /// Create a map owning the given root node.
    pub fn new(root: Node) -> Self {
        let root_id = root.id.clone();
        let mut nodes = HashMap::new();
        nodes.insert(root_id.clone(), root);
        Self {
            nodes,
            root_id,
            global_nodes: HashSet::new(),
        }
    }

    /// The root node's ID.
    pub fn root_id(&self) -> &NodeId {
        &self.root_id
    }

    /// Look up a node by ID. Missing IDs are `None`, never an error.
    pub fn node_for_id(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable lookup by ID.
    pub fn node_for_id_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether a node with this ID exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the map.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the map has no nodes. Never true: a map always has a root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Attach `node` as the last child of `parent`.
    ///
    /// Fails when the parent is unknown or the node's ID is already taken.
    pub fn add_child(&mut self, parent: &NodeId, node: Node) -> Result<()> {
        self.insert_child(parent, None, node)
    }

    /// Attach `node` as a child of `parent` at `index` (or append).
    pub fn insert_child(
        &mut self,
        parent: &NodeId,
        index: Option<usize>,
        mut node: Node,
    ) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(ExplorerError::DuplicateNodeId {
                id: node.id.to_string(),
            });
        }
        let parent_node = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| ExplorerError::unknown_node(parent.as_str()))?;

        let id = node.id.clone();
        node.parent_id = Some(parent.clone());
        match index {
            Some(i) if i <= parent_node.child_ids.len() => {
                parent_node.child_ids.insert(i, id.clone())
            }
            _ => parent_node.child_ids.push(id.clone()),
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Remove a node and its whole subtree, detaching it from its parent.
    ///
    /// Removed nodes are also dropped from the global-visibility registry.
    /// The root cannot be removed.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<()> {
        if *id == self.root_id {
            return Err(ExplorerError::unknown_node(id.as_str()));
        }
        let parent_id = self
            .nodes
            .get(id)
            .ok_or_else(|| ExplorerError::unknown_node(id.as_str()))?
            .parent_id
            .clone();

        if let Some(parent_id) = parent_id {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.child_ids.retain(|child| child != id);
            }
        }

        // Drop the subtree from both indices, iteratively.
        let mut pending = vec![id.clone()];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                self.global_nodes.remove(&next);
                pending.extend(node.child_ids);
            }
        }
        Ok(())
    }

    /// Position of `id` within its parent's child list.
    pub(crate) fn index_in_parent(&self, id: &NodeId) -> Option<(NodeId, usize)> {
        let parent_id = self.nodes.get(id)?.parent_id.clone()?;
        let parent = self.nodes.get(&parent_id)?;
        let index = parent.child_ids.iter().position(|child| child == id)?;
        Some((parent_id, index))
    }
}
