//! Node aliases
//!
//! An alias is a short, user-assigned name labelling a node for reference
//! purposes (`#name`). Uniqueness within a map is advisory: duplicates can
//! exist, and lookup reports them as an ambiguous match instead of silently
//! picking one.

use crate::core::error::{ExplorerError, Result};
use crate::core::map::{MindMap, Node, NodeId};

/// Alias extension attached to a node. Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAlias {
    value: String,
}

impl NodeAlias {
    /// The alias string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set or clear a node's alias. An empty value removes the extension,
    /// which is equivalent to having none.
    pub fn set(node: &mut Node, value: &str) {
        if value.is_empty() {
            node.extensions_mut().remove::<NodeAlias>();
        } else {
            node.extensions_mut().put(NodeAlias {
                value: value.to_string(),
            });
        }
    }

    /// A node's alias, or the empty string if it has none.
    pub fn get(node: &Node) -> &str {
        node.extensions()
            .get::<NodeAlias>()
            .map(|alias| alias.value.as_str())
            .unwrap_or("")
    }

    /// Remove a node's alias.
    pub fn remove(node: &mut Node) {
        node.extensions_mut().remove::<NodeAlias>();
    }
}

/// Find the single node carrying `alias`, searching the whole map.
///
/// Returns `Ok(None)` when no node carries the alias and an
/// [`ExplorerError::AmbiguousMatch`] when more than one does.
pub fn find_by_alias(map: &MindMap, alias: &str) -> Result<Option<NodeId>> {
    let mut found: Option<NodeId> = None;
    let mut candidates = 0;
    for node in map.iter() {
        if NodeAlias::get(node) == alias {
            candidates += 1;
            if found.is_none() {
                found = Some(node.id().clone());
            }
        }
    }
    if candidates > 1 {
        return Err(ExplorerError::ambiguous(format!("#{alias}"), candidates));
    }
    Ok(found)
}
