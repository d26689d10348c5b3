//! Globally visible nodes
//!
//! A globally visible node can be addressed from any point in its map
//! regardless of structural distance. Membership lives in a registry owned
//! by the [`MindMap`]; this module provides the only views that read and
//! mutate it, so membership stays a pure function of registry state.

use crate::core::error::{ExplorerError, Result};
use crate::core::map::{MindMap, NodeId};

/// Read-only view of a map's global-node registry.
#[derive(Debug, Clone, Copy)]
pub struct GlobalNodes<'a> {
    map: &'a MindMap,
}

impl<'a> GlobalNodes<'a> {
    /// View the registry of `map`.
    pub fn of(map: &'a MindMap) -> Self {
        Self { map }
    }

    /// Whether `id` is registered as globally visible.
    pub fn is_global(&self, id: &NodeId) -> bool {
        self.map.global_nodes.contains(id)
    }

    /// Iterate over the registered IDs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.map.global_nodes.iter()
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.map.global_nodes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.map.global_nodes.is_empty()
    }
}

/// Writeable view of a map's global-node registry.
#[derive(Debug)]
pub struct GlobalNodesMut<'a> {
    map: &'a mut MindMap,
}

impl<'a> GlobalNodesMut<'a> {
    /// Open the registry of `map` for mutation.
    pub fn writeable_of(map: &'a mut MindMap) -> Self {
        Self { map }
    }

    /// Register a node as globally visible. Fails for unknown IDs.
    pub fn make_global(&mut self, id: &NodeId) -> Result<()> {
        if !self.map.contains(id) {
            return Err(ExplorerError::unknown_node(id.as_str()));
        }
        self.map.global_nodes.insert(id.clone());
        Ok(())
    }

    /// Drop a node from the registry. Returns whether it was registered.
    pub fn reset_global(&mut self, id: &NodeId) -> bool {
        self.map.global_nodes.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::map::Node;

    fn two_node_map() -> MindMap {
        let mut map = MindMap::new(Node::new("root", "Root"));
        map.add_child(&"root".into(), Node::new("a", "Alpha")).unwrap();
        map
    }

    #[test]
    fn test_membership_defaults_false() {
        let map = two_node_map();
        assert!(!GlobalNodes::of(&map).is_global(&"a".into()));
        assert!(GlobalNodes::of(&map).is_empty());
    }

    #[test]
    fn test_make_global_and_reset() {
        let mut map = two_node_map();
        GlobalNodesMut::writeable_of(&mut map)
            .make_global(&"a".into())
            .unwrap();
        assert!(GlobalNodes::of(&map).is_global(&"a".into()));
        assert_eq!(GlobalNodes::of(&map).len(), 1);

        assert!(GlobalNodesMut::writeable_of(&mut map).reset_global(&"a".into()));
        assert!(!GlobalNodes::of(&map).is_global(&"a".into()));
    }

    #[test]
    fn test_unknown_node_cannot_be_made_global() {
        let mut map = two_node_map();
        let err = GlobalNodesMut::writeable_of(&mut map)
            .make_global(&"ghost".into())
            .unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownNode { .. }));
    }

    #[test]
    fn test_removal_clears_registry_entry() {
        let mut map = two_node_map();
        GlobalNodesMut::writeable_of(&mut map)
            .make_global(&"a".into())
            .unwrap();
        map.remove_node(&"a".into()).unwrap();
        assert!(GlobalNodes::of(&map).is_empty());
    }
}
