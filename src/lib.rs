//! map_explorer - Symbolic node reference resolution for mind maps
//!
//! This library resolves textual references to nodes of a user-authored
//! mind map: absolute IDs (`ID42`), human-assigned aliases (`#inbox`), and
//! relative path expressions (`at(parent/child:2)`) evaluated from a start
//! node. It also persists the two node-level extensions the resolver
//! depends on (alias and global visibility) through a generic attribute
//! read/write registry.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/mapx.rs**: Thin wrapper that calls the library
//!
//! The resolution core is single-threaded and synchronous: the tree is not
//! mutated during a resolution call, evaluations either complete or fail
//! synchronously, and the visited-node sink belongs to exactly one
//! resolution at a time.
//!
//! # Example
//!
//! ```
//! use map_explorer::core::{MapExplorerController, MindMap, Node, NodeAlias};
//!
//! let mut map = MindMap::new(Node::new("1", "Root"));
//! map.add_child(&"1".into(), Node::new("2", "Inbox")).unwrap();
//! NodeAlias::set(map.node_for_id_mut(&"2".into()).unwrap(), "inbox");
//!
//! let controller = MapExplorerController::default();
//! let node = controller.get_node_at(&map, &"1".into(), "#inbox").unwrap();
//! assert_eq!(node, Some("2".into()));
//! ```

pub mod core;
pub mod formats;

// Re-export the public surface at crate level
pub use crate::core::{
    AccessedNodes, AttributeRegistry, CoreTextController, ExplorerError, GlobalNodes,
    GlobalNodesMut, IgnoreAccessedNodes, MapExplorer, MapExplorerController, MindMap, Node,
    NodeAlias, NodeId, RecordingAccessedNodes, Reference, Result, ScriptBindings, ScriptValue,
    Step, TextController,
};

/// Version of the map_explorer library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
