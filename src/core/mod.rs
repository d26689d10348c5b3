//! Core module for the map explorer
//!
//! This module provides the node reference resolution engine and its
//! collaborators.
//!
//! # Architecture
//!
//! - `map`: Core data model (MindMap, Node, NodeId)
//! - `error`: Error types using thiserror
//! - `extensions`: Per-node typed extension slots
//! - `alias` / `global`: The two persisted node extensions
//! - `text`: Text-extraction collaborator trait
//! - `reference`: Reference classification and path tokenization
//! - `explorer`: The path evaluator with AccessedNodes tracking
//! - `controller`: Public façade and persistence hook registration
//! - `attributes`: Attribute reader/writer registry
//! - `scripting`: Two-tier script property lookup

pub mod alias;
pub mod attributes;
pub mod controller;
pub mod error;
pub mod explorer;
pub mod extensions;
pub mod global;
pub mod map;
pub mod reference;
pub mod scripting;
pub mod text;

// Re-export commonly used types
pub use alias::NodeAlias;
pub use attributes::AttributeRegistry;
pub use controller::{MapExplorerController, ALIAS, GLOBALLY_VISIBLE};
pub use error::{ExplorerError, Result};
pub use explorer::{AccessedNodes, IgnoreAccessedNodes, MapExplorer, RecordingAccessedNodes};
pub use extensions::ExtensionStore;
pub use global::{GlobalNodes, GlobalNodesMut};
pub use map::{MindMap, Node, NodeId};
pub use reference::{parse_path, Reference, Step};
pub use scripting::{ScriptBindings, ScriptValue};
pub use text::{CoreTextController, TextController};
