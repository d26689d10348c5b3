//! Attribute reader/writer registry
//!
//! The host document I/O subsystem persists nodes as elements with string
//! attributes. This registry models its reader/writer managers: exactly one
//! reader per attribute name (a reader receives the node and the raw value)
//! and named writers that may append zero or more attributes per node.
//! Unknown attributes are simply not ours and are left untouched.

use std::collections::HashMap;
use std::fmt;

use crate::core::error::Result;
use crate::core::map::{MindMap, NodeId};

/// Reader callback: applies a raw attribute value to a node.
pub type AttributeReader = Box<dyn Fn(&mut MindMap, &NodeId, &str) -> Result<()>>;

/// Writer callback: emits zero or more `(name, value)` attributes for a node.
pub type AttributeWriter = Box<dyn Fn(&MindMap, &NodeId) -> Vec<(String, String)>>;

/// Registry of attribute readers and writers.
#[derive(Default)]
pub struct AttributeRegistry {
    readers: HashMap<String, AttributeReader>,
    writers: Vec<(String, AttributeWriter)>,
}

impl AttributeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reader for `name`.
    ///
    /// At most one reader exists per attribute name; a second registration
    /// keeps the first and returns `false`, which makes repeated controller
    /// installation idempotent.
    pub fn register_reader(
        &mut self,
        name: &str,
        reader: impl Fn(&mut MindMap, &NodeId, &str) -> Result<()> + 'static,
    ) -> bool {
        if self.readers.contains_key(name) {
            return false;
        }
        self.readers.insert(name.to_string(), Box::new(reader));
        true
    }

    /// Register a named writer. Same keep-first semantics as readers.
    pub fn register_writer(
        &mut self,
        name: &str,
        writer: impl Fn(&MindMap, &NodeId) -> Vec<(String, String)> + 'static,
    ) -> bool {
        if self.writers.iter().any(|(existing, _)| existing == name) {
            return false;
        }
        self.writers.push((name.to_string(), Box::new(writer)));
        true
    }

    /// Dispatch one read attribute to its reader.
    ///
    /// Returns whether a reader handled it; attributes owned by other
    /// subsystems fall through as `Ok(false)`.
    pub fn apply(
        &self,
        map: &mut MindMap,
        node: &NodeId,
        name: &str,
        value: &str,
    ) -> Result<bool> {
        match self.readers.get(name) {
            Some(reader) => {
                reader(map, node, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Collect the attributes all writers emit for one node.
    pub fn write_attributes(&self, map: &MindMap, node: &NodeId) -> Vec<(String, String)> {
        self.writers
            .iter()
            .flat_map(|(_, writer)| writer(map, node))
            .collect()
    }
}

impl fmt::Debug for AttributeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeRegistry")
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .field(
                "writers",
                &self.writers.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
