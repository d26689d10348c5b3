//! Script binding shortcuts
//!
//! Host scripts address nodes through bare property names. Lookup is an
//! explicit two-tier cascade, not reflection: the fixed name `node` first,
//! then raw node-ID properties (`ID_<digits>`), then user-bound variables,
//! and finally the current node's own fields (`text`, `alias`, `id`).

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::alias::NodeAlias;
use crate::core::error::{ExplorerError, Result};
use crate::core::map::{MindMap, Node, NodeId};

lazy_static! {
    static ref NODE_ID_PROPERTY: Regex = Regex::new(r"^ID_\d+$").unwrap();
}

/// A value visible to scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    /// Plain text
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// A resolved node
    Node(NodeId),
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::Text(value.to_string())
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        ScriptValue::Number(value)
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Boolean(value)
    }
}

/// Property bindings for one script run against one current node.
#[derive(Debug)]
pub struct ScriptBindings<'a> {
    map: &'a MindMap,
    node: NodeId,
    variables: HashMap<String, ScriptValue>,
}

impl<'a> ScriptBindings<'a> {
    /// Create bindings for `node` in `map`.
    pub fn new(map: &'a MindMap, node: NodeId) -> Result<Self> {
        if !map.contains(&node) {
            return Err(ExplorerError::unknown_node(node.as_str()));
        }
        Ok(Self {
            map,
            node,
            variables: HashMap::new(),
        })
    }

    /// Bind a variable, shadowing node fields of the same name.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<ScriptValue>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Shortcut for `map.node(id)`: the node for a raw ID.
    pub fn n(&self, id: &str) -> Option<&Node> {
        self.map.node_for_id(&NodeId::new(id))
    }

    /// Shortcut for `map.node(id).text`.
    pub fn t(&self, id: &str) -> Option<&str> {
        self.n(id).map(|node| node.text.as_str())
    }

    /// Resolve a script property through the lookup cascade.
    pub fn get_property(&self, name: &str) -> Result<ScriptValue> {
        if name == "node" {
            return Ok(ScriptValue::Node(self.node.clone()));
        }
        if NODE_ID_PROPERTY.is_match(name) {
            let id = NodeId::new(name);
            return self
                .map
                .node_for_id(&id)
                .map(|node| ScriptValue::Node(node.id().clone()))
                .ok_or_else(|| ExplorerError::unknown_node(name));
        }
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }
        self.node_field(name)
            .ok_or_else(|| ExplorerError::UnknownProperty {
                name: name.to_string(),
            })
    }

    fn node_field(&self, name: &str) -> Option<ScriptValue> {
        let node = self.map.node_for_id(&self.node)?;
        match name {
            "text" => Some(ScriptValue::Text(node.text.clone())),
            "alias" => Some(ScriptValue::Text(NodeAlias::get(node).to_string())),
            "id" => Some(ScriptValue::Text(node.id().to_string())),
            _ => None,
        }
    }
}
