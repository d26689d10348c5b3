//! Map document format
//!
//! A JSON mirror of the host's node-element persistence: nested node
//! records carrying an attribute bag per node. Only the node structure and
//! core text are interpreted here; every attribute round-trips through the
//! [`AttributeRegistry`], so persisted extensions (alias, global
//! visibility) use the same reader/writer hooks as the host application.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::attributes::AttributeRegistry;
use crate::core::error::Result;
use crate::core::map::{MindMap, Node, NodeId};

/// One persisted map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDocument {
    /// The root node record
    pub root: NodeRecord,
}

/// One persisted node element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node ID, unique within the document
    pub id: String,
    /// Visible core text
    #[serde(default)]
    pub text: String,
    /// String attributes; absent attributes mean defaults
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Child records, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRecord>,
}

/// Build a map from a document, dispatching attributes to the registry.
pub fn read_map(document: &MapDocument, registry: &AttributeRegistry) -> Result<MindMap> {
    let root = &document.root;
    let mut map = MindMap::new(Node::new(root.id.as_str(), root.text.as_str()));
    apply_attributes(&mut map, registry, root)?;
    for child in &root.children {
        read_node(&mut map, registry, &NodeId::new(root.id.as_str()), child)?;
    }
    Ok(map)
}

fn read_node(
    map: &mut MindMap,
    registry: &AttributeRegistry,
    parent: &NodeId,
    record: &NodeRecord,
) -> Result<()> {
    map.add_child(parent, Node::new(record.id.as_str(), record.text.as_str()))?;
    apply_attributes(map, registry, record)?;
    let id = NodeId::new(record.id.as_str());
    for child in &record.children {
        read_node(map, registry, &id, child)?;
    }
    Ok(())
}

fn apply_attributes(
    map: &mut MindMap,
    registry: &AttributeRegistry,
    record: &NodeRecord,
) -> Result<()> {
    let id = NodeId::new(record.id.as_str());
    for (name, value) in &record.attributes {
        registry.apply(map, &id, name, value)?;
    }
    Ok(())
}

/// Serialize a map back into a document, collecting each node's attributes
/// from the registry's writers.
pub fn write_map(map: &MindMap, registry: &AttributeRegistry) -> MapDocument {
    MapDocument {
        root: write_node(map, registry, map.root_id()),
    }
}

fn write_node(map: &MindMap, registry: &AttributeRegistry, id: &NodeId) -> NodeRecord {
    let node = map.node_for_id(id);
    NodeRecord {
        id: id.to_string(),
        text: node.map(|node| node.text.clone()).unwrap_or_default(),
        attributes: registry.write_attributes(map, id).into_iter().collect(),
        children: node
            .map(|node| {
                node.child_ids()
                    .iter()
                    .map(|child| write_node(map, registry, child))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Parse a JSON document and build the map through the registry.
pub fn from_json(json: &str, registry: &AttributeRegistry) -> Result<MindMap> {
    let document: MapDocument = serde_json::from_str(json)?;
    read_map(&document, registry)
}

/// Serialize a map to pretty JSON through the registry.
pub fn to_json(map: &MindMap, registry: &AttributeRegistry) -> Result<String> {
    Ok(serde_json::to_string_pretty(&write_map(map, registry))?)
}
