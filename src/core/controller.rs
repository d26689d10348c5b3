//! The public reference-resolution façade
//!
//! [`MapExplorerController`] dispatches raw reference strings to the right
//! lookup: absolute IDs go straight to the map index, `at(...)` expressions
//! to the [`MapExplorer`] evaluator, `#alias` shorthand to the map-wide
//! alias search. Two entry points exist on purpose: a best-effort one that
//! converts evaluation failures to `None` (for callers rendering clickable
//! references where the target may simply be gone) and a propagating one
//! that surfaces every error kind and records visited nodes.

use crate::core::alias::{self, NodeAlias};
use crate::core::attributes::AttributeRegistry;
use crate::core::error::{ExplorerError, Result};
use crate::core::explorer::{AccessedNodes, IgnoreAccessedNodes, MapExplorer};
use crate::core::global::{GlobalNodes, GlobalNodesMut};
use crate::core::map::{MindMap, NodeId};
use crate::core::text::{CoreTextController, TextController};

/// Persisted attribute carrying a node's alias.
pub const ALIAS: &str = "ALIAS";
/// Persisted attribute marking a node globally visible.
pub const GLOBALLY_VISIBLE: &str = "GLOBALLY_VISIBLE";

const TRUE: &str = "true";

/// Maximum characters of a reference suggestion before truncation.
const SUGGESTION_UNITS: usize = 10;
const SUGGESTION_ELLIPSIS: &str = "…";

/// Reference resolution façade over one text-extraction collaborator.
pub struct MapExplorerController {
    text: Box<dyn TextController>,
}

impl Default for MapExplorerController {
    fn default() -> Self {
        Self::new(Box::new(CoreTextController))
    }
}

impl MapExplorerController {
    /// Create a controller using the given text collaborator.
    pub fn new(text: Box<dyn TextController>) -> Self {
        Self { text }
    }

    /// Build an evaluator for a raw path string.
    pub fn map_explorer<'a>(
        &'a self,
        start: NodeId,
        path: &'a str,
        accessed: &'a mut dyn AccessedNodes,
    ) -> MapExplorer<'a> {
        MapExplorer::new(self.text.as_ref(), start, path, accessed)
    }

    /// Best-effort resolution.
    ///
    /// Recognized references that fail to find a node yield `Ok(None)`:
    /// unknown IDs, and `at(...)` / `#alias` forms whose evaluation fails
    /// structurally, ambiguously, or with a malformed inner path. Only a
    /// reference whose outer syntax is unrecognized is a hard error.
    pub fn get_node_at(
        &self,
        map: &MindMap,
        start: &NodeId,
        reference: &str,
    ) -> Result<Option<NodeId>> {
        let mut ignore = IgnoreAccessedNodes;
        match self.dispatch(map, start, reference, &mut ignore) {
            Ok(node) => Ok(Some(node)),
            Err(ExplorerError::MalformedReference { reference: r }) if r == reference => {
                Err(ExplorerError::malformed(r))
            }
            Err(_) => Ok(None),
        }
    }

    /// Propagating resolution, recording visited nodes.
    ///
    /// Every failure surfaces, including an absolute ID with no matching
    /// node (reported as an unresolved step so callers see one uniform
    /// "attempted and missed" kind).
    pub fn get_node_at_tracked(
        &self,
        map: &MindMap,
        start: &NodeId,
        reference: &str,
        accessed: &mut dyn AccessedNodes,
    ) -> Result<NodeId> {
        self.dispatch(map, start, reference, accessed)
    }

    fn dispatch(
        &self,
        map: &MindMap,
        start: &NodeId,
        reference: &str,
        accessed: &mut dyn AccessedNodes,
    ) -> Result<NodeId> {
        use crate::core::reference::Reference;

        match Reference::parse(reference)? {
            Reference::Id(digits) => {
                let id = NodeId::new(digits);
                map.node_for_id(&id)
                    .map(|node| node.id().clone())
                    .ok_or_else(|| ExplorerError::unresolved(reference, id.as_str()))
            }
            Reference::Path(path) => {
                MapExplorer::new(self.text.as_ref(), start.clone(), &path, accessed).get_node(map)
            }
            Reference::Alias(name) => {
                let target = alias::find_by_alias(map, &name)?
                    .ok_or_else(|| ExplorerError::unresolved(reference, start.as_str()))?;
                accessed.visit(&target);
                Ok(target)
            }
        }
    }

    /// A node's alias, or the empty string if it has none.
    pub fn get_alias(&self, map: &MindMap, id: &NodeId) -> String {
        map.node_for_id(id)
            .map(|node| NodeAlias::get(node).to_string())
            .unwrap_or_default()
    }

    /// The human-facing label offered when inserting a reference to a node:
    /// `#alias` when one exists, otherwise the node's plain text truncated
    /// to ten characters with an ellipsis.
    pub fn get_node_reference_suggestion(&self, map: &MindMap, id: &NodeId) -> String {
        let alias = self.get_alias(map, id);
        if !alias.is_empty() {
            return format!("#{alias}");
        }
        self.text
            .short_plain_text(map, id, SUGGESTION_UNITS, SUGGESTION_ELLIPSIS)
    }

    /// Whether a node is registered as globally visible.
    pub fn is_global(&self, map: &MindMap, id: &NodeId) -> bool {
        GlobalNodes::of(map).is_global(id)
    }

    /// Register the persistence hooks for `ALIAS` and `GLOBALLY_VISIBLE`.
    ///
    /// Serialization is sparse: a node without an alias emits no `ALIAS`
    /// attribute, a node outside the registry no `GLOBALLY_VISIBLE`
    /// attribute, and only the value `"true"` registers a node on read.
    /// Installing twice is a no-op thanks to the registry's keep-first
    /// registration.
    pub fn install(registry: &mut AttributeRegistry) {
        registry.register_reader(ALIAS, |map, node, value| {
            let node = map
                .node_for_id_mut(node)
                .ok_or_else(|| ExplorerError::unknown_node(node.as_str()))?;
            NodeAlias::set(node, value);
            Ok(())
        });
        registry.register_reader(GLOBALLY_VISIBLE, |map, node, value| {
            if value.eq_ignore_ascii_case(TRUE) {
                GlobalNodesMut::writeable_of(map).make_global(node)?;
            }
            Ok(())
        });
        registry.register_writer("explorer", |map, node| {
            let mut attributes = Vec::new();
            if GlobalNodes::of(map).is_global(node) {
                attributes.push((GLOBALLY_VISIBLE.to_string(), TRUE.to_string()));
            }
            if let Some(node) = map.node_for_id(node) {
                let alias = NodeAlias::get(node);
                if !alias.is_empty() {
                    attributes.push((ALIAS.to_string(), alias.to_string()));
                }
            }
            attributes
        });
    }
}
