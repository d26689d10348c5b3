//! Path expression evaluation
//!
//! [`MapExplorer`] walks a map from a start node, applying the parsed steps
//! of a path expression left to right. Every node a step lands on is
//! reported to an [`AccessedNodes`] sink in visitation order, so callers can
//! highlight the trail or guard against structural cycles. Evaluation is
//! all-or-nothing: the first failing step aborts with its error and no
//! partial result is ever returned.

use crate::core::alias;
use crate::core::error::{ExplorerError, Result};
use crate::core::map::{MindMap, NodeId};
use crate::core::reference::{parse_path, Step};
use crate::core::text::TextController;

/// Sink receiving every node the evaluator visits, in order.
///
/// The sink lives for one resolution call and must not be shared across
/// concurrent resolutions.
pub trait AccessedNodes {
    /// Called once per visited node, including intermediate and final ones.
    fn visit(&mut self, id: &NodeId);
}

/// No-op sink for callers that only want the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreAccessedNodes;

impl AccessedNodes for IgnoreAccessedNodes {
    fn visit(&mut self, _id: &NodeId) {}
}

/// Sink recording the visitation trail.
#[derive(Debug, Default)]
pub struct RecordingAccessedNodes {
    visited: Vec<NodeId>,
}

impl RecordingAccessedNodes {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The visited nodes, in visitation order.
    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    /// Whether a node was visited at least once.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.visited.iter().any(|visited| visited == id)
    }

    /// Consume the recorder, yielding the trail.
    pub fn into_visited(self) -> Vec<NodeId> {
        self.visited
    }
}

impl AccessedNodes for RecordingAccessedNodes {
    fn visit(&mut self, id: &NodeId) {
        self.visited.push(id.clone());
    }
}

/// Evaluator for one path expression from one start node.
pub struct MapExplorer<'a> {
    text: &'a dyn TextController,
    start: NodeId,
    path: &'a str,
    accessed: &'a mut dyn AccessedNodes,
}

impl<'a> MapExplorer<'a> {
    /// Create an evaluator. Nothing is parsed or resolved until
    /// [`get_node`](Self::get_node) runs.
    pub fn new(
        text: &'a dyn TextController,
        start: NodeId,
        path: &'a str,
        accessed: &'a mut dyn AccessedNodes,
    ) -> Self {
        Self {
            text,
            start,
            path,
            accessed,
        }
    }

    /// Parse the path, then apply its steps starting from the start node.
    pub fn get_node(&mut self, map: &MindMap) -> Result<NodeId> {
        let steps = parse_path(self.path)?;
        if !map.contains(&self.start) {
            return Err(ExplorerError::unknown_node(self.start.as_str()));
        }
        let mut current = self.start.clone();
        for step in &steps {
            current = apply_step(map, self.text, &current, step)?;
            self.accessed.visit(&current);
        }
        Ok(current)
    }
}

/// Resolve one step from `current`. Each step visits no more nodes than its
/// semantics require: relative steps are O(1) over the parent's child list,
/// alias steps scan the map, text steps scan the current node's children.
fn apply_step(
    map: &MindMap,
    text: &dyn TextController,
    current: &NodeId,
    step: &Step,
) -> Result<NodeId> {
    match step {
        Step::Current => Ok(current.clone()),
        Step::Parent => map
            .node_for_id(current)
            .and_then(|node| node.parent_id().cloned())
            .ok_or_else(|| ExplorerError::unresolved(step.to_string(), current.as_str())),
        Step::NextSibling => sibling(map, current, 1)
            .ok_or_else(|| ExplorerError::unresolved(step.to_string(), current.as_str())),
        Step::PreviousSibling => sibling(map, current, -1)
            .ok_or_else(|| ExplorerError::unresolved(step.to_string(), current.as_str())),
        Step::ChildAt(index) => map
            .node_for_id(current)
            .and_then(|node| node.child_ids().get(*index).cloned())
            .ok_or_else(|| ExplorerError::unresolved(step.to_string(), current.as_str())),
        Step::Alias(name) => alias::find_by_alias(map, name)?
            .ok_or_else(|| ExplorerError::unresolved(step.to_string(), current.as_str())),
        Step::Text(pattern) => matching_child(map, text, current, pattern, step),
    }
}

fn sibling(map: &MindMap, current: &NodeId, offset: isize) -> Option<NodeId> {
    let (parent_id, index) = map.index_in_parent(current)?;
    let target = index.checked_add_signed(offset)?;
    map.node_for_id(&parent_id)?.child_ids().get(target).cloned()
}

/// Case-insensitive full-text match over the current node's immediate
/// children. Zero matches fail as unresolved, two or more as ambiguous.
fn matching_child(
    map: &MindMap,
    text: &dyn TextController,
    current: &NodeId,
    pattern: &str,
    step: &Step,
) -> Result<NodeId> {
    let node = map
        .node_for_id(current)
        .ok_or_else(|| ExplorerError::unknown_node(current.as_str()))?;
    let wanted = pattern.to_lowercase();
    let mut matches = node
        .child_ids()
        .iter()
        .filter(|child| text.plain_text(map, child).to_lowercase() == wanted);

    let first = matches
        .next()
        .ok_or_else(|| ExplorerError::unresolved(step.to_string(), current.as_str()))?;
    let extra = matches.count();
    if extra > 0 {
        return Err(ExplorerError::ambiguous(step.to_string(), extra + 1));
    }
    Ok(first.clone())
}
