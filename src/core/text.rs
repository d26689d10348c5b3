//! Text extraction collaborator
//!
//! Reference resolution only needs short plain-text summaries of nodes: the
//! evaluator compares step tokens against node text and the controller
//! offers truncated summaries as reference labels. The trait keeps the
//! actual text pipeline (HTML stripping, formulas) outside this crate and
//! allows mocking in tests.

#[cfg(test)]
use mockall::automock;

use crate::core::map::{MindMap, NodeId};

/// Provides plain-text views of node content.
#[cfg_attr(test, automock)]
pub trait TextController {
    /// Full plain text of a node. Unknown IDs yield the empty string.
    fn plain_text(&self, map: &MindMap, id: &NodeId) -> String;

    /// Plain text truncated to at most `max_units` characters, with
    /// `ellipsis` appended when truncation occurred.
    fn short_plain_text(
        &self,
        map: &MindMap,
        id: &NodeId,
        max_units: usize,
        ellipsis: &str,
    ) -> String;
}

/// Default implementation reading the node's core text verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreTextController;

impl TextController for CoreTextController {
    fn plain_text(&self, map: &MindMap, id: &NodeId) -> String {
        map.node_for_id(id)
            .map(|node| node.text.clone())
            .unwrap_or_default()
    }

    fn short_plain_text(
        &self,
        map: &MindMap,
        id: &NodeId,
        max_units: usize,
        ellipsis: &str,
    ) -> String {
        let text = self.plain_text(map, id);
        if text.chars().count() <= max_units {
            return text;
        }
        let mut short: String = text.chars().take(max_units).collect();
        short.push_str(ellipsis);
        short
    }
}
