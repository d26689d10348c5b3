//! Error types for map_explorer
//!
//! This module provides structured error handling using thiserror.

use thiserror::Error;

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Errors that can occur during reference resolution and map editing
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The reference string matches none of the recognized forms
    #[error("invalid reference format in '{reference}'")]
    MalformedReference { reference: String },

    /// A navigation step has no target node
    #[error("no node for step '{step}' at '{at}'")]
    UnresolvedStep { step: String, at: String },

    /// A step matched more than one equally valid candidate
    #[error("ambiguous match for '{step}': {candidates} candidates")]
    AmbiguousMatch { step: String, candidates: usize },

    /// A node ID is not present in the map
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    /// A node ID is already taken within the map
    #[error("duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    /// A script property matched neither bindings nor node fields
    #[error("unknown property: {name}")]
    UnknownProperty { name: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExplorerError {
    /// Create a malformed-reference error
    pub fn malformed(reference: impl Into<String>) -> Self {
        ExplorerError::MalformedReference {
            reference: reference.into(),
        }
    }

    /// Create an unresolved-step error
    pub fn unresolved(step: impl Into<String>, at: impl Into<String>) -> Self {
        ExplorerError::UnresolvedStep {
            step: step.into(),
            at: at.into(),
        }
    }

    /// Create an ambiguous-match error
    pub fn ambiguous(step: impl Into<String>, candidates: usize) -> Self {
        ExplorerError::AmbiguousMatch {
            step: step.into(),
            candidates,
        }
    }

    /// Create an unknown-node error
    pub fn unknown_node(id: impl Into<String>) -> Self {
        ExplorerError::UnknownNode { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ExplorerError::malformed("foo bar");
        assert_eq!(err.to_string(), "invalid reference format in 'foo bar'");

        let err = ExplorerError::unresolved("parent", "root");
        assert_eq!(err.to_string(), "no node for step 'parent' at 'root'");

        let err = ExplorerError::ambiguous("#twin", 2);
        assert_eq!(err.to_string(), "ambiguous match for '#twin': 2 candidates");
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let err = ExplorerError::unknown_node("n1");
        assert!(matches!(err, ExplorerError::UnknownNode { .. }));
        assert!(!matches!(err, ExplorerError::MalformedReference { .. }));
    }
}
