//! Reference string parsing
//!
//! A reference names zero or one node. Recognized outer forms, checked in
//! priority order:
//!
//! 1. `ID<digits>` — absolute ID, resolved against the map's ID index
//! 2. `at(<path>)` — path expression evaluated relative to a start node
//! 3. `#<alias>` — alias shorthand, searched map-wide
//!
//! Anything else is a malformed reference and reported as such, never
//! treated as "not found".
//!
//! The inner `<path>` is a `/`-separated sequence of steps:
//!
//! - `parent`, `self`, `next`, `previous` — relative navigation
//! - `child:<N>` — N-th child, zero-based
//! - `#<name>` — alias lookup, scoped to the whole map
//! - `'<text>'` or any other token — plain-text match against the current
//!   node's immediate children, compared case-insensitively against the
//!   full plain text; the quoted form exists so keyword-shaped text
//!   (`'parent'`) stays matchable
//!
//! Parsing is pure: no tree access happens here.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::{ExplorerError, Result};

lazy_static! {
    static ref ID_REFERENCE: Regex = Regex::new(r"^ID(\d+)$").unwrap();
}

/// A classified reference string.
///
/// The path payload stays unparsed here; the evaluator tokenizes it via
/// [`parse_path`] when resolution actually runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Absolute ID reference; payload is the digits
    Id(String),
    /// Path expression; payload is the text between `at(` and `)`
    Path(String),
    /// Alias shorthand; payload is the name after `#`
    Alias(String),
}

impl Reference {
    /// Classify a raw reference string by its outer form.
    pub fn parse(reference: &str) -> Result<Self> {
        if let Some(captures) = ID_REFERENCE.captures(reference) {
            return Ok(Reference::Id(captures[1].to_string()));
        }
        if let Some(inner) = reference
            .strip_prefix("at(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Ok(Reference::Path(inner.to_string()));
        }
        if let Some(alias) = reference.strip_prefix('#') {
            if !alias.is_empty() {
                return Ok(Reference::Alias(alias.to_string()));
            }
        }
        Err(ExplorerError::malformed(reference))
    }
}

/// A single navigation step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Move to the parent node
    Parent,
    /// Stay on the current node
    Current,
    /// Move to the next sibling
    NextSibling,
    /// Move to the previous sibling
    PreviousSibling,
    /// Move to the child at the given zero-based index
    ChildAt(usize),
    /// Jump to the node carrying this alias, searched map-wide
    Alias(String),
    /// Move to the child whose plain text matches, case-insensitively
    Text(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Parent => f.write_str("parent"),
            Step::Current => f.write_str("self"),
            Step::NextSibling => f.write_str("next"),
            Step::PreviousSibling => f.write_str("previous"),
            Step::ChildAt(index) => write!(f, "child:{index}"),
            Step::Alias(name) => write!(f, "#{name}"),
            Step::Text(text) => write!(f, "'{text}'"),
        }
    }
}

/// Tokenize the inner `<path>` of an `at(...)` expression into steps.
pub fn parse_path(path: &str) -> Result<Vec<Step>> {
    if path.trim().is_empty() {
        return Err(ExplorerError::malformed(path));
    }
    path.split('/').map(|token| parse_step(token, path)).collect()
}

fn parse_step(token: &str, path: &str) -> Result<Step> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ExplorerError::malformed(path));
    }
    match token {
        "parent" => return Ok(Step::Parent),
        "self" => return Ok(Step::Current),
        "next" => return Ok(Step::NextSibling),
        "previous" => return Ok(Step::PreviousSibling),
        _ => {}
    }
    if let Some(index) = token.strip_prefix("child:") {
        let index = index
            .parse::<usize>()
            .map_err(|_| ExplorerError::malformed(path))?;
        return Ok(Step::ChildAt(index));
    }
    if let Some(alias) = token.strip_prefix('#') {
        if alias.is_empty() {
            return Err(ExplorerError::malformed(path));
        }
        return Ok(Step::Alias(alias.to_string()));
    }
    if let Some(rest) = token.strip_prefix('\'') {
        let text = rest
            .strip_suffix('\'')
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ExplorerError::malformed(path))?;
        return Ok(Step::Text(text.to_string()));
    }
    Ok(Step::Text(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_reference() {
        assert_eq!(
            Reference::parse("ID42").unwrap(),
            Reference::Id("42".to_string())
        );
    }

    #[test]
    fn test_id_requires_digits() {
        assert!(Reference::parse("ID").is_err());
        assert!(Reference::parse("IDfoo").is_err());
        assert!(Reference::parse("ID42x").is_err());
    }

    #[test]
    fn test_path_reference() {
        assert_eq!(
            Reference::parse("at(parent/parent)").unwrap(),
            Reference::Path("parent/parent".to_string())
        );
    }

    #[test]
    fn test_alias_shorthand() {
        assert_eq!(
            Reference::parse("#todo").unwrap(),
            Reference::Alias("todo".to_string())
        );
        assert!(Reference::parse("#").is_err());
    }

    #[test]
    fn test_malformed_reference() {
        for reference in ["foo bar", "", "at(parent", "at parent)"] {
            let err = Reference::parse(reference).unwrap_err();
            assert!(
                matches!(err, ExplorerError::MalformedReference { .. }),
                "{reference:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_path_keywords() {
        assert_eq!(
            parse_path("parent/self/next/previous").unwrap(),
            vec![
                Step::Parent,
                Step::Current,
                Step::NextSibling,
                Step::PreviousSibling
            ]
        );
    }

    #[test]
    fn test_parse_path_child_index() {
        assert_eq!(parse_path("child:2").unwrap(), vec![Step::ChildAt(2)]);
        assert!(parse_path("child:two").is_err());
        assert!(parse_path("child:").is_err());
    }

    #[test]
    fn test_parse_path_alias_and_text() {
        assert_eq!(
            parse_path("#inbox/Tasks").unwrap(),
            vec![
                Step::Alias("inbox".to_string()),
                Step::Text("Tasks".to_string())
            ]
        );
    }

    #[test]
    fn test_quoted_text_escapes_keywords() {
        assert_eq!(
            parse_path("'parent'").unwrap(),
            vec![Step::Text("parent".to_string())]
        );
        assert!(parse_path("'unterminated").is_err());
    }

    #[test]
    fn test_empty_path_and_empty_steps_are_malformed() {
        assert!(parse_path("").is_err());
        assert!(parse_path("parent//self").is_err());
        assert!(parse_path(" ").is_err());
    }

    #[test]
    fn test_step_display_round_trips_through_messages() {
        assert_eq!(Step::ChildAt(3).to_string(), "child:3");
        assert_eq!(Step::Alias("x".to_string()).to_string(), "#x");
        assert_eq!(Step::Text("Plan".to_string()).to_string(), "'Plan'");
    }
}
