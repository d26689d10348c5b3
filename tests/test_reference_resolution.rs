//! Reference Resolution Tests
//!
//! End-to-end tests for the resolution engine:
//! - ID, alias, and path-expression references through the façade
//! - AccessedNodes visitation order
//! - Attribute round-trips for ALIAS and GLOBALLY_VISIBLE

use map_explorer::core::{
    AttributeRegistry, ExplorerError, GlobalNodes, MapExplorerController, MindMap, NodeAlias,
    NodeId, RecordingAccessedNodes,
};
use map_explorer::formats;

// =============================================================================
// Test Fixture
// =============================================================================

// Builds via the document format so attribute reading is exercised too:
//
//   1 "Projects"
//   ├── 2 "Home"         alias: home, globally visible
//   │   ├── 4 "Garden"
//   │   └── 5 "Kitchen"
//   └── 3 "Work"
//       └── 6 "Garden"
fn fixture() -> (MindMap, AttributeRegistry) {
    let mut registry = AttributeRegistry::new();
    MapExplorerController::install(&mut registry);

    let json = r#"{
        "root": {
            "id": "1",
            "text": "Projects",
            "children": [
                {
                    "id": "2",
                    "text": "Home",
                    "attributes": {"ALIAS": "home", "GLOBALLY_VISIBLE": "true"},
                    "children": [
                        {"id": "4", "text": "Garden"},
                        {"id": "5", "text": "Kitchen"}
                    ]
                },
                {
                    "id": "3",
                    "text": "Work",
                    "children": [
                        {"id": "6", "text": "Garden"}
                    ]
                }
            ]
        }
    }"#;

    let map = formats::from_json(json, &registry).expect("fixture map should load");
    (map, registry)
}

// =============================================================================
// ID and Alias References
// =============================================================================

#[test]
fn test_id_reference_resolves_regardless_of_start() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();

    for start in ["1", "4", "6"] {
        let node = controller.get_node_at(&map, &start.into(), "ID5").unwrap();
        assert_eq!(node, Some("5".into()));
    }
}

#[test]
fn test_unknown_id_is_none_not_an_error() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();
    let node = controller.get_node_at(&map, &"1".into(), "ID999").unwrap();
    assert_eq!(node, None);
}

#[test]
fn test_alias_resolves_from_any_start() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();

    assert_eq!(controller.get_alias(&map, &"2".into()), "home");
    for start in ["1", "5", "6"] {
        let node = controller.get_node_at(&map, &start.into(), "#home").unwrap();
        assert_eq!(node, Some("2".into()));
    }
}

#[test]
fn test_duplicate_alias_is_ambiguous_when_propagating() {
    let (mut map, _) = fixture();
    NodeAlias::set(map.node_for_id_mut(&"3".into()).unwrap(), "home");
    let controller = MapExplorerController::default();

    let err = controller
        .get_node_at_tracked(&map, &"1".into(), "#home", &mut RecordingAccessedNodes::new())
        .unwrap_err();
    assert!(matches!(err, ExplorerError::AmbiguousMatch { .. }));

    // The best-effort entry point collapses the same failure to None.
    assert_eq!(
        controller.get_node_at(&map, &"1".into(), "#home").unwrap(),
        None
    );
}

// =============================================================================
// Path Expressions
// =============================================================================

#[test]
fn test_parent_parent_records_trail_in_order() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();
    let mut recorder = RecordingAccessedNodes::new();

    let node = controller
        .get_node_at_tracked(&map, &"4".into(), "at(parent/parent)", &mut recorder)
        .unwrap();

    assert_eq!(node, "1".into());
    assert_eq!(
        recorder.visited(),
        [NodeId::from("2"), NodeId::from("1")]
    );
}

#[test]
fn test_parent_of_root_fails_or_is_none_by_entry_point() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();

    let err = controller
        .get_node_at_tracked(
            &map,
            &"1".into(),
            "at(parent)",
            &mut RecordingAccessedNodes::new(),
        )
        .unwrap_err();
    assert!(matches!(err, ExplorerError::UnresolvedStep { .. }));

    let node = controller.get_node_at(&map, &"1".into(), "at(parent)").unwrap();
    assert_eq!(node, None);
}

#[test]
fn test_mixed_path_with_alias_siblings_and_children() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();

    // Jump to the alias target, pan to its sibling, descend to a child.
    let node = controller
        .get_node_at(&map, &"6".into(), "at(#home/next/child:0)")
        .unwrap();
    assert_eq!(node, Some("6".into()));
}

#[test]
fn test_text_step_is_scoped_to_the_current_node() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();

    // Both "Home" and "Work" have a "Garden" child; the step only sees the
    // children of the node it starts from, so neither call is ambiguous.
    assert_eq!(
        controller.get_node_at(&map, &"2".into(), "at(garden)").unwrap(),
        Some("4".into())
    );
    assert_eq!(
        controller.get_node_at(&map, &"3".into(), "at(garden)").unwrap(),
        Some("6".into())
    );
    // From the root, no child is named "Garden".
    assert_eq!(
        controller.get_node_at(&map, &"1".into(), "at(garden)").unwrap(),
        None
    );
}

#[test]
fn test_malformed_reference_is_an_error_from_both_entry_points() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();

    let err = controller
        .get_node_at(&map, &"1".into(), "foo bar")
        .unwrap_err();
    assert!(matches!(err, ExplorerError::MalformedReference { .. }));

    let err = controller
        .get_node_at_tracked(
            &map,
            &"1".into(),
            "foo bar",
            &mut RecordingAccessedNodes::new(),
        )
        .unwrap_err();
    assert!(matches!(err, ExplorerError::MalformedReference { .. }));
}

// =============================================================================
// Reference Suggestions
// =============================================================================

#[test]
fn test_suggestion_prefers_alias() {
    let (map, _) = fixture();
    let controller = MapExplorerController::default();
    assert_eq!(
        controller.get_node_reference_suggestion(&map, &"2".into()),
        "#home"
    );
}

#[test]
fn test_suggestion_falls_back_to_truncated_text() {
    let (mut map, _) = fixture();
    map.node_for_id_mut(&"3".into()).unwrap().text =
        "Quarterly planning documents".to_string();
    let controller = MapExplorerController::default();

    let suggestion = controller.get_node_reference_suggestion(&map, &"3".into());
    assert!(!suggestion.starts_with('#'));
    assert_eq!(suggestion.chars().count(), 11);
    assert_eq!(suggestion, "Quarterly …");
}

// =============================================================================
// Persistence Round-Trips
// =============================================================================

#[test]
fn test_alias_and_global_round_trip() {
    let (map, registry) = fixture();

    let json = formats::to_json(&map, &registry).unwrap();
    let reloaded = formats::from_json(&json, &registry).unwrap();

    assert_eq!(
        NodeAlias::get(reloaded.node_for_id(&"2".into()).unwrap()),
        "home"
    );
    assert!(GlobalNodes::of(&reloaded).is_global(&"2".into()));

    // Nodes with neither extension serialize without attributes.
    let document = formats::write_map(&reloaded, &registry);
    let work = &document.root.children[1];
    assert_eq!(work.id, "3");
    assert!(work.attributes.is_empty());
}

#[test]
fn test_global_visibility_is_never_written_as_false() {
    let (map, registry) = fixture();
    let document = formats::write_map(&map, &registry);

    let home = &document.root.children[0];
    assert_eq!(home.attributes.get("GLOBALLY_VISIBLE").unwrap(), "true");
    let work = &document.root.children[1];
    assert!(!work.attributes.contains_key("GLOBALLY_VISIBLE"));
}
