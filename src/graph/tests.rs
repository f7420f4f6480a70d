// src/graph/tests.rs
//! Integration tests for the build pipeline (builder + resolver together).
//!
//! These pin the identity, filtering, and resolution policies rather than
//! individual functions, so a rework of either stage trips them.

use std::collections::HashSet;

use crate::filter::ViewFilter;
use crate::graph::{EdgeKind, Graph, NodeKind, NodePayload};
use crate::model::EntityModel;

fn model(json: &str) -> EntityModel {
    EntityModel::from_json(json).expect("test model must parse")
}

fn ids(graph: &Graph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.id.as_str()).collect()
}

fn edge_ids(graph: &Graph) -> Vec<&str> {
    graph.edges.iter().map(|e| e.id.as_str()).collect()
}

// ========================================================================
// Identity stability: ids derive from original positions, so filters may
// come and go without renumbering the survivors.
// ========================================================================
#[test]
fn node_ids_survive_filter_toggling() {
    let model = model(
        r#"{
            "functions": [{"name": "alpha"}, {"name": "beta"}, {"name": "gamma"}],
            "classes": [{"name": "First"}, {"name": "Second", "methods": [{"name": "m"}]}]
        }"#,
    );

    let full = Graph::build(&model, &ViewFilter::default());
    let narrowed = Graph::build(
        &model,
        &ViewFilter {
            search: "beta".to_string(),
            ..ViewFilter::default()
        },
    );
    let restored = Graph::build(&model, &ViewFilter::default());

    assert_eq!(ids(&narrowed), vec!["func-1"]);
    assert_eq!(ids(&full), ids(&restored));
    assert!(ids(&full).contains(&"func-1"));
    assert!(ids(&full).contains(&"class-1"));
    assert!(ids(&full).contains(&"method-1-0"));
}

#[test]
fn rebuilding_twice_is_idempotent() {
    let model = model(
        r#"{
            "functions": [{"name": "f"}, {"name": "g"}],
            "classes": [{"name": "B", "bases": ["A"], "methods": [{"name": "m"}]}],
            "relationships": {
                "function_calls": [{"caller": "f", "callee": "g"}],
                "method_calls": [{"object": "B", "method": "m"}],
                "attribute_access": []
            }
        }"#,
    );
    let filter = ViewFilter::default();

    let first = Graph::build(&model, &filter);
    let second = Graph::build(&model, &filter);

    assert_eq!(ids(&first), ids(&second));
    assert_eq!(edge_ids(&first), edge_ids(&second));
}

// ========================================================================
// Filter and search correctness.
// ========================================================================
#[test]
fn hiding_functions_leaves_no_function_nodes() {
    let model = model(
        r#"{
            "functions": [{"name": "f"}, {"name": "g"}],
            "classes": [{"name": "C"}]
        }"#,
    );
    let graph = Graph::build(
        &model,
        &ViewFilter {
            show_functions: false,
            ..ViewFilter::default()
        },
    );

    assert!(graph.nodes_of_kind(NodeKind::Function).is_empty());
    assert_eq!(graph.nodes_of_kind(NodeKind::Class).len(), 1);
}

#[test]
fn search_selects_exactly_the_matching_classes() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [{"name": "HttpServer"}, {"name": "Parser"}, {"name": "serverless"}]
        }"#,
    );
    let graph = Graph::build(
        &model,
        &ViewFilter {
            search: "Server".to_string(),
            ..ViewFilter::default()
        },
    );

    let labels: HashSet<&str> = graph
        .nodes_of_kind(NodeKind::Class)
        .iter()
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(labels, HashSet::from(["HttpServer", "serverless"]));
}

#[test]
fn hiding_methods_keeps_the_owning_class() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [{"name": "C", "methods": [{"name": "a"}, {"name": "b"}]}]
        }"#,
    );
    let graph = Graph::build(
        &model,
        &ViewFilter {
            show_methods: false,
            ..ViewFilter::default()
        },
    );

    assert_eq!(ids(&graph), vec!["class-0"]);
    assert!(graph.edges.is_empty());
}

#[test]
fn hiding_a_class_hides_its_methods_too() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [{"name": "C", "methods": [{"name": "m"}]}]
        }"#,
    );
    let graph = Graph::build(
        &model,
        &ViewFilter {
            show_classes: false,
            ..ViewFilter::default()
        },
    );

    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}

#[test]
fn contains_edges_match_visible_method_count() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [
                {"name": "A", "methods": [{"name": "run"}, {"name": "stop"}]},
                {"name": "B", "methods": [{"name": "run"}]}
            ]
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    assert_eq!(
        graph.edges_of_kind(EdgeKind::Contains).len(),
        graph.nodes_of_kind(NodeKind::Method).len()
    );
    assert_eq!(graph.edges_of_kind(EdgeKind::Contains).len(), 3);
}

#[test]
fn hiding_relationships_keeps_contains_and_inherits() {
    let model = model(
        r#"{
            "functions": [{"name": "f"}, {"name": "g"}],
            "classes": [{"name": "B", "bases": ["A"], "methods": [{"name": "m"}]}],
            "relationships": {
                "function_calls": [{"caller": "f", "callee": "g"}],
                "method_calls": [{"object": "B", "method": "m"}],
                "attribute_access": []
            }
        }"#,
    );
    let graph = Graph::build(
        &model,
        &ViewFilter {
            show_relationships: false,
            ..ViewFilter::default()
        },
    );

    assert!(graph.edges_of_kind(EdgeKind::Calls).is_empty());
    assert_eq!(graph.edges_of_kind(EdgeKind::Contains).len(), 1);
    assert_eq!(graph.edges_of_kind(EdgeKind::Inherits).len(), 1);
}

// ========================================================================
// Relationship resolution policies.
// ========================================================================
#[test]
fn function_call_with_both_endpoints_resolves() {
    let model = model(
        r#"{
            "functions": [{"name": "f"}, {"name": "g"}],
            "classes": [],
            "relationships": {
                "function_calls": [{"caller": "f", "callee": "g"}],
                "method_calls": [],
                "attribute_access": []
            }
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    let calls = graph.edges_of_kind(EdgeKind::Calls);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].source, "func-0");
    assert_eq!(calls[0].target, "func-1");
    assert_eq!(calls[0].id, "call-0");
}

#[test]
fn calls_without_a_resolvable_caller_are_dropped() {
    let model = model(
        r#"{
            "functions": [{"name": "g"}],
            "classes": [],
            "relationships": {
                "function_calls": [
                    {"caller": null, "callee": "g"},
                    {"caller": "unknown", "callee": "g"},
                    {"caller": "g", "callee": "missing"}
                ],
                "method_calls": [],
                "attribute_access": []
            }
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    assert!(graph.edges_of_kind(EdgeKind::Calls).is_empty());
}

#[test]
fn self_calls_produce_no_edge() {
    let model = model(
        r#"{
            "functions": [{"name": "recurse"}],
            "classes": [],
            "relationships": {
                "function_calls": [{"caller": "recurse", "callee": "recurse"}],
                "method_calls": [],
                "attribute_access": []
            }
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    assert!(graph.edges.iter().all(|e| e.source != e.target));
    assert!(graph.edges_of_kind(EdgeKind::Calls).is_empty());
}

#[test]
fn method_calls_link_to_the_first_matching_method_anywhere() {
    // Both classes define `run`; policy is first-match in node order,
    // regardless of which class the object belongs to.
    let model = model(
        r#"{
            "functions": [],
            "classes": [
                {"name": "A", "methods": [{"name": "run"}]},
                {"name": "B", "methods": [{"name": "run"}]}
            ],
            "relationships": {
                "function_calls": [],
                "method_calls": [{"object": "B", "method": "run"}],
                "attribute_access": []
            }
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    let calls = graph.edges_of_kind(EdgeKind::Calls);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].source, "class-1");
    assert_eq!(calls[0].target, "method-0-0");
    assert_eq!(calls[0].id, "method-call-0");
}

#[test]
fn attribute_access_records_never_become_edges() {
    let model = model(
        r#"{
            "functions": [{"name": "f"}],
            "classes": [{"name": "C", "methods": [{"name": "m"}]}],
            "relationships": {
                "function_calls": [],
                "method_calls": [],
                "attribute_access": [{"object": "C", "attribute": "m"}]
            }
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    assert!(graph.edges_of_kind(EdgeKind::Calls).is_empty());
}

// ========================================================================
// Synthetic stubs and the name registry.
// ========================================================================
#[test]
fn unknown_base_synthesizes_exactly_one_stub() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [{"name": "B", "bases": ["Unknown"]}]
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    let stubs: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| matches!(n.payload, NodePayload::Stub(_)))
        .collect();
    assert_eq!(stubs.len(), 1);
    assert_eq!(stubs[0].id, "base-Unknown");
    assert_eq!(stubs[0].kind, NodeKind::Class);

    let inherits = graph.edges_of_kind(EdgeKind::Inherits);
    assert_eq!(inherits.len(), 1);
    assert_eq!(inherits[0].source, "class-0");
    assert_eq!(inherits[0].target, "base-Unknown");
}

#[test]
fn two_classes_sharing_an_unknown_base_share_one_stub() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [
                {"name": "B", "bases": ["Mixin"]},
                {"name": "C", "bases": ["Mixin"]}
            ]
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    let stub_count = graph.nodes.iter().filter(|n| n.id == "base-Mixin").count();
    assert_eq!(stub_count, 1);
    assert_eq!(graph.edges_of_kind(EdgeKind::Inherits).len(), 2);
}

#[test]
fn known_bases_resolve_to_the_parsed_class_node() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [{"name": "Base"}, {"name": "Derived", "bases": ["Base"]}]
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    let inherits = graph.edges_of_kind(EdgeKind::Inherits);
    assert_eq!(inherits.len(), 1);
    assert_eq!(inherits[0].source, "class-1");
    assert_eq!(inherits[0].target, "class-0");
    assert_eq!(inherits[0].id, "inherit-class-1-class-0-0");
    assert!(graph.node("base-Base").is_none());
}

#[test]
fn registry_keeps_the_later_entity_on_name_collision() {
    // A function and a class named "Thing": classes are processed after
    // functions, so the class wins. Documented last-write-wins limitation.
    let model = model(
        r#"{
            "functions": [{"name": "Thing"}, {"name": "f"}],
            "classes": [{"name": "Thing"}],
            "relationships": {
                "function_calls": [{"caller": "f", "callee": "Thing"}],
                "method_calls": [],
                "attribute_access": []
            }
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    assert_eq!(graph.registry.resolve("Thing"), Some("class-0"));
    let calls = graph.edges_of_kind(EdgeKind::Calls);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].target, "class-0");
}

#[test]
fn filtered_out_class_still_gets_a_stub_when_inherited_from() {
    // "Base" exists in the model but the search filter removes it, so its
    // name is unseen anywhere in this build and a stub takes its place.
    let model = model(
        r#"{
            "functions": [],
            "classes": [{"name": "Base"}, {"name": "Derived", "bases": ["Base"]}]
        }"#,
    );
    let graph = Graph::build(
        &model,
        &ViewFilter {
            search: "Derived".to_string(),
            ..ViewFilter::default()
        },
    );

    assert!(graph.node("class-0").is_none());
    assert!(graph.node("base-Base").is_some());
    assert_eq!(graph.edges_of_kind(EdgeKind::Inherits).len(), 1);
}

// ========================================================================
// End-to-end scenarios.
// ========================================================================
#[test]
fn scenario_two_functions_no_classes() {
    let model = model(r#"{"functions": [{"name": "f"}, {"name": "g"}], "classes": []}"#);
    let graph = Graph::build(&model, &ViewFilter::default());

    assert_eq!(ids(&graph), vec!["func-0", "func-1"]);
    assert_eq!(graph.node("func-0").unwrap().label, "f");
    assert_eq!(graph.node("func-1").unwrap().label, "g");
    assert!(graph.edges.is_empty());
}

#[test]
fn scenario_class_with_method_and_unknown_base() {
    let model = model(
        r#"{
            "functions": [],
            "classes": [{"name": "B", "bases": ["A"], "methods": [{"name": "m"}]}]
        }"#,
    );
    let graph = Graph::build(&model, &ViewFilter::default());

    let node_ids: HashSet<&str> = ids(&graph).into_iter().collect();
    assert_eq!(node_ids, HashSet::from(["class-0", "method-0-0", "base-A"]));

    let contains = graph.edges_of_kind(EdgeKind::Contains);
    assert_eq!(contains.len(), 1);
    assert_eq!((contains[0].source.as_str(), contains[0].target.as_str()), ("class-0", "method-0-0"));

    let inherits = graph.edges_of_kind(EdgeKind::Inherits);
    assert_eq!(inherits.len(), 1);
    assert_eq!((inherits[0].source.as_str(), inherits[0].target.as_str()), ("class-0", "base-A"));
}
