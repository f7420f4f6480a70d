// src/graph/resolver.rs
//! Relationship resolution: turns the model's relationship collections into
//! typed edges over the already-built node set.
//!
//! Resolution is tolerant-by-construction. An endpoint that cannot be
//! resolved drops the record (call edges) or synthesizes a stub node
//! (inheritance bases). Nothing in this module raises.

use std::collections::HashSet;

use crate::filter::ViewFilter;
use crate::graph::{
    EdgeKind, Graph, GraphEdge, GraphNode, NodeKind, NodePayload, SyntheticStub,
};
use crate::model::EntityModel;

/// Layers relationship edges onto `graph`. Inheritance runs unconditionally;
/// the call collections are gated on `show_relationships`. Attribute-access
/// records are part of the input contract but produce no edges.
pub fn resolve_relationships(graph: &mut Graph, model: &EntityModel, filter: &ViewFilter) {
    resolve_inheritance(graph);

    if !filter.show_relationships {
        return;
    }
    resolve_function_calls(graph, model);
    resolve_method_calls(graph, model);
}

/// Inheritance edges come from entity structure (`ClassEntity::bases`), not
/// from relationship records, so the relationships toggle never hides them.
///
/// Each base resolves through the registry first; a stub is created only
/// when the name is unseen anywhere. Stub dedup is an id-keyed set, so two
/// classes sharing an unknown base converge on one `base-{name}` node.
fn resolve_inheritance(graph: &mut Graph) {
    let mut known_ids: HashSet<String> = graph.nodes.iter().map(|n| n.id.clone()).collect();
    let mut new_edges = Vec::new();
    let mut stubs = Vec::new();

    for node in &graph.nodes {
        let NodePayload::Class(class) = &node.payload else {
            continue;
        };

        for (base_index, base) in class.bases.iter().enumerate() {
            let base_id = match graph.registry.resolve(base) {
                Some(id) => id.to_string(),
                None => {
                    let stub_id = format!("base-{base}");
                    if known_ids.insert(stub_id.clone()) {
                        stubs.push(make_stub(&stub_id, base));
                        graph.registry.register(base, &stub_id);
                    }
                    stub_id
                }
            };

            new_edges.push(GraphEdge {
                id: format!("inherit-{}-{}-{}", node.id, base_id, base_index),
                source: node.id.clone(),
                target: base_id,
                kind: EdgeKind::Inherits,
            });
        }
    }

    graph.nodes.extend(stubs);
    graph.edges.extend(new_edges);
}

fn make_stub(id: &str, name: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        label: name.to_string(),
        kind: NodeKind::Class,
        payload: NodePayload::Stub(SyntheticStub {
            name: name.to_string(),
        }),
    }
}

/// A call edge needs both endpoints: the callee must resolve, and the
/// caller must be present *and* resolve — a call with an unknown or absent
/// caller produces no edge. Self-calls are skipped.
fn resolve_function_calls(graph: &mut Graph, model: &EntityModel) {
    let mut new_edges = Vec::new();

    for (record_index, call) in model.relationships.function_calls.iter().enumerate() {
        let Some(callee_id) = graph.registry.resolve(&call.callee) else {
            continue;
        };
        let Some(caller_id) = call
            .caller
            .as_deref()
            .and_then(|caller| graph.registry.resolve(caller))
        else {
            continue;
        };
        if caller_id == callee_id {
            continue;
        }

        new_edges.push(GraphEdge {
            id: format!("call-{record_index}"),
            source: caller_id.to_string(),
            target: callee_id.to_string(),
            kind: EdgeKind::Calls,
        });
    }

    graph.edges.extend(new_edges);
}

/// Best-effort method linking: the object resolves through the registry,
/// the method resolves to the *first* method-kind node with that label,
/// regardless of which class owns it. Cross-class ambiguity is accepted as
/// policy and pinned by test.
fn resolve_method_calls(graph: &mut Graph, model: &EntityModel) {
    let mut new_edges = Vec::new();

    for (record_index, call) in model.relationships.method_calls.iter().enumerate() {
        let Some(object_id) = graph.registry.resolve(&call.object) else {
            continue;
        };
        let Some(method_node) = graph
            .nodes
            .iter()
            .find(|n| n.kind == NodeKind::Method && n.label == call.method)
        else {
            continue;
        };

        new_edges.push(GraphEdge {
            id: format!("method-call-{record_index}"),
            source: object_id.to_string(),
            target: method_node.id.clone(),
            kind: EdgeKind::Calls,
        });
    }

    graph.edges.extend(new_edges);
}
