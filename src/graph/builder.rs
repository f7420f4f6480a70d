// src/graph/builder.rs
//! Node construction: filtered entities in, typed nodes + registry out.
//!
//! Iteration always runs over the *original* arrays with their original
//! indices; the filter decides membership inside the loop. That is what
//! keeps `func-{i}` / `class-{i}` / `method-{ci}-{mi}` ids stable while
//! the user toggles visibility flags.

use crate::filter::ViewFilter;
use crate::graph::{EdgeKind, Graph, GraphEdge, GraphNode, NodeKind, NodePayload};
use crate::model::{ClassEntity, EntityModel};

/// Builds the node set, the `contains` edges, and the name registry.
/// Relationship edges are layered on afterwards by the resolver.
#[must_use]
pub fn build_nodes(model: &EntityModel, filter: &ViewFilter) -> Graph {
    let mut graph = Graph::default();

    add_function_nodes(&mut graph, model, filter);
    add_class_nodes(&mut graph, model, filter);

    graph
}

fn add_function_nodes(graph: &mut Graph, model: &EntityModel, filter: &ViewFilter) {
    for (index, function) in model.functions.iter().enumerate() {
        if !filter.admits_function(function) {
            continue;
        }

        let id = format!("func-{index}");
        graph.registry.register(&function.name, &id);
        graph.nodes.push(GraphNode {
            id,
            label: function.name.clone(),
            kind: NodeKind::Function,
            payload: NodePayload::Function(function.clone()),
        });
    }
}

fn add_class_nodes(graph: &mut Graph, model: &EntityModel, filter: &ViewFilter) {
    for (class_index, class) in model.classes.iter().enumerate() {
        if !filter.admits_class(class) {
            continue;
        }

        let class_id = format!("class-{class_index}");
        graph.registry.register(&class.name, &class_id);
        graph.nodes.push(GraphNode {
            id: class_id.clone(),
            label: class.name.clone(),
            kind: NodeKind::Class,
            payload: NodePayload::Class(class.clone()),
        });

        add_method_nodes(graph, class_index, &class_id, class, filter);
    }
}

/// Method nodes only exist under a visible owning class, and method names
/// are *not* registered: they are not addressable as call targets by bare
/// name, only through the method-call resolution path.
fn add_method_nodes(
    graph: &mut Graph,
    class_index: usize,
    class_id: &str,
    class: &ClassEntity,
    filter: &ViewFilter,
) {
    for (method_index, method) in class.methods.iter().enumerate() {
        if !filter.admits_method(method) {
            continue;
        }

        let method_id = format!("method-{class_index}-{method_index}");
        graph.nodes.push(GraphNode {
            id: method_id.clone(),
            label: method.name.clone(),
            kind: NodeKind::Method,
            payload: NodePayload::Method(method.clone()),
        });
        graph.edges.push(GraphEdge {
            id: format!("contains-{class_index}-{method_index}"),
            source: class_id.to_string(),
            target: method_id,
            kind: EdgeKind::Contains,
        });
    }
}
