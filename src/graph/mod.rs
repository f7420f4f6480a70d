// src/graph/mod.rs
//! The property graph: typed nodes and edges with stable string identities.
//!
//! Node ids derive from *original* array positions in the entity model, so
//! an entity keeps its id while visibility filters toggle around it. Edge
//! endpoints always reference node ids, never positions.

pub mod builder;
pub mod resolver;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use serde::Serialize;

use crate::filter::ViewFilter;
use crate::model::{ClassEntity, EntityModel, FunctionEntity};

/// What a node represents. Synthetic inheritance stubs are class-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Function,
    Class,
    Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Calls,
    Inherits,
    Contains,
}

/// Placeholder payload for a referenced name with no parsed definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyntheticStub {
    pub name: String,
}

/// The attribute payload carried by a node, fed straight to the details
/// panel on selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodePayload {
    Function(FunctionEntity),
    Class(ClassEntity),
    Method(FunctionEntity),
    Stub(SyntheticStub),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub payload: NodePayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

/// Display name → node id. Holds at most one id per name: when a function
/// and a class (or two classes) share a name, the later-processed entity
/// overwrites the earlier mapping. Documented limitation, pinned by test.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    ids: HashMap<String, String>,
}

impl NameRegistry {
    pub fn register(&mut self, name: &str, id: &str) {
        self.ids.insert(name.to_string(), id.to_string());
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// One complete build: nodes, edges, and the registry that produced them.
/// A build fully replaces its predecessor; there is no incremental patching.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub registry: NameRegistry,
}

impl Graph {
    /// Builds a fresh graph from the model under the given filter. This is
    /// the single entry point: node construction (`builder`) followed by
    /// relationship resolution (`resolver`).
    #[must_use]
    pub fn build(model: &EntityModel, filter: &ViewFilter) -> Self {
        let mut graph = builder::build_nodes(model, filter);
        resolver::resolve_relationships(&mut graph, model, filter);
        graph
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&GraphNode> {
        self.nodes.iter().filter(|n| n.kind == kind).collect()
    }

    #[must_use]
    pub fn edges_of_kind(&self, kind: EdgeKind) -> Vec<&GraphEdge> {
        self.edges.iter().filter(|e| e.kind == kind).collect()
    }

    /// The `{nodes, edges}` elements value handed to the rendering surface.
    #[must_use]
    pub fn elements(&self) -> serde_json::Value {
        serde_json::json!({
            "nodes": self.nodes,
            "edges": self.edges,
        })
    }
}
