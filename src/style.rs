// src/style.rs
//! Visual attributes as a pure lookup table, computed once per rebuild.
//!
//! The rendering engine receives this table alongside the elements instead
//! of calling back into the core per frame. Node size is derived from the
//! payload at build time (arg count for callables, method count for
//! classes).

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::{EdgeKind, Graph, NodeKind, NodePayload};

const FUNCTION_COLOR: &str = "#1f77b4";
const CLASS_COLOR: &str = "#ff7f0e";
const METHOD_COLOR: &str = "#2ca02c";
const STUB_COLOR: &str = "#7f7f7f";

const BASE_NODE_SIZE: f64 = 20.0;
const SIZE_PER_MEMBER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeStyle {
    pub color: &'static str,
    pub shape: &'static str,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    pub color: &'static str,
    pub line: &'static str,
}

/// Per-build style table keyed by node id / edge kind.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StyleTable {
    pub nodes: HashMap<String, NodeStyle>,
    pub edges: HashMap<EdgeKind, EdgeStyle>,
}

impl StyleTable {
    #[must_use]
    pub fn compute(graph: &Graph) -> Self {
        let mut table = Self::default();

        for node in &graph.nodes {
            table.nodes.insert(node.id.clone(), node_style(node.kind, &node.payload));
        }
        table.edges.insert(
            EdgeKind::Calls,
            EdgeStyle { color: "#9467bd", line: "solid" },
        );
        table.edges.insert(
            EdgeKind::Inherits,
            EdgeStyle { color: "#d62728", line: "dashed" },
        );
        table.edges.insert(
            EdgeKind::Contains,
            EdgeStyle { color: "#8c564b", line: "dotted" },
        );

        table
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&NodeStyle> {
        self.nodes.get(id)
    }
}

fn node_style(kind: NodeKind, payload: &NodePayload) -> NodeStyle {
    let (color, shape) = match payload {
        NodePayload::Stub(_) => (STUB_COLOR, "box"),
        _ => match kind {
            NodeKind::Function => (FUNCTION_COLOR, "ellipse"),
            NodeKind::Class => (CLASS_COLOR, "box"),
            NodeKind::Method => (METHOD_COLOR, "ellipse"),
        },
    };

    NodeStyle {
        color,
        shape,
        size: BASE_NODE_SIZE + SIZE_PER_MEMBER * member_count(payload) as f64,
    }
}

fn member_count(payload: &NodePayload) -> usize {
    match payload {
        NodePayload::Function(f) | NodePayload::Method(f) => f.args.len(),
        NodePayload::Class(c) => c.methods.len(),
        NodePayload::Stub(_) => 0,
    }
}
