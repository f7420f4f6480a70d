// src/dot.rs
//! Graphviz DOT export of a built graph.

use std::fmt::Write;

use crate::graph::{EdgeKind, Graph};
use crate::style::StyleTable;

/// Escape special characters for DOT labels.
fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Sanitize a node id into a valid DOT identifier.
fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn edge_style_attr(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::Calls => "solid",
        EdgeKind::Inherits => "dashed",
        EdgeKind::Contains => "dotted",
    }
}

/// Renders the graph (with its per-build style table) as a digraph.
#[must_use]
pub fn render(graph: &Graph, style: &StyleTable) -> String {
    let mut out = String::with_capacity(4096);
    let _ = writeln!(out, "digraph cartograph {{");
    let _ = writeln!(out, "  rankdir=\"TB\";");
    let _ = writeln!(out, "  node [fontname=\"Helvetica\"];");
    out.push('\n');

    for node in &graph.nodes {
        let shape = style.node(&node.id).map_or("ellipse", |s| s.shape);
        let color = style.node(&node.id).map_or("#000000", |s| s.color);
        let _ = writeln!(
            out,
            "  {} [label=\"{}\", shape={}, color=\"{}\"];",
            sanitize_id(&node.id),
            escape_label(&node.label),
            shape,
            color,
        );
    }
    out.push('\n');

    for edge in &graph.edges {
        let _ = writeln!(
            out,
            "  {} -> {} [style={}];",
            sanitize_id(&edge.source),
            sanitize_id(&edge.target),
            edge_style_attr(edge.kind),
        );
    }

    out.push_str("}\n");
    out
}
