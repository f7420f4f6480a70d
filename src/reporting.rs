// src/reporting.rs
//! Colored console summary of a built graph.

use colored::Colorize;

use crate::graph::{EdgeKind, Graph, NodeKind, NodePayload};

fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Prints the per-kind node and edge counts plus any synthetic stubs.
pub fn print_summary(graph: &Graph) {
    let functions = graph.nodes_of_kind(NodeKind::Function).len();
    let classes = graph.nodes_of_kind(NodeKind::Class).len();
    let methods = graph.nodes_of_kind(NodeKind::Method).len();
    let stubs = graph
        .nodes
        .iter()
        .filter(|n| matches!(n.payload, NodePayload::Stub(_)))
        .count();

    println!(
        "🗺️  Graph: {} / {} / {}",
        pluralize(functions, "function").blue(),
        pluralize(classes, "class").yellow(),
        pluralize(methods, "method").green(),
    );
    if stubs > 0 {
        println!(
            "   {} for unresolved base classes",
            pluralize(stubs, "synthetic stub").dimmed()
        );
    }

    let calls = graph.edges_of_kind(EdgeKind::Calls).len();
    let inherits = graph.edges_of_kind(EdgeKind::Inherits).len();
    let contains = graph.edges_of_kind(EdgeKind::Contains).len();
    println!(
        "   Edges: {} calls, {} inherits, {} contains",
        calls.to_string().bold(),
        inherits.to_string().bold(),
        contains.to_string().bold(),
    );

    if graph.nodes.is_empty() {
        println!("{}", "   Nothing visible under the current filter.".dimmed());
    }
}

/// Prints the details-panel view of a selected payload.
pub fn print_details(payload: &NodePayload) {
    match payload {
        NodePayload::Function(f) | NodePayload::Method(f) => {
            println!("{} {}({})", "fn".blue().bold(), f.name, f.args.join(", "));
            if let Some(returns) = &f.returns {
                println!("   returns {returns}");
            }
            if let Some(doc) = &f.docstring {
                println!("   {}", doc.dimmed());
            }
        }
        NodePayload::Class(c) => {
            println!("{} {}", "class".yellow().bold(), c.name);
            if !c.bases.is_empty() {
                println!("   bases: {}", c.bases.join(", "));
            }
            println!("   {}", pluralize(c.methods.len(), "method"));
            if let Some(doc) = &c.docstring {
                println!("   {}", doc.dimmed());
            }
        }
        NodePayload::Stub(stub) => {
            println!(
                "{} {} {}",
                "class".yellow().bold(),
                stub.name,
                "(unresolved reference)".dimmed()
            );
        }
    }
}
