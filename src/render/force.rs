// src/render/force.rs
//! The bundled layout engine. Force-directed placement runs on the
//! `force_graph` simulation; hierarchical and tree placement are simple
//! layered passes over the mounted edges. Positions are held per node id
//! so a layout-only transition overwrites them in place.

use std::collections::HashMap;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{EdgeKind, Graph};
use crate::render::{LayoutAlgorithm, LayoutEngine, NodePosition};
use crate::style::StyleTable;

const TICK_SECONDS: f32 = 0.035;
const SEED_RADIUS: f64 = 100.0;
const LAYER_SPACING: f64 = 120.0;
const COLUMN_SPACING: f64 = 90.0;
const CANVAS_PADDING: f64 = 40.0;

/// One mounted edge, with enough typing for the layered passes to prefer
/// structural edges when building a tree.
#[derive(Debug, Clone)]
struct MountedEdge {
    source: String,
    target: String,
    kind: EdgeKind,
}

pub struct SimulationEngine {
    width: f64,
    height: f64,
    iterations: usize,
    simulation: Option<ForceGraph<String, ()>>,
    node_order: Vec<String>,
    sim_indices: HashMap<String, DefaultNodeIdx>,
    edges: Vec<MountedEdge>,
    positions: HashMap<String, (f64, f64)>,
}

impl SimulationEngine {
    #[must_use]
    pub fn new(width: f64, height: f64, iterations: usize) -> Self {
        Self {
            width,
            height,
            iterations,
            simulation: None,
            node_order: Vec::new(),
            sim_indices: HashMap::new(),
            edges: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn run_force(&mut self) {
        let Some(simulation) = self.simulation.as_mut() else {
            return;
        };
        for _ in 0..self.iterations {
            simulation.update(TICK_SECONDS);
        }

        let positions = &mut self.positions;
        simulation.visit_nodes(|node| {
            positions.insert(
                node.data.user_data.clone(),
                (f64::from(node.x()), f64::from(node.y())),
            );
        });
    }

    /// Layered by edge direction: a node sits one layer below its deepest
    /// predecessor (longest-path layering over all mounted edges).
    fn run_hierarchical(&mut self) {
        let layers = longest_path_layers(&self.node_order, &self.edges, |_| true);
        self.place_layers(&layers);
    }

    /// Strict parent/child layering: only structural edges (`contains`,
    /// `inherits`) define depth, so call edges cannot reshape the tree.
    fn run_tree(&mut self) {
        let layers = longest_path_layers(&self.node_order, &self.edges, |kind| {
            matches!(kind, EdgeKind::Contains | EdgeKind::Inherits)
        });
        self.place_layers(&layers);
    }

    fn place_layers(&mut self, layers: &HashMap<String, usize>) {
        let mut column_in_layer: HashMap<usize, usize> = HashMap::new();

        self.positions.clear();
        for id in &self.node_order {
            let layer = layers.get(id).copied().unwrap_or(0);
            let column = column_in_layer.entry(layer).or_insert(0);
            self.positions.insert(
                id.clone(),
                (
                    CANVAS_PADDING + *column as f64 * COLUMN_SPACING,
                    CANVAS_PADDING + layer as f64 * LAYER_SPACING,
                ),
            );
            *column += 1;
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(1200.0, 800.0, 300)
    }
}

impl LayoutEngine for SimulationEngine {
    fn mount(&mut self, graph: &Graph, style: &StyleTable) {
        let mut simulation = ForceGraph::new(SimulationParameters {
            force_charge: 150.0,
            force_spring: 0.05,
            force_max: 100.0,
            node_speed: 3000.0,
            damping_factor: 0.9,
        });

        let count = graph.nodes.len().max(1);
        for (i, node) in graph.nodes.iter().enumerate() {
            let angle = (i as f64) * 2.0 * std::f64::consts::PI / count as f64;
            let x = (self.width / 2.0 + SEED_RADIUS * angle.cos()) as f32;
            let y = (self.height / 2.0 + SEED_RADIUS * angle.sin()) as f32;
            let mass = style.node(&node.id).map_or(10.0, |s| s.size as f32 / 2.0);

            let idx = simulation.add_node(NodeData {
                x,
                y,
                mass,
                is_anchor: false,
                user_data: node.id.clone(),
            });
            self.sim_indices.insert(node.id.clone(), idx);
            self.node_order.push(node.id.clone());
            self.positions
                .insert(node.id.clone(), (f64::from(x), f64::from(y)));
        }

        for edge in &graph.edges {
            if let (Some(&source), Some(&target)) = (
                self.sim_indices.get(&edge.source),
                self.sim_indices.get(&edge.target),
            ) {
                simulation.add_edge(source, target, EdgeData::default());
            }
            self.edges.push(MountedEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
                kind: edge.kind,
            });
        }

        self.simulation = Some(simulation);
    }

    fn run_layout(&mut self, algorithm: LayoutAlgorithm) {
        match algorithm {
            LayoutAlgorithm::Force => self.run_force(),
            LayoutAlgorithm::Hierarchical => self.run_hierarchical(),
            LayoutAlgorithm::Tree => self.run_tree(),
        }
    }

    fn positions(&self) -> Vec<NodePosition> {
        self.node_order
            .iter()
            .filter_map(|id| {
                self.positions.get(id).map(|&(x, y)| NodePosition {
                    id: id.clone(),
                    x,
                    y,
                })
            })
            .collect()
    }

    fn destroy(&mut self) {
        self.simulation = None;
        self.node_order.clear();
        self.sim_indices.clear();
        self.edges.clear();
        self.positions.clear();
    }
}

/// Longest-path layering over the edges admitted by `admit`. Cycles are cut
/// by a bounded relaxation: depth never exceeds the node count.
fn longest_path_layers<F>(
    order: &[String],
    edges: &[MountedEdge],
    admit: F,
) -> HashMap<String, usize>
where
    F: Fn(EdgeKind) -> bool,
{
    let mut layers: HashMap<String, usize> = order.iter().map(|id| (id.clone(), 0)).collect();
    let bound = order.len();

    for _ in 0..bound {
        let mut changed = false;
        for edge in edges {
            if !admit(edge.kind) {
                continue;
            }
            let Some(&source_layer) = layers.get(&edge.source) else {
                continue;
            };
            let proposed = (source_layer + 1).min(bound);
            if layers.get(&edge.target).is_some_and(|&t| t < proposed) {
                layers.insert(edge.target.clone(), proposed);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ViewFilter;
    use crate::model::EntityModel;

    fn sample_graph() -> Graph {
        let model = EntityModel::from_json(
            r#"{
                "functions": [{"name": "f"}, {"name": "g"}],
                "classes": [{"name": "C", "methods": [{"name": "m"}]}],
                "relationships": {
                    "function_calls": [{"caller": "f", "callee": "g"}],
                    "method_calls": [],
                    "attribute_access": []
                }
            }"#,
        )
        .unwrap();
        Graph::build(&model, &ViewFilter::default())
    }

    #[test]
    fn mount_then_force_layout_positions_every_node() {
        let graph = sample_graph();
        let style = StyleTable::compute(&graph);
        let mut engine = SimulationEngine::new(800.0, 600.0, 10);

        engine.mount(&graph, &style);
        engine.run_layout(LayoutAlgorithm::Force);

        let positions = engine.positions();
        assert_eq!(positions.len(), graph.nodes.len());
    }

    #[test]
    fn tree_layout_puts_methods_below_their_class() {
        let graph = sample_graph();
        let style = StyleTable::compute(&graph);
        let mut engine = SimulationEngine::default();

        engine.mount(&graph, &style);
        engine.run_layout(LayoutAlgorithm::Tree);

        let positions = engine.positions();
        let y_of = |id: &str| {
            positions
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.y)
                .unwrap()
        };
        assert!(y_of("method-0-0") > y_of("class-0"));
        // Call edges do not reshape the tree: "g" stays on the root layer.
        assert!((y_of("func-1") - y_of("func-0")).abs() < f64::EPSILON);
    }

    #[test]
    fn hierarchical_layout_layers_by_call_direction() {
        let graph = sample_graph();
        let style = StyleTable::compute(&graph);
        let mut engine = SimulationEngine::default();

        engine.mount(&graph, &style);
        engine.run_layout(LayoutAlgorithm::Hierarchical);

        let positions = engine.positions();
        let y_of = |id: &str| {
            positions
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.y)
                .unwrap()
        };
        assert!(y_of("func-1") > y_of("func-0"));
    }

    #[test]
    fn destroy_releases_all_mounted_state() {
        let graph = sample_graph();
        let style = StyleTable::compute(&graph);
        let mut engine = SimulationEngine::default();

        engine.mount(&graph, &style);
        engine.destroy();

        assert!(engine.positions().is_empty());
    }
}
