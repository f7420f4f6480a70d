// src/render/mod.rs
//! The rendering boundary: layout algorithm selection and the engine seam.
//!
//! The concrete placement math lives behind [`LayoutEngine`]; this core only
//! selects and invokes it. One engine instance exists per graph version,
//! owned by the session manager in `session.rs`.

pub mod force;
pub mod session;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::style::StyleTable;

/// The three supported layout families. Placement math is the engine's
/// concern; the core only names the family to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutAlgorithm {
    /// Physics-based placement with no inherent hierarchy.
    #[default]
    Force,
    /// Layered by edge direction.
    Hierarchical,
    /// Strict parent/child layering.
    Tree,
}

/// A node's computed 2D position, keyed by node id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Pointer interaction surfaced by the rendering engine. The view maps
/// these onto the selection controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    NodeTapped(String),
    BackgroundTapped,
}

/// The external layout/rendering engine contract.
///
/// Lifecycle per instance: `mount` exactly once, `run_layout` one or more
/// times, `destroy` exactly once. The session manager enforces this; an
/// engine may assume it.
pub trait LayoutEngine {
    /// Seeds the instance with a freshly built element set and its style
    /// table. Called once, before any layout run.
    fn mount(&mut self, graph: &Graph, style: &StyleTable);

    /// Runs the positioning pass for the given algorithm over the mounted
    /// elements. Safe to call repeatedly with different algorithms.
    fn run_layout(&mut self, algorithm: LayoutAlgorithm);

    /// Current positions of all mounted nodes.
    fn positions(&self) -> Vec<NodePosition>;

    /// Releases everything the instance holds (simulation state, listeners,
    /// drawing resources). The instance is unusable afterwards.
    fn destroy(&mut self);
}
