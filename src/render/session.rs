// src/render/session.rs
//! The layout session manager: exclusive owner of the engine instance.
//!
//! Two transitions exist. A *data transition* (`rebuild`) discards the old
//! instance before mounting a new one with the new elements. A *layout-only
//! transition* (`relayout`) reuses the live instance and re-runs the
//! positioning pass. The two never interleave on one instance: `rebuild`
//! runs destroy-old → build-new → attach-new to completion, synchronously.

use crate::graph::Graph;
use crate::render::{LayoutAlgorithm, LayoutEngine, NodePosition};
use crate::style::StyleTable;

type EngineFactory = Box<dyn Fn() -> Box<dyn LayoutEngine>>;

pub struct LayoutSession {
    factory: EngineFactory,
    engine: Option<Box<dyn LayoutEngine>>,
    algorithm: LayoutAlgorithm,
}

impl LayoutSession {
    /// Creates a session with no live engine. The factory is invoked once
    /// per data transition.
    pub fn new<F>(factory: F, algorithm: LayoutAlgorithm) -> Self
    where
        F: Fn() -> Box<dyn LayoutEngine> + 'static,
    {
        Self {
            factory: Box::new(factory),
            engine: None,
            algorithm,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> LayoutAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Data transition: tear down the previous instance, then mount a new
    /// one seeded with the new elements and run the current algorithm.
    pub fn rebuild(&mut self, graph: &Graph, style: &StyleTable) {
        self.teardown();

        let mut engine = (self.factory)();
        engine.mount(graph, style);
        engine.run_layout(self.algorithm);
        self.engine = Some(engine);
    }

    /// Layout-only transition: the element set is unchanged, so the live
    /// instance is reused and only the positioning pass re-runs. A no-op
    /// when no data transition has happened yet.
    pub fn relayout(&mut self, algorithm: LayoutAlgorithm) {
        self.algorithm = algorithm;
        if let Some(engine) = self.engine.as_mut() {
            engine.run_layout(algorithm);
        }
    }

    #[must_use]
    pub fn positions(&self) -> Vec<NodePosition> {
        self.engine
            .as_ref()
            .map(|engine| engine.positions())
            .unwrap_or_default()
    }

    fn teardown(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.destroy();
        }
    }
}

// Guaranteed release on every exit path, including shutdown.
impl Drop for LayoutSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
