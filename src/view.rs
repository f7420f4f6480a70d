// src/view.rs
//! `GraphView`: the two-tier reactive controller.
//!
//! Every input that affects the element set (entity model, any visibility
//! flag, the search term) is a *data transition*: the graph and its style
//! table are rebuilt from scratch and the layout session discards its
//! engine instance for a fresh one. Changing only the layout algorithm is a
//! *layout-only transition*: the element set and the engine instance are
//! reused and just the positioning pass re-runs. All transitions are
//! synchronous and run to completion before the next can start.

use crate::filter::ViewFilter;
use crate::graph::Graph;
use crate::model::EntityModel;
use crate::render::session::LayoutSession;
use crate::render::{EngineEvent, LayoutAlgorithm, LayoutEngine, NodePosition};
use crate::select::Selection;
use crate::style::StyleTable;

pub struct GraphView {
    model: EntityModel,
    filter: ViewFilter,
    graph: Graph,
    style: StyleTable,
    session: LayoutSession,
    selection: Selection,
}

impl GraphView {
    /// Builds the initial graph and mounts the first engine instance.
    pub fn new<F>(model: EntityModel, filter: ViewFilter, algorithm: LayoutAlgorithm, factory: F) -> Self
    where
        F: Fn() -> Box<dyn LayoutEngine> + 'static,
    {
        let mut view = Self {
            model,
            filter,
            graph: Graph::default(),
            style: StyleTable::default(),
            session: LayoutSession::new(factory, algorithm),
            selection: Selection::default(),
        };
        view.data_transition();
        view
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn style(&self) -> &StyleTable {
        &self.style
    }

    #[must_use]
    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    #[must_use]
    pub fn selected(&self) -> Option<&crate::graph::NodePayload> {
        self.selection.selected()
    }

    #[must_use]
    pub fn positions(&self) -> Vec<NodePosition> {
        self.session.positions()
    }

    /// A new analysis result replaces the model wholesale.
    pub fn set_model(&mut self, model: EntityModel) {
        self.model = model;
        self.data_transition();
    }

    /// Any flag or search change rebuilds; identical filters are still a
    /// rebuild trigger (staleness is prevented by rebuilding, not by
    /// diffing).
    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
        self.data_transition();
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.to_string();
        self.data_transition();
    }

    /// Layout-only transition: nodes, edges, and selection survive.
    pub fn set_algorithm(&mut self, algorithm: LayoutAlgorithm) {
        self.session.relayout(algorithm);
    }

    /// Routes a pointer event from the rendering surface.
    pub fn handle_event(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::NodeTapped(id) => {
                if let Some(node) = self.graph.node(id) {
                    self.selection.select(node.payload.clone());
                }
            }
            EngineEvent::BackgroundTapped => self.selection.clear(),
        }
    }

    /// Destroy-old → build-new → attach-new, in that order, synchronously.
    fn data_transition(&mut self) {
        self.graph = Graph::build(&self.model, &self.filter);
        self.style = StyleTable::compute(&self.graph);
        self.session.rebuild(&self.graph, &self.style);
        // The previously tapped object no longer exists in the new graph.
        self.selection.clear();
    }
}
