// src/cli/handlers.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::args::FilterArgs;
use crate::config::Config;
use crate::dot;
use crate::error::CartographError;
use crate::filter::ViewFilter;
use crate::graph::Graph;
use crate::model::EntityModel;
use crate::render::force::SimulationEngine;
use crate::render::{EngineEvent, LayoutAlgorithm};
use crate::reporting;
use crate::style::StyleTable;
use crate::view::GraphView;

fn load_model(path: &Path) -> Result<EntityModel> {
    let payload = fs::read_to_string(path).map_err(|source| CartographError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    EntityModel::from_json(&payload)
        .with_context(|| format!("invalid entity model in {}", path.display()))
}

fn resolve_filter(args: &FilterArgs, config: &Config) -> ViewFilter {
    args.apply(config.base_filter())
}

/// Handles `cartograph build`.
///
/// # Errors
/// Returns error if the model cannot be read or parsed.
pub fn handle_build(model_path: &Path, json: bool, args: &FilterArgs) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let model = load_model(model_path)?;
    let graph = Graph::build(&model, &resolve_filter(args, &config));

    if json {
        println!("{}", serde_json::to_string_pretty(&graph.elements())?);
    } else {
        reporting::print_summary(&graph);
    }
    Ok(())
}

/// Handles `cartograph dot`.
///
/// # Errors
/// Returns error if the model cannot be read or the output cannot be written.
pub fn handle_dot(model_path: &Path, output: Option<&PathBuf>, args: &FilterArgs) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let model = load_model(model_path)?;
    let graph = Graph::build(&model, &resolve_filter(args, &config));
    let rendered = dot::render(&graph, &StyleTable::compute(&graph));

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Handles `cartograph layout`: drives the full data-transition path
/// through the session manager with the bundled engine.
///
/// # Errors
/// Returns error if the model cannot be read or parsed.
pub fn handle_layout(
    model_path: &Path,
    algorithm: Option<LayoutAlgorithm>,
    iterations: usize,
    args: &FilterArgs,
) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let model = load_model(model_path)?;
    let algorithm = algorithm.unwrap_or(config.view.algorithm);

    let view = GraphView::new(
        model,
        resolve_filter(args, &config),
        algorithm,
        move || Box::new(SimulationEngine::new(1200.0, 800.0, iterations)),
    );

    println!("{}", serde_json::to_string_pretty(&view.positions())?);
    Ok(())
}

/// Handles `cartograph inspect`: selects a node by id and prints the
/// details-panel view of its payload.
///
/// # Errors
/// Returns error if the model cannot be read or the id resolves to nothing
/// under the current filter.
pub fn handle_inspect(model_path: &Path, node_id: &str, args: &FilterArgs) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let model = load_model(model_path)?;

    let mut view = GraphView::new(
        model,
        resolve_filter(args, &config),
        config.view.algorithm,
        || Box::new(SimulationEngine::default()),
    );
    view.handle_event(&EngineEvent::NodeTapped(node_id.to_string()));

    match view.selected() {
        Some(payload) => {
            reporting::print_details(payload);
            Ok(())
        }
        None => Err(CartographError::UnknownNode(node_id.to_string()).into()),
    }
}
