// src/cli/dispatch.rs
//! Command dispatch extracted from the binary to keep `main` thin.

use anyhow::Result;

use super::args::Commands;
use super::handlers::{handle_build, handle_dot, handle_inspect, handle_layout};

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: &Commands) -> Result<()> {
    match command {
        Commands::Build { model, json, filter } => handle_build(model, *json, filter),
        Commands::Dot { model, output, filter } => handle_dot(model, output.as_ref(), filter),
        Commands::Layout {
            model,
            algorithm,
            iterations,
            filter,
        } => handle_layout(model, *algorithm, *iterations, filter),
        Commands::Inspect {
            model,
            node_id,
            filter,
        } => handle_inspect(model, node_id, filter),
    }
}
