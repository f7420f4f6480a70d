// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::ViewFilter;
use crate::render::LayoutAlgorithm;

#[derive(Parser)]
#[command(name = "cartograph", version, about = "Explorable code structure graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the graph and print a summary (or the raw elements)
    Build {
        /// Entity model JSON from the parser service
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Print `{nodes, edges}` as JSON instead of the summary
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Export the graph as Graphviz DOT
    Dot {
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Write to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Run a layout pass and print node positions as JSON
    Layout {
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Layout family (defaults to the configured one)
        #[arg(long, short, value_enum)]
        algorithm: Option<LayoutAlgorithm>,
        /// Simulation ticks for the force-directed family
        #[arg(long, default_value = "300")]
        iterations: usize,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show the details-panel view of one node
    Inspect {
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Node id, e.g. `func-0`, `class-1`, `method-0-2`, `base-Name`
        #[arg(value_name = "NODE_ID")]
        node_id: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Visibility flags shared by every subcommand. Negative flags so the
/// default view shows everything, as the configured defaults do.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Hide function nodes
    #[arg(long)]
    pub no_functions: bool,
    /// Hide class nodes
    #[arg(long)]
    pub no_classes: bool,
    /// Hide method nodes (their classes stay visible)
    #[arg(long)]
    pub no_methods: bool,
    /// Hide call edges (contains/inherits edges stay visible)
    #[arg(long)]
    pub no_relationships: bool,
    /// Case-insensitive name substring filter
    #[arg(long, short)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Applies the flags on top of the configured base filter.
    #[must_use]
    pub fn apply(&self, mut base: ViewFilter) -> ViewFilter {
        if self.no_functions {
            base.show_functions = false;
        }
        if self.no_classes {
            base.show_classes = false;
        }
        if self.no_methods {
            base.show_methods = false;
        }
        if self.no_relationships {
            base.show_relationships = false;
        }
        if let Some(search) = &self.search {
            base.search = search.clone();
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_layer_on_top_of_the_base_filter() {
        let args = FilterArgs {
            no_methods: true,
            search: Some("Widget".to_string()),
            ..FilterArgs::default()
        };
        let filter = args.apply(ViewFilter::default());

        assert!(filter.show_functions);
        assert!(!filter.show_methods);
        assert_eq!(filter.search, "Widget");
    }
}
