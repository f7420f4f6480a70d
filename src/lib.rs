pub mod cli;
pub mod config;
pub mod dot;
pub mod error;
pub mod filter;
pub mod graph;
pub mod model;
pub mod render;
pub mod reporting;
pub mod select;
pub mod style;
pub mod view;
