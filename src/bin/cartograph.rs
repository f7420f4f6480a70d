// src/bin/cartograph.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cartograph_core::cli::{dispatch, Cli};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch::execute(&cli.command)
}
