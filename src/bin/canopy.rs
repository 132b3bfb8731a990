//! Canopy CLI Binary
//!
//! Command-line interface for the tree catalog display service.

use canopy::logging;
use canopy::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Create CLI context
    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    // Initialize logging with CLI flags folded in
    let mut logging_config = context.config().logging.clone();
    cli.apply_log_overrides(&mut logging_config);
    if let Err(e) = logging::init_logging(&logging_config) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
