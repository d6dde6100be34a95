mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use gvc_annotate::workflow;
use std::process;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        tracing::debug!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Update {
            candidates,
            stable_only,
            dry_run,
        } => workflow::execute_update(&cli.path, cli.catalog, &candidates, stable_only, dry_run),
        Commands::Cleanup { dry_run } => workflow::execute_cleanup(&cli.path, cli.catalog, dry_run),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
