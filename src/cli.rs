use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gvc-annotate",
    about = "Annotate a Gradle version catalog with available dependency updates",
    version,
    author
)]
pub struct Cli {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub path: PathBuf,

    /// Catalog file to edit (defaults to <path>/gradle/libs.versions.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add "available" comments below every declaration with newer versions
    Update {
        /// Candidate versions per dependency (JSON array or TOML [[dependency]] tables)
        #[arg(long, value_name = "FILE")]
        candidates: PathBuf,

        /// Drop unstable candidates (alpha, beta, RC, snapshot, ...)
        #[arg(short, long)]
        stable_only: bool,

        /// Print the annotated catalog instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove every "available" comment from the catalog
    Cleanup {
        /// Print the cleaned catalog instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}
