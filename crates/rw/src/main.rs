//! RW CLI - Document tree builder.
//!
//! Provides commands for:
//! - `tree`: Build the document tree and print it as JSON
//! - `resolve`: Print the node at a slug path
//! - `platforms`: List platforms
//! - `platform`: Print a single platform

mod commands;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PlatformArgs, PlatformsArgs, ResolveArgs, TreeArgs};
use output::Output;

/// RW - Document tree builder.
#[derive(Parser)]
#[command(name = "rw", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the document tree and print it.
    Tree(TreeArgs),
    /// Print the node at a slug path.
    Resolve(ResolveArgs),
    /// List platforms.
    Platforms(PlatformsArgs),
    /// Print a single platform.
    Platform(PlatformArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Tree(args) => args.source.verbose,
            Self::Resolve(args) => args.source.verbose,
            Self::Platforms(args) => args.source.verbose,
            Self::Platform(args) => args.source.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Platforms(args) => args.execute(),
        Commands::Platform(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
