//! CLI argument definitions for Catalyst.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "catalyst",
    version,
    about = "Dependency resolver for Catalyst projects",
    long_about = "Catalyst resolves the requirements declared in catalyst.toml against \
                  catalog and directory repositories, and records the result in catalyst.lock."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Register an extra directory repository (repeatable)
    #[arg(short = 'r', long = "repository", global = true, value_name = "DIR")]
    pub repositories: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the project's dependencies and print the chosen versions
    Resolve,

    /// Resolve and regenerate catalyst.lock
    Lock,

    /// Print the resolution tree
    Tree {
        /// Maximum depth
        #[arg(long)]
        depth: Option<usize>,
        /// Explain why a package is included
        #[arg(long)]
        why: Option<String>,
        /// Show what requires a package
        #[arg(long, value_name = "NAME")]
        inverted: Option<String>,
    },

    /// Check whether a package version is published in any repository
    Exists {
        /// Package name (vendor/name)
        name: String,
        /// Exact version label
        version: String,
    },

    /// Show a published package version and its requirements
    Show {
        /// Package name (vendor/name)
        name: String,
        /// Exact version label
        version: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
