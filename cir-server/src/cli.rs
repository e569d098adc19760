//! Command-line interface definition and parsing.
//!
//! This module defines the command-line arguments accepted by the application
//! and provides parsing functionality using the clap crate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the CIR product service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "CIR_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to do. Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The operations the binary can run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Provision the store, then serve the REST API.
    Serve,

    /// Import a seed file into the store, creating the store if needed.
    Import {
        /// The seed file to import.
        file: PathBuf,

        /// Number of data rows to skip, e.g. to resume an aborted import.
        #[arg(long, default_value_t = 0)]
        skip: usize,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// The requested command, `serve` when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
