//! # Giraffe CLI Module
//!
//! This module implements the CLI interface for the giraffe stage finder.
//!
//! ## Available Commands
//!
//! - `classify` - Find the stage for one measurement
//! - `stages` - List all four stages
//! - `stage` - Show one stage card
//! - `interactive` - Prompt loop with "try again" (default)
//! - `server` - Start the HTTP server

mod commands;

use clap::{Parser, Subcommand};
use giraffe_core::GiraffeError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Giraffe - find your giraffe growth stage
///
/// Measure a foot in centimeters and see which giraffe stage it matches.
#[derive(Parser, Debug)]
#[command(name = "giraffe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the giraffe stage for a foot length in centimeters
    Classify {
        /// Foot length, e.g. "16.5"
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// List all growth stages
    Stages,

    /// Show one growth stage (newborn, juvenile, subadult, adult)
    Stage {
        /// Stage key
        id: String,
    },

    /// Enter measurements at a prompt, one after another
    Interactive,

    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config and GIRAFFE_HOST)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config and GIRAFFE_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), GiraffeError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Classify { input }) => cmd_classify(&input, json_mode, cli.verbose),
        Some(Commands::Stages) => cmd_stages(json_mode),
        Some(Commands::Stage { id }) => cmd_stage(&id, json_mode),
        Some(Commands::Server { host, port, config }) => {
            cmd_server(config.as_deref(), host, port).await
        }
        // No subcommand - behave like the widget and prompt for a measurement
        Some(Commands::Interactive) | None => cmd_interactive(json_mode),
    }
}

// =============================================================================
// TESTS
// =============================================================================
