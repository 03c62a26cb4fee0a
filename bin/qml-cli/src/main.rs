// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # qml
//!
//! Command-line tooling around the model definition core.
//!
//! ## Usage
//! ```bash
//! # List the layer catalogue and argument schemas
//! qml kinds
//!
//! # Run advisory schema checks over an interchange document
//! qml check ./model.json
//!
//! # Re-emit a document in canonical form
//! qml canon ./model.json
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qml",
    about = "Layer catalogue and document tooling for the qml model builder",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (defaults for check/canon).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered layer kinds and their argument schemas.
    Kinds,

    /// Check an interchange document against the layer catalogue.
    Check {
        /// Path to the document JSON file.
        file: std::path::PathBuf,

        /// Exit non-zero when advisory issues are found.
        #[arg(long)]
        strict: bool,
    },

    /// Parse a document and re-emit it in canonical form.
    Canon {
        /// Path to the document JSON file.
        file: std::path::PathBuf,

        /// Emit compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = config::CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Kinds => commands::kinds::execute(),
        Commands::Check { file, strict } => {
            commands::check::execute(&file, strict || config.strict)
        }
        Commands::Canon { file, compact } => {
            let compact = compact || config.format == config::OutputFormat::Compact;
            commands::canon::execute(&file, compact)
        }
    }
}
