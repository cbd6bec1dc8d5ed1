// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! serbench CLI
//!
//! Command-line interface for the JSON vs MessagePack round-trip benchmark.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serbench_core::ListSize;

mod commands;

/// serbench - JSON vs MessagePack file round-trip benchmark
#[derive(Parser)]
#[command(name = "serbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the round-trip benchmark and print the median table
    Run {
        /// Configuration file listing the sizes to benchmark
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List size to benchmark, e.g. 10k or 250000 (repeatable, overrides --config)
        #[arg(short, long = "size")]
        sizes: Vec<ListSize>,

        /// Directory for the temporary payload files
        #[arg(long, default_value = ".")]
        scratch_dir: PathBuf,

        /// Save a JSON report to this directory
        #[arg(short, long)]
        report_dir: Option<PathBuf>,
    },

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        file: PathBuf,
    },

    /// List saved JSON reports
    Reports {
        /// Directory holding saved reports
        #[arg(default_value = "data")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Run {
            config,
            sizes,
            scratch_dir,
            report_dir,
        } => {
            commands::run::execute(config.as_deref(), &sizes, &scratch_dir, report_dir.as_deref())
                .await
        }
        Commands::Validate { file } => commands::validate::execute(&file).await,
        Commands::Reports { dir } => commands::reports::execute(&dir).await,
    }
}
