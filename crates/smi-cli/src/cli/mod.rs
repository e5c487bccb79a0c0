//! CLI for the SMI sitemap importer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smi_core::config;
use std::path::PathBuf;

use commands::{run_config, run_import, run_inspect, ImportArgs};

/// Top-level CLI for the sitemap importer.
#[derive(Debug, Parser)]
#[command(name = "smi")]
#[command(about = "SMI: re-import exported sitemap XML items into a site map", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Import every export file in a folder and emit site map entries.
    Import {
        /// Folder holding the exports (default: `sitemap_dir` from config, under the current directory).
        dir: Option<PathBuf>,

        /// Write entries as JSON lines to this file instead of stdout.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        /// Override the oversize threshold (bytes of decoded response).
        #[arg(long, value_name = "BYTES")]
        response_len_limit: Option<usize>,

        /// Leave oversized items out of the site map instead of only reporting them.
        #[arg(long)]
        exclude_oversized: bool,

        /// Record a failing file in the summary and keep importing the rest.
        #[arg(long)]
        continue_on_error: bool,

        /// Print every parsed item.
        #[arg(long)]
        print_items: bool,
    },

    /// Parse a single export file and list its items without importing them.
    Inspect {
        /// Path to the export file.
        path: PathBuf,

        /// Override the oversize threshold (bytes of decoded response).
        #[arg(long, value_name = "BYTES")]
        response_len_limit: Option<usize>,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Import {
                dir,
                output,
                response_len_limit,
                exclude_oversized,
                continue_on_error,
                print_items,
            } => {
                let args = ImportArgs {
                    dir,
                    output,
                    response_len_limit,
                    exclude_oversized,
                    continue_on_error,
                    print_items,
                };
                run_import(cfg, args)?;
            }
            CliCommand::Inspect {
                path,
                response_len_limit,
            } => {
                let limit = response_len_limit.unwrap_or(cfg.response_len_limit);
                run_inspect(&path, limit)?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
