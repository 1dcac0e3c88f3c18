//! CLI for the diskdl share-disk download client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use diskdl_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_config, run_get, run_resolve, GetArgs};

/// Top-level CLI for diskdl.
#[derive(Debug, Parser)]
#[command(name = "diskdl")]
#[command(about = "diskdl: download files shared on the network disk", long_about = None)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a shared file and save it locally.
    Get {
        /// Share identifier.
        share_id: String,
        /// Share password.
        #[arg(short, long, default_value = "")]
        password: String,
        /// Directory to save into (default: config `download_dir`, else current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Replace an existing file instead of picking a numbered name.
        #[arg(long)]
        overwrite: bool,
        /// Print the SHA-256 of the saved file.
        #[arg(long)]
        sha256: bool,
        /// Backend base URL, overriding the config file.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Resolve a recorded response offline and print the outcome (nothing is saved).
    Resolve {
        /// File with raw response header lines (status line optional).
        headers: PathBuf,
        /// Status code; defaults to the status line in the headers file, else 200.
        #[arg(long)]
        status: Option<u32>,
        /// File with the response body.
        #[arg(long, value_name = "FILE")]
        body: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Show the config file path and effective configuration.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Get {
                share_id,
                password,
                dir,
                overwrite,
                sha256,
                base_url,
            } => {
                let mut cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                if let Some(base_url) = base_url {
                    cfg.base_url = base_url;
                }
                let args = GetArgs {
                    share_id,
                    password,
                    dir,
                    overwrite,
                    sha256,
                };
                run_get(&cfg, args).await?;
            }
            CliCommand::Resolve {
                headers,
                status,
                body,
            } => run_resolve(&headers, status, body.as_deref())?,
            CliCommand::Checksum { path } => run_checksum(&path).await?,
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
