//! CLI for the nprov provisioning payload tool.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use nprov_core::config;
use std::path::PathBuf;

use commands::{run_build, run_checksum, run_completions, run_parse};

/// Top-level CLI for nprov.
#[derive(Debug, Parser)]
#[command(name = "nprov")]
#[command(about = "nprov: build and inspect NFC device-owner provisioning payloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the admin package and print its provisioning checksum.
    Checksum {
        /// Direct HTTP/HTTPS URL of the admin package.
        url: String,
    },

    /// Build an outgoing provisioning message and write its NDEF bytes.
    Build(BuildArgs),

    /// Parse a received message file and show its first record.
    Parse(ParseArgs),

    /// Generate a shell completion script on stdout.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Admin receiver component name (e.g. "com.example/.AdminReceiver").
    #[arg(long)]
    pub admin: String,

    /// URL the receiving device downloads the admin package from.
    #[arg(long)]
    pub url: String,

    /// Use this checksum instead of fetching the package.
    #[arg(long)]
    pub checksum: Option<String>,

    /// Wi-Fi SSID field. The payload currently carries the fixed value
    /// "AndroidAP" regardless; the entered value is logged.
    #[arg(long, default_value = "")]
    pub wifi_ssid: String,

    /// Wi-Fi password field. Same fixed-value substitution as the SSID.
    #[arg(long, default_value = "")]
    pub wifi_password: String,

    /// Wi-Fi security type; defaults to the configured value.
    #[arg(long)]
    pub wifi_security: Option<String>,

    /// Output file for the encoded NDEF message.
    #[arg(long, default_value = "provisioning.ndef")]
    pub out: PathBuf,

    /// Skip the diagnostic payload dump file.
    #[arg(long)]
    pub no_dump: bool,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File holding the received NDEF message bytes.
    pub file: PathBuf,

    /// Decode the payload's property pairs instead of showing raw text.
    #[arg(long)]
    pub decode: bool,

    /// Show the payload as lowercase hex instead of text.
    #[arg(long, conflicts_with = "decode")]
    pub hex: bool,

    /// Emit JSON.
    #[arg(long)]
    pub json: bool,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Checksum { url } => run_checksum(&cfg, &url).await?,
            CliCommand::Build(args) => run_build(&cfg, args).await?,
            CliCommand::Parse(args) => run_parse(args)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
