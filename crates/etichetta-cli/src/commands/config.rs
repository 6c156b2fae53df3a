//! Config command - inspect and initialize configuration files.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use etichetta_core::EtichettaConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show {
        /// Path to an existing config file (default: built-in defaults)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "etichetta.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { path } => {
            let config = match path {
                Some(p) => EtichettaConfig::from_file(&p)?,
                None => EtichettaConfig::default(),
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommand::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            EtichettaConfig::default().save(&path)?;
            println!(
                "{} Default configuration written to {}",
                style("✓").green(),
                path.display()
            );
            Ok(())
        }
    }
}
