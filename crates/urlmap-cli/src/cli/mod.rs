//! CLI for the urlmap namespace registry.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use urlmap_core::config::{self, UrlmapConfig};
use urlmap_core::{Builtin, MapFormat, UrlMap};

use commands::{
    run_check, run_completions, run_export, run_list, run_lookup, run_man, run_resolve,
};

/// Top-level CLI for urlmap.
#[derive(Debug, Parser)]
#[command(name = "urlmap")]
#[command(about = "urlmap: resolve documentation namespaces to base URLs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the url map comes from. Unset options fall back to the config file.
#[derive(Debug, Default, clap::Args)]
pub struct SourceArgs {
    /// Url map file (.json, .js or .toml). Repeatable; replaces the config's map list.
    #[arg(long = "map", value_name = "FILE", global = true)]
    pub maps: Vec<PathBuf>,

    /// Built-in table to start from (glib, girepository).
    #[arg(long, value_name = "NAME", global = true, conflicts_with = "no_builtin")]
    pub builtin: Option<Builtin>,

    /// Do not load any built-in table.
    #[arg(long, global = true)]
    pub no_builtin: bool,
}

impl SourceArgs {
    /// Apply command-line overrides on top of the config file.
    pub fn apply(&self, mut cfg: UrlmapConfig) -> UrlmapConfig {
        if self.no_builtin {
            cfg.builtin = None;
        } else if let Some(b) = self.builtin {
            cfg.builtin = Some(b);
        }
        if !self.maps.is_empty() {
            cfg.maps = self.maps.clone();
        }
        cfg
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the base URL of a namespace.
    Lookup {
        /// Namespace identifier, e.g. `Gio`.
        namespace: String,
    },

    /// Print the full URL of a symbol page under a namespace.
    Resolve {
        /// Namespace identifier, e.g. `Gio`.
        namespace: String,
        /// Path relative to the namespace's base URL, e.g. `iface.File.html`.
        symbol_path: String,
    },

    /// List all namespaces and their base URLs in load order.
    List,

    /// Validate url map files without merging them.
    Check {
        /// Files to validate.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Write the loaded url map in another format.
    Export {
        /// Output format.
        #[arg(long, default_value = "js", value_name = "FORMAT")]
        format: MapFormat,
        /// Write to a file instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Lookup { namespace } => {
                let map = load_map(&cli.sources)?;
                run_lookup(&map, &namespace, &mut out)?;
            }
            CliCommand::Resolve {
                namespace,
                symbol_path,
            } => {
                let map = load_map(&cli.sources)?;
                run_resolve(&map, &namespace, &symbol_path, &mut out)?;
            }
            CliCommand::List => {
                let map = load_map(&cli.sources)?;
                run_list(&map, &mut out)?;
            }
            CliCommand::Check { paths } => run_check(&paths, &mut out)?,
            CliCommand::Export { format, output } => {
                let map = load_map(&cli.sources)?;
                run_export(&map, format, output.as_deref(), &mut out)?;
            }
            CliCommand::Completions { shell } => run_completions(shell, &mut out),
            CliCommand::Man => run_man(&mut out)?,
        }

        Ok(())
    }
}

fn load_map(sources: &SourceArgs) -> Result<UrlMap> {
    let cfg = sources.apply(config::load_or_init()?);
    tracing::debug!("effective config: {:?}", cfg);
    cfg.load_map()
}

#[cfg(test)]
mod tests;
