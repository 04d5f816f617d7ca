//! Blinc variants CLI
//!
//! Resolve variant configs into class strings from the command line.

mod config;

use anyhow::Result;
use blinc_variants::{dedupe_with, ComponentPreset, DedupePolicy, VariantConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, render, summarize, SelectionArgs};

#[derive(Parser)]
#[command(name = "blinc-variants")]
#[command(about = "Resolve Blinc component variants into class strings")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a variant config file
    Resolve {
        /// Variant config file (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        config: PathBuf,

        #[command(flatten)]
        selection: SelectionFlags,

        /// Remove repeated tokens from the output
        #[arg(long)]
        dedupe: bool,
    },

    /// Resolve a built-in component preset
    Preset {
        /// Preset id (button, badge, alert)
        id: String,

        #[command(flatten)]
        selection: SelectionFlags,
    },

    /// Merge class strings, dropping repeated tokens
    Dedupe {
        /// Keep the last occurrence of each token instead of the first
        #[arg(long)]
        last_wins: bool,

        inputs: Vec<String>,
    },

    /// List the axes, values and defaults of a variant config
    Axes {
        #[arg(short, long)]
        config: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SelectionFlags {
    /// Select a value: `axis=value` (repeatable)
    #[arg(short, long = "set", value_name = "AXIS=VALUE")]
    set: Vec<String>,

    /// Explicitly select nothing for an axis, suppressing its default (repeatable)
    #[arg(long = "unset", value_name = "AXIS")]
    unset: Vec<String>,

    /// Extra tokens appended after variant tokens
    #[arg(long)]
    class: Option<String>,

    /// Alias slot for extra tokens; ignored when --class is given
    #[arg(long)]
    class_name: Option<String>,
}

impl SelectionFlags {
    fn args(&self) -> SelectionArgs<'_> {
        SelectionArgs {
            set: &self.set,
            unset: &self.unset,
            class: self.class.as_deref(),
            class_name: self.class_name.as_deref(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            config,
            selection,
            dedupe,
        } => cmd_resolve(&load_config(&config)?, &selection, dedupe),
        Commands::Preset { id, selection } => {
            let Some(preset) = ComponentPreset::from_id(&id) else {
                let known: Vec<&str> = ComponentPreset::all().iter().map(|p| p.id()).collect();
                anyhow::bail!("Unknown preset `{}`. Available: {}", id, known.join(", "));
            };
            tracing::debug!("resolving preset {}", preset);
            cmd_resolve(&preset.config(), &selection, false)
        }
        Commands::Dedupe { last_wins, inputs } => {
            let policy = if last_wins {
                DedupePolicy::LastWins
            } else {
                DedupePolicy::FirstWins
            };
            println!("{}", dedupe_with(policy, &inputs));
            Ok(())
        }
        Commands::Axes { config, json } => cmd_axes(&load_config(&config)?, json),
    }
}

fn cmd_resolve(config: &VariantConfig, flags: &SelectionFlags, dedupe: bool) -> Result<()> {
    let selection = flags.args().to_selection()?;
    println!("{}", render(config, &selection, dedupe));
    Ok(())
}

fn cmd_axes(config: &VariantConfig, json: bool) -> Result<()> {
    let summary = summarize(config);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if !config.base().is_empty() {
        println!("base: {}", config.base());
    }
    for axis in &summary {
        match &axis.default {
            Some(default) => println!("{}: {} (default: {})", axis.name, axis.values.join(", "), default),
            None => println!("{}: {}", axis.name, axis.values.join(", ")),
        }
    }
    println!("compound rules: {}", config.compound_rules().len());

    if let Err(e) = config.validate() {
        tracing::warn!("{e}");
    }
    Ok(())
}
