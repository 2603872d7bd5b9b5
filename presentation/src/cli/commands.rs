//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for motordoc
#[derive(Parser, Debug)]
#[command(name = "motordoc")]
#[command(author, version, about = "Vehicle diagnostic assistant client")]
#[command(long_about = r#"
motordoc talks to a vehicle diagnostic API: identify your vehicle from a
description or a photo, then ask for structured diagnoses of its problems.

Diagnosis needs an identified vehicle first. One-shot diagnose commands take
--vehicle to identify inline; the shell keeps the vehicle across commands.

Configuration files are loaded from (in priority order):
1. --config <path>              Explicit config file
2. ./motordoc.toml              Project-level config
3. ~/.config/motordoc/config.toml   Global config

Examples:
  motordoc identify "2015 Honda Civic"
  motordoc identify --image vin-sticker.jpg
  motordoc diagnose "engine stalls at idle" --vehicle "2015 Honda Civic"
  motordoc diagnose "what is leaking here" --vehicle "2015 Honda Civic" --image leak.jpg
  motordoc shell
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Identify a vehicle from a text description or a photo
    Identify {
        /// Free-form description, e.g. "2015 Honda Civic"
        query: Option<String>,

        /// Photo of the vehicle's VIN sticker
        #[arg(short, long, value_name = "PATH", conflicts_with = "query")]
        image: Option<PathBuf>,
    },

    /// Diagnose a problem for an identified vehicle
    Diagnose {
        /// Description of the problem, e.g. "engine stalls at idle"
        description: String,

        /// Identify the vehicle from this description first
        #[arg(long, value_name = "QUERY")]
        vehicle: String,

        /// Photo of the problem area, for an image diagnosis
        #[arg(short, long, value_name = "PATH")]
        image: Option<PathBuf>,
    },

    /// Check that the diagnostic API is reachable
    Health,

    /// Interactive session (the default when no command is given)
    Shell,
}
