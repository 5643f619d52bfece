// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shcraft",
    author,
    version,
    about = "Validates bash CLI definitions and derives their usage and naming plan.",
    long_about = None
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Directory holding the configuration and the command fragments
  #[arg(long, global = true)]
  #[clap(env = "SHCRAFT_SOURCE_DIR")]
  pub source_dir: Option<PathBuf>,

  /// Configuration file (defaults to shcraft.yml inside the source directory)
  #[arg(long, global = true)]
  #[clap(env = "SHCRAFT_CONFIG")]
  pub config: Option<PathBuf>,

  /// Print messages without colors
  #[arg(long, global = true)]
  pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Write a sample configuration and fragment stubs
  Init(InitArgs),
  /// Check the configuration for structural errors
  Validate,
  /// Print the derived usage, caption and naming plan
  Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
  /// Overwrite an existing configuration without asking
  #[arg(short, long)]
  pub force: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
  /// Only show this command (full name, e.g. "git commit")
  #[arg(short, long)]
  pub command: Option<String>,

  /// Include the loaded fragment of every leaf command
  #[arg(short, long)]
  pub fragments: bool,
}
