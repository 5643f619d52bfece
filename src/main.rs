// src/main.rs
mod cli;
mod command;
mod config;
mod error;
mod fragment;
mod init;
mod inspect;
mod markup;
mod model;
mod settings;
mod utils;
mod validate;
mod verify;

use clap::Parser;
use cli::{Cli, Commands};
use error::ShcraftError;
use log::LevelFilter;
use settings::{report_color, Settings};
use std::io::{self, IsTerminal};
use std::process;

fn main() {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  let is_terminal = io::stderr().is_terminal();
  let settings = match Settings::resolve(&cli) {
    Ok(settings) => settings,
    Err(e) => fail(e, report_color(None, cli.no_color, is_terminal)),
  };
  log::debug!("Using source directory: {}", settings.source_dir.display());

  if let Err(e) = run(cli.command, &settings) {
    fail(e, report_color(Some(&settings), cli.no_color, is_terminal));
  }
}

fn run(command: Commands, settings: &Settings) -> Result<(), ShcraftError> {
  match command {
    Commands::Init(args) => init::run_init(args, settings),
    Commands::Validate => validate::run_validate(settings),
    Commands::Inspect(args) => inspect::run_inspect(args, settings),
  }
}

fn fail(e: ShcraftError, color: bool) -> ! {
  if let ShcraftError::Configuration(err) = &e {
    log::debug!("Aborted at the '{}' command", err.full_name());
  }
  eprintln!("{}", markup::colorize(&format!("!txtred!error:!txtrst! {}", e), color));
  process::exit(1);
}
