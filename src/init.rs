// src/init.rs
use std::fs;
use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm};
use log::{debug, info, warn};

use crate::cli::InitArgs;
use crate::command::Command;
use crate::error::ShcraftError;
use crate::fragment::FragmentLoader;
use crate::settings::Settings;
use crate::validate::load_and_verify;

pub const SAMPLE_CONFIG: &str = r#"name: cli
help: Sample application
commands:
  - name: download
    short: d
    help: Download a file
    args:
      - name: source
        required: true
        help: URL to download from
      - name: target
        help: "Target filename (default: same as source)"
    flags:
      - name: force
        short: f
        help: Overwrite existing files

  - name: upload
    short: u
    help: Upload a file
    args:
      - name: source
        required: true
        help: File to upload
    flags:
      - name: user
        short: u
        arg: user
        required: true
        help: Username to use for logging in
      - name: password
        short: p
        arg: password
        help: Password to use for logging in
"#;

pub fn run_init(args: InitArgs, settings: &Settings) -> Result<(), ShcraftError> {
  info!("Running init command...");
  debug!("Args: {:?}, Settings: {:?}", args, settings);

  // --- 1. Sample configuration ---
  let config_path = &settings.config_path;
  let write_config = if !config_path.exists() || args.force {
    true
  } else {
    Confirm::with_theme(&ColorfulTheme::default())
      .with_prompt(format!(
        "'{}' already exists. Overwrite it with the sample?",
        config_path.display()
      ))
      .default(false)
      .interact()?
  };

  if write_config {
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }
    fs::write(config_path, SAMPLE_CONFIG)?;
    info!("Wrote sample configuration to {}", config_path.display());
  } else {
    info!("Keeping existing configuration {}", config_path.display());
  }

  // --- 2. Fragment stubs ---
  let root = load_and_verify(config_path)?;
  let created = write_fragment_stubs(&root, &settings.fragment_loader())?;
  info!("Created {} fragment stub(s).", created.len());
  Ok(())
}

/// Writes an `echo` stub for every leaf command whose fragment does not exist.
/// Existing fragments are never touched. Returns the created paths.
pub fn write_fragment_stubs(
  root: &Command,
  loader: &FragmentLoader,
) -> Result<Vec<PathBuf>, ShcraftError> {
  let mut created = Vec::new();
  for leaf in root.iter_tree().into_iter().filter(|c| c.commands().is_empty()) {
    let path = loader.resolve(&leaf.fragment_file());
    if path.exists() {
      debug!("Fragment {} already exists, skipping.", path.display());
      continue;
    }
    if !loader.source_dir().as_os_str().is_empty() {
      fs::create_dir_all(loader.source_dir())?;
    }

    let stub = format!(
      "echo \"# this file is located in '{}'\"\necho \"# code for '{}' goes here\"\n",
      path.display(),
      leaf.full_name()
    );
    fs::write(&path, stub).map_err(|e| {
      warn!("Could not create fragment stub {}: {}", path.display(), e);
      ShcraftError::Io(e)
    })?;
    info!("Created fragment stub {}", path.display());
    created.push(path);
  }
  Ok(created)
}
