// src/validate.rs
use std::collections::HashSet;
use std::path::Path;

use log::{debug, info, warn};

use crate::command::Command;
use crate::config::read_and_parse_config;
use crate::error::ShcraftError;
use crate::markup;
use crate::settings::Settings;
use crate::utils;
use crate::verify;

pub fn run_validate(settings: &Settings) -> Result<(), ShcraftError> {
  info!(
    "Validating configuration {}...",
    settings.config_path.display()
  );
  debug!("Settings: {:?}", settings);

  // --- 1. Structure (fatal) ---
  let root = load_and_verify(&settings.config_path)?;
  let node_count = root.iter_tree().len();

  // --- 2. Lint (warnings only) ---
  let mut warning_count = 0;
  for warning in verify::lint(&root) {
    warn!("{}", markup::colorize(&warning, settings.color));
    warning_count += 1;
  }

  // --- 3. Fragments ---
  let loader = settings.fragment_loader();
  let mut expected = HashSet::new();
  let mut missing_count = 0;
  for leaf in root.iter_tree().into_iter().filter(|c| c.commands().is_empty()) {
    let fragment = loader.load(&leaf.fragment_file());
    if fragment.is_missing() {
      debug!("No fragment for the '{}' command", leaf.full_name());
      missing_count += 1;
    }
    expected.insert(fragment.path().to_path_buf());
  }
  if missing_count > 0 {
    info!(
      "{} fragment(s) missing; run `shcraft init` to create stubs.",
      missing_count
    );
    warning_count += missing_count;
  }

  for orphan in utils::find_orphan_fragments(&settings.source_dir, &expected)? {
    warn!(
      "Fragment {} does not belong to any command.",
      orphan.display()
    );
    warning_count += 1;
  }

  info!(
    "✅ Configuration is valid: {} command(s), {} warning(s).",
    node_count, warning_count
  );
  Ok(())
}

/// Reads the configuration, builds the command tree and verifies every node.
pub(crate) fn load_and_verify(config_path: &Path) -> Result<Command, ShcraftError> {
  let config = read_and_parse_config(config_path)?;
  let root = Command::root(config);
  verify::verify_tree(&root)?;
  debug!("Command tree for '{}' verified.", root.full_name());
  Ok(root)
}
