// src/utils.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use serde_yaml::Value;
use walkdir::WalkDir;

use crate::error::ShcraftError;

/// Suffix shared by every leaf command fragment file.
pub const FRAGMENT_SUFFIX: &str = "_command.sh";

/// Returns the first line of a help text, or "" when there is no help.
pub fn first_line(help: Option<&str>) -> &str {
  help.and_then(|text| text.lines().next()).unwrap_or("")
}

/// Converts a YAML scalar (string, number, boolean) into its string form.
/// `null` yields `None`; sequences and mappings are not valid defaults.
pub fn scalar_to_string(value: &Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::Bool(b) => Some(b.to_string()),
    Value::Number(n) => Some(n.to_string()),
    Value::String(s) => Some(s.clone()),
    Value::Tagged(tagged) => scalar_to_string(&tagged.value),
    other => {
      warn!("Ignoring non-scalar default value: {:?}", other);
      None
    }
  }
}

/// Walks `source_dir` and returns every `*_command.sh` file that is not in `expected`.
/// A missing source directory has no orphans.
pub fn find_orphan_fragments(
  source_dir: &Path,
  expected: &HashSet<PathBuf>,
) -> Result<Vec<PathBuf>, ShcraftError> {
  let mut orphans = Vec::new();
  if !source_dir.is_dir() {
    debug!(
      "Source directory {} does not exist, no fragments to scan.",
      source_dir.display()
    );
    return Ok(orphans);
  }

  for entry_result in WalkDir::new(source_dir).max_depth(1) {
    let entry = match entry_result {
      Ok(e) => e,
      Err(walk_err) if walk_err.depth() == 0 => {
        return Err(ShcraftError::WalkDirError {
          path: source_dir.to_path_buf(),
          source: walk_err,
        });
      }
      Err(walk_err) => {
        warn!("Error accessing path during fragment scan: {}", walk_err);
        continue;
      }
    };

    if !entry.file_type().is_file() {
      continue;
    }
    let is_fragment = entry
      .file_name()
      .to_str()
      .map_or(false, |name| name.ends_with(FRAGMENT_SUFFIX));
    if !is_fragment {
      continue;
    }

    trace!("Found fragment file: {}", entry.path().display());
    if !expected.contains(entry.path()) {
      orphans.push(entry.into_path());
    }
  }

  orphans.sort();
  Ok(orphans)
}
