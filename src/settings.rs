// src/settings.rs
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::ShcraftError;
use crate::fragment::FragmentLoader;

pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_CONFIG_FILE: &str = "shcraft.yml";

/// Optional per-user defaults, read from `<config dir>/settings.yaml`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
  #[serde(default)]
  pub source_dir: Option<PathBuf>,
  /// File name of the configuration, relative to the source directory.
  #[serde(default)]
  pub config_file: Option<String>,
  #[serde(default)]
  pub color: Option<bool>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  pub source_dir: PathBuf,
  pub config_path: PathBuf,
  pub color: bool,
}

impl Settings {
  /// Order of preference for each value:
  /// 1. command-line flag
  /// 2. SHCRAFT_* environment variable (handled by clap's `env` attribute)
  /// 3. user settings file
  /// 4. built-in default
  pub fn resolve(cli: &Cli) -> Result<Self, ShcraftError> {
    let user = match user_settings_path() {
      Some(path) => load_user_settings(&path)?,
      None => UserSettings::default(),
    };
    Ok(Self::from_layers(
      cli.source_dir.clone(),
      cli.config.clone(),
      cli.no_color,
      user,
      io::stderr().is_terminal(),
    ))
  }

  pub fn from_layers(
    source_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    no_color: bool,
    user: UserSettings,
    is_terminal: bool,
  ) -> Self {
    let source_dir = source_dir
      .or(user.source_dir)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
    let config_path = config_path.unwrap_or_else(|| {
      source_dir.join(
        user
          .config_file
          .as_deref()
          .unwrap_or(DEFAULT_CONFIG_FILE),
      )
    });
    let color = !no_color && user.color.unwrap_or(true) && is_terminal;

    Settings {
      source_dir,
      config_path,
      color,
    }
  }

  pub fn fragment_loader(&self) -> FragmentLoader {
    FragmentLoader::new(&self.source_dir)
  }
}

/// Whether error output is colored: the resolved setting when there is one,
/// otherwise the `--no-color` flag and the terminal check alone.
pub fn report_color(settings: Option<&Settings>, no_color: bool, is_terminal: bool) -> bool {
  match settings {
    Some(settings) => settings.color,
    None => !no_color && is_terminal,
  }
}

fn user_settings_path() -> Option<PathBuf> {
  ProjectDirs::from("", "", "shcraft").map(|dirs| dirs.config_dir().join("settings.yaml"))
}

pub(crate) fn load_user_settings(settings_path: &Path) -> Result<UserSettings, ShcraftError> {
  if !settings_path.is_file() {
    debug!("No user settings at {}", settings_path.display());
    return Ok(UserSettings::default());
  }
  debug!("Reading user settings from {}", settings_path.display());
  let content = fs::read_to_string(settings_path)?;
  if content.trim().is_empty() {
    return Ok(UserSettings::default());
  }
  serde_yaml::from_str(&content).map_err(|e| ShcraftError::SettingsParseError {
    settings_path: settings_path.to_path_buf(),
    source: e,
  })
}
