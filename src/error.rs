// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Structural violations found while verifying a command node.
///
/// Messages carry color markup (`!txtgrn!...!txtrst!`); render them with
/// [`crate::markup::colorize`] before showing them to a user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  #[error(
    "Error in the !txtgrn!{full_name}!txtrst! command.\nThe !txtgrn!commands!txtrst! key cannot be at the same level as the !txtgrn!args!txtrst! or !txtgrn!flags!txtrst! keys."
  )]
  CommandsWithArgsOrFlags { full_name: String },

  #[error("Error in the !txtgrn!{full_name}!txtrst! command.\nNested commands are not supported.")]
  NestedCommands { full_name: String },
}

impl ConfigError {
  /// Full name of the command that failed verification.
  pub fn full_name(&self) -> &str {
    match self {
      ConfigError::CommandsWithArgsOrFlags { full_name } => full_name,
      ConfigError::NestedCommands { full_name } => full_name,
    }
  }
}

#[derive(Error, Debug)]
pub enum ShcraftError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("YAML Error: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("Could not read configuration '{config_path}': {source}")]
  ConfigReadError {
    config_path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Could not parse configuration '{config_path}': {source}")]
  ConfigParseError {
    config_path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error("Could not parse settings file '{settings_path}': {source}")]
  SettingsParseError {
    settings_path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error(transparent)]
  Configuration(#[from] ConfigError),

  #[error("No command named '{0}' in the configuration")]
  CommandNotFound(String),

  #[error("Error walking source directory '{path}': {source}")]
  WalkDirError {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error("User interaction failed: {0}")]
  DialoguerError(#[from] dialoguer::Error),
}
