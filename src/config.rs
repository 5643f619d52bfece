// src/config.rs
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::ShcraftError;

// Unknown keys are ignored on every mapping below.

/// Raw attribute mapping for one command node, as found in the configuration file.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CommandConfig {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub short: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub help: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub args: Vec<ArgConfig>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub flags: Vec<FlagConfig>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<CommandConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ArgConfig {
  pub name: String,
  #[serde(default)]
  pub required: bool,
  /// Any YAML scalar; exposed as a string by the model.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub help: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct FlagConfig {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub short: Option<String>,
  #[serde(default)]
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub help: Option<String>,
  /// Placeholder name of the flag's value. Absent for boolean flags.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub arg: Option<String>,
}

pub(crate) fn read_and_parse_config(config_path: &Path) -> Result<CommandConfig, ShcraftError> {
  let content = fs::read_to_string(config_path).map_err(|e| ShcraftError::ConfigReadError {
    config_path: config_path.to_path_buf(),
    source: e,
  })?;
  serde_yaml::from_str(&content).map_err(|e| ShcraftError::ConfigParseError {
    config_path: config_path.to_path_buf(),
    source: e,
  })
}
