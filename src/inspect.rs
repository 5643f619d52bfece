// src/inspect.rs
use log::{debug, info};
use serde::Serialize;

use crate::cli::InspectArgs;
use crate::command::Command;
use crate::error::ShcraftError;
use crate::fragment::FragmentLoader;
use crate::model::{Argument, Flag};
use crate::settings::Settings;
use crate::validate::load_and_verify;

/// The strings a renderer needs for one command, in render order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandView {
  pub full_name: String,
  pub function_name: String,
  pub caption: String,
  pub usage: String,
  pub aliases: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub command_names: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub required_args: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub required_flags: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub args: Vec<ArgView>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub flags: Vec<FlagView>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fragment: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<CommandView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgView {
  pub name: String,
  pub usage: String,
  pub required: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<String>,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagView {
  pub name: String,
  pub usage: String,
  pub aliases: Vec<String>,
  pub required: bool,
  pub takes_value: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<String>,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub summary: String,
}

pub fn run_inspect(args: InspectArgs, settings: &Settings) -> Result<(), ShcraftError> {
  info!("Running inspect command...");
  debug!("Args: {:?}", args);

  let root = load_and_verify(&settings.config_path)?;
  let target = match &args.command {
    Some(full_name) => root
      .find(full_name)
      .ok_or_else(|| ShcraftError::CommandNotFound(full_name.clone()))?,
    None => &root,
  };

  let loader = args.fragments.then(|| settings.fragment_loader());
  let view = command_view(target, loader.as_ref());
  print!("{}", serde_yaml::to_string(&view)?);
  Ok(())
}

/// Builds the view of `command` and its subtree. Fragments are loaded for leaf
/// commands only, and only when a loader is given.
pub fn command_view(command: &Command, loader: Option<&FragmentLoader>) -> CommandView {
  let fragment = match loader {
    Some(loader) if command.commands().is_empty() => {
      Some(loader.load_user_file(&command.fragment_file()))
    }
    _ => None,
  };

  CommandView {
    full_name: command.full_name(),
    function_name: command.function_name(),
    caption: command.caption_string(),
    usage: command.usage_string(),
    aliases: command.aliases().into_iter().map(String::from).collect(),
    command_names: command.command_names().into_iter().map(String::from).collect(),
    required_args: command
      .required_args()
      .into_iter()
      .map(|a| a.name().to_string())
      .collect(),
    required_flags: command
      .required_flags()
      .into_iter()
      .map(|f| f.name().to_string())
      .collect(),
    args: command.args().iter().map(arg_view).collect(),
    flags: command.flags().iter().map(flag_view).collect(),
    fragment,
    commands: command
      .commands()
      .iter()
      .map(|child| command_view(child, loader))
      .collect(),
  }
}

fn arg_view(arg: &Argument) -> ArgView {
  ArgView {
    name: arg.name().to_string(),
    usage: arg.usage_string(),
    required: arg.required(),
    default: arg.default_value(),
    summary: arg.summary().to_string(),
  }
}

fn flag_view(flag: &Flag) -> FlagView {
  FlagView {
    name: flag.name().to_string(),
    usage: flag.usage_string(),
    aliases: flag.aliases(),
    required: flag.required(),
    takes_value: flag.takes_value(),
    default: flag.default_value(),
    summary: flag.summary().to_string(),
  }
}
