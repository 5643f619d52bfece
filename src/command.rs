// src/command.rs
use heck::ToSnakeCase;

use crate::config::CommandConfig;
use crate::model::{Argument, Flag};
use crate::utils;

/// One node of the command tree.
///
/// A command owns its arguments, flags and subcommands. The link back to its
/// parent is a snapshot of the parent's full name taken at construction, not a
/// reference, so the tree has a single owner per node and no cycles.
///
/// Every derived accessor is a pure function of the node, which never changes
/// after [`Command::new`] returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
  name: String,
  short: Option<String>,
  help: Option<String>,
  parent_name: Option<String>,
  args: Vec<Argument>,
  flags: Vec<Flag>,
  commands: Vec<Command>,
}

impl Command {
  /// Builds the node and, top-down, all of its descendants.
  /// An empty `parent_name` is treated as no parent.
  pub fn new(config: CommandConfig, parent_name: Option<String>) -> Self {
    let CommandConfig {
      name,
      short,
      help,
      args,
      flags,
      commands,
    } = config;

    let mut command = Command {
      name,
      short,
      help,
      parent_name: parent_name.filter(|p| !p.is_empty()),
      args: args.into_iter().map(Argument::new).collect(),
      flags: flags.into_iter().map(Flag::new).collect(),
      commands: Vec::new(),
    };

    let full_name = command.full_name();
    command.commands = commands
      .into_iter()
      .map(|child| Command::new(child, Some(full_name.clone())))
      .collect();
    command
  }

  /// Builds a root command (no parent).
  pub fn root(config: CommandConfig) -> Self {
    Self::new(config, None)
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn short(&self) -> Option<&str> {
    self.short.as_deref()
  }

  pub fn help(&self) -> Option<&str> {
    self.help.as_deref()
  }

  pub fn parent_name(&self) -> Option<&str> {
    self.parent_name.as_deref()
  }

  pub fn is_root(&self) -> bool {
    self.parent_name.is_none()
  }

  pub fn args(&self) -> &[Argument] {
    &self.args
  }

  pub fn flags(&self) -> &[Flag] {
    &self.flags
  }

  pub fn commands(&self) -> &[Command] {
    &self.commands
  }

  /// `[name]`, or `[name, short]` when a short alias is set.
  pub fn aliases(&self) -> Vec<&str> {
    let mut aliases = vec![self.name()];
    if let Some(short) = self.short() {
      aliases.push(short);
    }
    aliases
  }

  /// The name prefixed by the parent's full name, separated by one space.
  pub fn full_name(&self) -> String {
    match &self.parent_name {
      Some(parent) => format!("{} {}", parent, self.name),
      None => self.name.clone(),
    }
  }

  /// Identifier used for the generated functions of this command.
  pub fn function_name(&self) -> String {
    self.full_name().to_snake_case()
  }

  /// Fragment file holding the user code of this command.
  pub fn fragment_file(&self) -> String {
    format!("{}{}", self.function_name(), utils::FRAGMENT_SUFFIX)
  }

  /// First line of the help text, "" without help.
  pub fn summary(&self) -> &str {
    utils::first_line(self.help())
  }

  /// Headline: `"{full_name} - {summary}"` when help is present.
  pub fn caption_string(&self) -> String {
    if self.help.is_some() {
      format!("{} - {}", self.full_name(), self.summary())
    } else {
      self.full_name()
    }
  }

  pub fn command_names(&self) -> Vec<&str> {
    self.commands.iter().map(|c| c.name()).collect()
  }

  /// Usage pattern: full name, `[command]` if there are subcommands, each
  /// argument in order, then `[options]`. The renderer embeds it verbatim.
  pub fn usage_string(&self) -> String {
    let mut result = vec![self.full_name()];
    if !self.commands.is_empty() {
      result.push("[command]".to_string());
    }
    for arg in &self.args {
      result.push(arg.usage_string());
    }
    result.push("[options]".to_string());
    result.join(" ")
  }

  pub fn required_args(&self) -> Vec<&Argument> {
    self.args.iter().filter(|a| a.required()).collect()
  }

  pub fn required_flags(&self) -> Vec<&Flag> {
    self.flags.iter().filter(|f| f.required()).collect()
  }

  /// This command and every descendant, depth-first, parents before children.
  pub fn iter_tree(&self) -> Vec<&Command> {
    let mut nodes = vec![self];
    for child in &self.commands {
      nodes.extend(child.iter_tree());
    }
    nodes
  }

  /// Looks up a node of this subtree by its full name.
  pub fn find(&self, full_name: &str) -> Option<&Command> {
    self
      .iter_tree()
      .into_iter()
      .find(|c| c.full_name() == full_name)
  }
}
