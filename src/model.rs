// src/model.rs
use crate::config::{ArgConfig, FlagConfig};
use crate::utils;

/// A positional parameter. Position in the owning command is its parse order.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
  options: ArgConfig,
}

impl Argument {
  pub fn new(options: ArgConfig) -> Self {
    Self { options }
  }

  pub fn name(&self) -> &str {
    &self.options.name
  }

  pub fn required(&self) -> bool {
    self.options.required
  }

  pub fn default_value(&self) -> Option<String> {
    self.options.default.as_ref().and_then(utils::scalar_to_string)
  }

  pub fn help(&self) -> Option<&str> {
    self.options.help.as_deref()
  }

  pub fn summary(&self) -> &str {
    utils::first_line(self.help())
  }

  /// `name` for a required argument, `[name]` for an optional one.
  pub fn usage_string(&self) -> String {
    if self.required() {
      self.name().to_string()
    } else {
      format!("[{}]", self.name())
    }
  }
}

/// A named option. Boolean unless it declares an `arg` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
  options: FlagConfig,
}

impl Flag {
  pub fn new(options: FlagConfig) -> Self {
    Self { options }
  }

  /// Long name, without the leading dashes.
  pub fn name(&self) -> &str {
    &self.options.name
  }

  pub fn short(&self) -> Option<&str> {
    self.options.short.as_deref()
  }

  pub fn required(&self) -> bool {
    self.options.required
  }

  pub fn default_value(&self) -> Option<String> {
    self.options.default.as_ref().and_then(utils::scalar_to_string)
  }

  pub fn help(&self) -> Option<&str> {
    self.options.help.as_deref()
  }

  pub fn summary(&self) -> &str {
    utils::first_line(self.help())
  }

  pub fn arg(&self) -> Option<&str> {
    self.options.arg.as_deref()
  }

  pub fn takes_value(&self) -> bool {
    self.options.arg.is_some()
  }

  /// Long form first, then the short form if there is one.
  pub fn aliases(&self) -> Vec<String> {
    let mut aliases = vec![format!("--{}", self.name())];
    if let Some(short) = self.short() {
      aliases.push(format!("-{}", short));
    }
    aliases
  }

  /// `--name, -s ARG`, omitting the parts the flag does not have.
  pub fn usage_string(&self) -> String {
    let mut usage = self.aliases().join(", ");
    if let Some(arg) = self.arg() {
      usage.push(' ');
      usage.push_str(&arg.to_uppercase());
    }
    usage
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn arg(yaml: &str) -> Argument {
    Argument::new(serde_yaml::from_str(yaml).unwrap())
  }

  fn flag(yaml: &str) -> Flag {
    Flag::new(serde_yaml::from_str(yaml).unwrap())
  }

  #[test]
  fn argument_usage_brackets_optional_arguments() {
    assert_eq!(arg("{name: file, required: true}").usage_string(), "file");
    assert_eq!(arg("{name: target}").usage_string(), "[target]");
  }

  #[test]
  fn argument_defaults_and_summary() {
    let port = arg("{name: port, default: 8080, help: \"Port to bind\\nMust be free\"}");
    assert!(!port.required());
    assert_eq!(port.default_value().as_deref(), Some("8080"));
    assert_eq!(port.summary(), "Port to bind");

    let bare = arg("{name: bare}");
    assert_eq!(bare.default_value(), None);
    assert_eq!(bare.summary(), "");
  }

  #[test]
  fn flag_aliases_put_the_long_form_first() {
    assert_eq!(flag("{name: verbose}").aliases(), vec!["--verbose"]);
    assert_eq!(flag("{name: verbose, short: v}").aliases(), vec!["--verbose", "-v"]);
  }

  #[test]
  fn flag_usage_includes_the_value_placeholder() {
    assert_eq!(flag("{name: verbose, short: v}").usage_string(), "--verbose, -v");
    assert_eq!(flag("{name: force}").usage_string(), "--force");

    let output = flag("{name: output, short: o, arg: path, default: out.txt}");
    assert!(output.takes_value());
    assert_eq!(output.usage_string(), "--output, -o PATH");
    assert_eq!(output.default_value().as_deref(), Some("out.txt"));
  }
}
