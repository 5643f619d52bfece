// src/verify.rs
use std::collections::{HashMap, HashSet};

use log::{debug, trace};

#[cfg(feature = "regex")]
use regex::Regex;

use crate::command::Command;
use crate::error::ConfigError;

/// Checks the structural rules of a single node. The first failing rule wins.
///
/// A node with subcommands may not also declare arguments or flags, and may
/// not itself be a subcommand.
pub fn verify(command: &Command) -> Result<(), ConfigError> {
  trace!(
    "Verifying command '{}' (parent: {:?})",
    command.full_name(),
    command.parent_name()
  );
  if command.commands().is_empty() {
    return Ok(());
  }

  if !command.args().is_empty() || !command.flags().is_empty() {
    return Err(ConfigError::CommandsWithArgsOrFlags {
      full_name: command.full_name(),
    });
  }

  if !command.is_root() {
    return Err(ConfigError::NestedCommands {
      full_name: command.full_name(),
    });
  }

  Ok(())
}

/// Runs [`verify`] on every node of the tree, parents first, stopping at the
/// first failure.
pub fn verify_tree(root: &Command) -> Result<(), ConfigError> {
  let nodes = root.iter_tree();
  debug!("Verifying {} command(s) under '{}'", nodes.len(), root.full_name());
  nodes.into_iter().try_for_each(verify)
}

/// Non-fatal findings. Messages use the same color markup as [`ConfigError`].
pub fn lint(root: &Command) -> Vec<String> {
  let mut warnings = Vec::new();
  #[cfg(feature = "regex")]
  let name_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").ok();

  for command in root.iter_tree() {
    let full_name = command.full_name();

    // Sibling names collide once snake-cased into function names.
    let mut functions: HashMap<String, &str> = HashMap::new();
    for child in command.commands() {
      let function_name = child.function_name();
      if let Some(previous) = functions.get(function_name.as_str()) {
        warnings.push(format!(
          "The !txtgrn!{}!txtrst! and !txtgrn!{}!txtrst! subcommands of !txtgrn!{}!txtrst! both generate the !txtgrn!{}!txtrst! function.",
          previous,
          child.name(),
          full_name,
          function_name
        ));
      } else {
        functions.insert(function_name, child.name());
      }
    }

    // Names and shorts share one dispatch namespace. Name-vs-name clashes are
    // already reported above.
    let mut dispatch: HashMap<&str, (usize, &str, bool)> = HashMap::new();
    for (index, child) in command.commands().iter().enumerate() {
      let tokens = std::iter::once((child.name(), false))
        .chain(child.short().map(|short| (short, true)));
      for (token, is_short) in tokens {
        match dispatch.get(token) {
          Some(&(owner, owner_name, owner_is_short)) => {
            if owner != index && (is_short || owner_is_short) {
              warnings.push(format!(
                "The !txtgrn!{}!txtrst! alias of the !txtgrn!{}!txtrst! subcommand is already used by !txtgrn!{}!txtrst! in the !txtgrn!{}!txtrst! command.",
                token,
                child.name(),
                owner_name,
                full_name
              ));
            }
          }
          None => {
            dispatch.insert(token, (index, child.name(), is_short));
          }
        }
      }
    }

    if let Some(short) = command.short() {
      if short.chars().count() != 1 {
        warnings.push(format!(
          "The short alias !txtgrn!{}!txtrst! of the !txtgrn!{}!txtrst! command should be a single character.",
          short, full_name
        ));
      }
    }

    let mut seen_flags = HashSet::new();
    let mut seen_shorts = HashSet::new();
    for flag in command.flags() {
      if !seen_flags.insert(flag.name()) {
        warnings.push(format!(
          "The !txtgrn!{}!txtrst! command declares the !txtgrn!--{}!txtrst! flag more than once.",
          full_name,
          flag.name()
        ));
      }
      if let Some(short) = flag.short() {
        if short.chars().count() != 1 {
          warnings.push(format!(
            "The short alias !txtgrn!{}!txtrst! of the !txtgrn!--{}!txtrst! flag in the !txtgrn!{}!txtrst! command should be a single character.",
            short,
            flag.name(),
            full_name
          ));
        } else if !seen_shorts.insert(short) {
          warnings.push(format!(
            "The !txtgrn!{}!txtrst! command uses the short alias !txtgrn!-{}!txtrst! for more than one flag.",
            full_name, short
          ));
        }
      }
    }

    let mut optional_seen: Option<&str> = None;
    for arg in command.args() {
      match (arg.required(), optional_seen) {
        (true, Some(optional)) => warnings.push(format!(
          "In the !txtgrn!{}!txtrst! command, the required !txtgrn!{}!txtrst! argument comes after the optional !txtgrn!{}!txtrst! argument.",
          full_name,
          arg.name(),
          optional
        )),
        (false, None) => optional_seen = Some(arg.name()),
        _ => {}
      }
    }

    #[cfg(feature = "regex")]
    if let Some(pattern) = &name_pattern {
      let names = std::iter::once(command.name())
        .chain(command.args().iter().map(|a| a.name()))
        .chain(command.flags().iter().map(|f| f.name()));
      for name in names {
        if !pattern.is_match(name) {
          warnings.push(format!(
            "The name !txtgrn!{}!txtrst! in the !txtgrn!{}!txtrst! command is not a valid shell identifier.",
            name, full_name
          ));
        }
      }
    }
  }

  warnings
}

#[cfg(test)]
mod tests {
  use super::*;

  fn build(yaml: &str) -> Command {
    Command::root(serde_yaml::from_str(yaml).unwrap())
  }

  #[test]
  fn git_with_leaf_subcommands_passes() {
    let git = build("{name: git, commands: [{name: commit}, {name: status}]}");
    for node in git.iter_tree() {
      assert_eq!(verify(node), Ok(()));
    }
    assert_eq!(verify_tree(&git), Ok(()));
    assert_eq!(git.commands()[0].full_name(), "git commit");
  }

  #[test]
  fn commands_with_args_are_rejected() {
    let app = build("{name: app, args: [{name: file}], commands: [{name: run}]}");
    let err = verify(&app).unwrap_err();
    assert_eq!(
      err,
      ConfigError::CommandsWithArgsOrFlags {
        full_name: "app".to_string()
      }
    );
    assert!(err.to_string().contains("!txtgrn!app!txtrst!"));
    assert!(err
      .to_string()
      .contains("key cannot be at the same level as the !txtgrn!args!txtrst!"));
  }

  #[test]
  fn commands_with_flags_are_rejected() {
    let app = build("{name: app, flags: [{name: debug}], commands: [{name: run}]}");
    assert!(matches!(
      verify(&app),
      Err(ConfigError::CommandsWithArgsOrFlags { .. })
    ));
  }

  #[test]
  fn nested_subcommands_are_rejected_on_the_middle_node() {
    let git = build("{name: git, commands: [{name: remote, commands: [{name: add}]}]}");
    assert_eq!(verify(&git), Ok(()));

    let remote = &git.commands()[0];
    let err = verify(remote).unwrap_err();
    assert_eq!(
      err,
      ConfigError::NestedCommands {
        full_name: "git remote".to_string()
      }
    );
    assert_eq!(err.full_name(), "git remote");
    assert!(err.to_string().ends_with("Nested commands are not supported."));

    assert_eq!(verify(&remote.commands()[0]), Ok(()));
    assert_eq!(verify_tree(&git), Err(err));
  }

  #[test]
  fn conflict_rule_is_checked_before_nesting_rule() {
    let git = build(
      "{name: git, commands: [{name: remote, args: [{name: x}], commands: [{name: add}]}]}",
    );
    assert!(matches!(
      verify_tree(&git),
      Err(ConfigError::CommandsWithArgsOrFlags { ref full_name }) if full_name == "git remote"
    ));
  }

  #[test]
  fn leaves_with_args_and_flags_never_fail() {
    let git = build(
      "{name: git, commands: [{name: commit, args: [{name: path}], flags: [{name: amend}]}]}",
    );
    assert_eq!(verify_tree(&git), Ok(()));
    let standalone = build("{name: app, args: [{name: file, required: true}]}");
    assert_eq!(verify(&standalone), Ok(()));
  }

  #[test]
  fn lint_reports_suspicious_but_valid_definitions() {
    let tool = build(
      r#"
name: tool
commands:
  - name: run
    short: rn
    args:
      - {name: mode}
      - {name: target, required: true}
    flags:
      - {name: force, short: f}
      - {name: fast, short: f}
      - {name: force}
  - name: run
"#,
    );
    assert_eq!(verify_tree(&tool), Ok(()));

    let warnings = lint(&tool);
    assert!(warnings
      .iter()
      .any(|w| w.contains("!txtgrn!run!txtrst! and !txtgrn!run!txtrst! subcommands")));
    assert!(warnings.iter().any(|w| w.contains("!txtgrn!rn!txtrst!")));
    assert!(warnings.iter().any(|w| w.contains("!txtgrn!-f!txtrst! for more than one flag")));
    assert!(warnings.iter().any(|w| w.contains("!txtgrn!--force!txtrst! flag more than once")));
    assert!(warnings.iter().any(|w| w.contains("required !txtgrn!target!txtrst!")));
  }

  #[test]
  fn lint_reports_function_name_collisions() {
    let git = build("{name: git, commands: [{name: remote-add}, {name: remote_add}, {name: remoteAdd}]}");
    assert_eq!(verify_tree(&git), Ok(()));
    for child in git.commands() {
      assert_eq!(child.function_name(), "git_remote_add");
    }

    let warnings = lint(&git);
    assert_eq!(warnings.len(), 2, "{:?}", warnings);
    assert!(warnings[0].contains("!txtgrn!remote-add!txtrst! and !txtgrn!remote_add!txtrst!"));
    assert!(warnings[1].contains("!txtgrn!remote-add!txtrst! and !txtgrn!remoteAdd!txtrst!"));
    assert!(warnings.iter().all(|w| w.contains("!txtgrn!git_remote_add!txtrst! function")));
  }

  #[test]
  fn lint_reports_shared_dispatch_aliases() {
    let git = build(
      "{name: git, commands: [{name: status, short: s}, {name: stash, short: s}, {name: show, short: status}, {name: c, short: c}]}",
    );
    let warnings = lint(&git);
    assert!(warnings.iter().any(|w| w
      .contains("!txtgrn!s!txtrst! alias of the !txtgrn!stash!txtrst! subcommand is already used by !txtgrn!status!txtrst!")));
    assert!(warnings.iter().any(|w| w
      .contains("!txtgrn!status!txtrst! alias of the !txtgrn!show!txtrst! subcommand is already used by !txtgrn!status!txtrst!")));
    assert!(!warnings.iter().any(|w| w.contains("subcommand is already used by !txtgrn!c!txtrst!")));
  }

  #[test]
  fn lint_is_quiet_for_a_clean_tree() {
    let git = build("{name: git, commands: [{name: commit, flags: [{name: all, short: a}]}]}");
    assert!(lint(&git).is_empty());
  }

  #[cfg(feature = "regex")]
  #[test]
  fn lint_flags_names_that_are_not_identifiers() {
    let app = build("{name: app, args: [{name: 'my file'}]}");
    let warnings = lint(&app);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("!txtgrn!my file!txtrst!"));
  }
}
