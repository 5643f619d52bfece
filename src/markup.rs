// src/markup.rs

// Color tokens look like `!txtgrn!`: a style prefix followed by a color code.
const STYLES: [(&str, u8); 3] = [("txt", 0), ("bld", 1), ("und", 4)];
const COLORS: [&str; 8] = ["blk", "red", "grn", "ylw", "blu", "pur", "cyn", "wht"];
const RESET_TOKEN: &str = "!txtrst!";
const RESET_CODE: &str = "\x1b[0m";

/// Replaces color markup with ANSI escapes, or removes it when `enabled` is false.
pub fn colorize(text: &str, enabled: bool) -> String {
  let mut result = text.replace(RESET_TOKEN, if enabled { RESET_CODE } else { "" });
  for (style, attr) in STYLES {
    for (index, color) in COLORS.iter().enumerate() {
      let token = format!("!{}{}!", style, color);
      if !result.contains(&token) {
        continue;
      }
      let code = if enabled {
        format!("\x1b[{};3{}m", attr, index)
      } else {
        String::new()
      };
      result = result.replace(&token, &code);
    }
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_markup_without_color() {
    assert_eq!(
      colorize("Error in the !txtgrn!git remote!txtrst! command.", false),
      "Error in the git remote command."
    );
  }

  #[test]
  fn renders_ansi_escapes_with_color() {
    assert_eq!(
      colorize("!txtgrn!ok!txtrst! !bldred!no!txtrst! !undblu!u", true),
      "\x1b[0;32mok\x1b[0m \x1b[1;31mno\x1b[0m \x1b[4;34mu"
    );
  }

  #[test]
  fn leaves_unknown_tokens_alone() {
    assert_eq!(colorize("wow!txtfoo! and !", true), "wow!txtfoo! and !");
  }
}
