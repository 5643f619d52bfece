// src/fragment.rs
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Body emitted in place of a fragment that could not be read.
pub const MISSING_FRAGMENT: &str = "# error: cannot load file";

/// Outcome of loading a user code fragment. Missing files are a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
  Loaded { path: PathBuf, content: String },
  Missing { path: PathBuf },
}

impl Fragment {
  pub fn path(&self) -> &Path {
    match self {
      Fragment::Loaded { path, .. } | Fragment::Missing { path } => path,
    }
  }

  pub fn is_missing(&self) -> bool {
    matches!(self, Fragment::Missing { .. })
  }
}

/// Renders as a provenance comment line followed by the content or the
/// missing-file diagnostic.
impl fmt::Display for Fragment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Fragment::Loaded { path, content } => write!(f, "# :{}\n{}", path.display(), content),
      Fragment::Missing { path } => write!(f, "# :{}\n{}", path.display(), MISSING_FRAGMENT),
    }
  }
}

/// Resolves fragment references against the source directory.
/// Every call reads from disk; nothing is cached.
#[derive(Debug, Clone)]
pub struct FragmentLoader {
  source_dir: PathBuf,
}

impl FragmentLoader {
  pub fn new(source_dir: impl Into<PathBuf>) -> Self {
    Self {
      source_dir: source_dir.into(),
    }
  }

  pub fn source_dir(&self) -> &Path {
    &self.source_dir
  }

  pub fn resolve(&self, file: &str) -> PathBuf {
    self.source_dir.join(file)
  }

  pub fn load(&self, file: &str) -> Fragment {
    let path = self.resolve(file);
    match fs::read(&path) {
      Ok(bytes) => {
        debug!("Loaded fragment {}", path.display());
        let content = match String::from_utf8(bytes) {
          Ok(content) => content,
          Err(e) => {
            warn!("Fragment {} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
          }
        };
        Fragment::Loaded { path, content }
      }
      Err(e) => {
        warn!("Cannot load fragment {}: {}", path.display(), e);
        Fragment::Missing { path }
      }
    }
  }

  /// The rendered form of [`FragmentLoader::load`], ready to splice into output.
  pub fn load_user_file(&self, file: &str) -> String {
    self.load(file).to_string()
  }
}
