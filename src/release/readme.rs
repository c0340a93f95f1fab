//! Locating the README to update and inferring its markup dialect

use crate::core::error::{ReadmeError, ReadmeResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// README names searched in the working directory, in priority order
pub const DEFAULT_READMES: [&str; 2] = ["README.org", "README.md"];

/// Markup dialect of a README, inferred from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeFormat {
  /// `.md`
  Markdown,
  /// `.org`
  Org,
  /// Anything else; handled like org (no blank line between headings)
  Plain,
}

impl ReadmeFormat {
  /// Infer the format from the file extension (case-insensitive)
  pub fn from_path(path: &Path) -> Self {
    match path
      .extension()
      .and_then(|e| e.to_str())
      .map(|e| e.to_lowercase())
      .as_deref()
    {
      Some("md") => Self::Markdown,
      Some("org") => Self::Org,
      _ => Self::Plain,
    }
  }

  /// Text placed between the unreleased header and the new release header
  ///
  /// Markdown headings are conventionally separated by a blank line, org
  /// headings are not.
  pub fn separator(self, line_ending: &str) -> String {
    match self {
      Self::Markdown => line_ending.repeat(2),
      Self::Org | Self::Plain => line_ending.to_string(),
    }
  }
}

/// Resolve the README to operate on
///
/// An explicit path (relative to `root`) must exist. Without one, `root` is
/// searched for [`DEFAULT_READMES`] and the first hit wins.
pub fn locate_readme(explicit: Option<&Path>, root: &Path) -> ReadmeResult<PathBuf> {
  if let Some(path) = explicit {
    let resolved = root.join(path);
    if !resolved.exists() {
      return Err(ReadmeError::PathNotFound {
        path: path.to_path_buf(),
      });
    }
    debug!(path = %resolved.display(), "using explicit README");
    return Ok(resolved);
  }

  DEFAULT_READMES
    .iter()
    .map(|name| root.join(name))
    .find(|candidate| candidate.exists())
    .inspect(|found| debug!(path = %found.display(), "found default README"))
    .ok_or_else(|| ReadmeError::NoDefaultReadme { dir: root.to_path_buf() })
}

/// Pre-flight check of the README location, as a list of failure messages
///
/// An empty list means the README is usable.
pub fn validate(explicit: Option<&Path>, root: &Path) -> Vec<String> {
  match locate_readme(explicit, root) {
    Ok(_) => Vec::new(),
    Err(err) => vec![err.to_string()],
  }
}
