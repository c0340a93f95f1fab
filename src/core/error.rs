//! Error types for readme-release with contextual messages and exit codes
//!
//! Every failure the tool can hit is a variant of [`ReadmeError`]. Each one
//! knows its process exit code and, where there is something useful to say,
//! a help line pointing the user at the fix.

use crate::ui::style;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for readme-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad path, missing header, missing version)
  User = 1,
  /// System error (I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for readme-release
#[derive(Debug)]
pub enum ReadmeError {
  /// Explicit README path does not exist
  PathNotFound { path: PathBuf },

  /// No README.org / README.md in the working directory
  NoDefaultReadme { dir: PathBuf },

  /// README has no line carrying the "Unreleased" marker
  NoUnreleasedHeader { path: PathBuf },

  /// No explicit version and none could be read from project metadata
  MissingVersionSource(VersionSourceError),

  /// Project metadata exists but could not be parsed
  Metadata { path: PathBuf, message: String },

  /// I/O errors, optionally annotated with what was being attempted
  Io { source: io::Error, context: Option<String> },
}

impl ReadmeError {
  /// Add context to an I/O error; other errors already name what failed
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReadmeError::Io { source, context } => ReadmeError::Io {
        source,
        context: Some(context.map(|c| format!("{}: {}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReadmeError::Io { .. } => ExitCode::System,
      _ => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReadmeError::NoDefaultReadme { dir } => Some(format!(
        "Looked in {}. Pass the README path explicitly, e.g. `readme-release docs/README.md`.",
        dir.display()
      )),
      ReadmeError::NoUnreleasedHeader { .. } => {
        Some("Add a header such as `## Unreleased` above the changes you want to release.".to_string())
      }
      ReadmeError::MissingVersionSource(e) => e.help_message(),
      _ => None,
    }
  }
}

impl fmt::Display for ReadmeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReadmeError::PathNotFound { path } => write!(f, "Sorry, '{}' could not be found.", path.display()),
      ReadmeError::NoDefaultReadme { .. } => write!(
        f,
        "Sorry, couldn't find either a README.org or README.md in the top-level directory!"
      ),
      ReadmeError::NoUnreleasedHeader { path } => write!(
        f,
        "Sorry, couldn't find a header-line with 'Unreleased' in {}!",
        path.display()
      ),
      ReadmeError::MissingVersionSource(e) => write!(f, "{}", e),
      ReadmeError::Metadata { path, message } => {
        write!(f, "Sorry, couldn't parse {}: {}", path.display(), message)
      }
      ReadmeError::Io { source, context } => match context {
        Some(ctx) => write!(f, "{}: {}", ctx, source),
        None => write!(f, "I/O error: {}", source),
      },
    }
  }
}

impl std::error::Error for ReadmeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReadmeError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for ReadmeError {
  fn from(err: io::Error) -> Self {
    ReadmeError::Io {
      source: err,
      context: None,
    }
  }
}

impl From<VersionSourceError> for ReadmeError {
  fn from(err: VersionSourceError) -> Self {
    ReadmeError::MissingVersionSource(err)
  }
}

/// Why no version could be taken from the project metadata file
#[derive(Debug)]
pub enum VersionSourceError {
  /// Metadata file does not exist
  MetadataNotFound { path: PathBuf },

  /// Metadata file has no (or an empty) `tool.poetry.version`
  VersionMissing { path: PathBuf },
}

impl VersionSourceError {
  fn help_message(&self) -> Option<String> {
    match self {
      VersionSourceError::MetadataNotFound { .. } => Some(
        "Pass `--version <VERSION>`, or `--metadata <PATH>` to point at the project metadata file.".to_string(),
      ),
      VersionSourceError::VersionMissing { .. } => {
        Some("Set `version` under `[tool.poetry]`, or pass `--version <VERSION>`.".to_string())
      }
    }
  }
}

impl fmt::Display for VersionSourceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VersionSourceError::MetadataNotFound { path } => write!(
        f,
        "Sorry, if you don't pass an explicit version, {} must exist",
        path.display()
      ),
      VersionSourceError::VersionMissing { path } => write!(
        f,
        "Sorry, your {} file doesn't have a version, either set one or pass a version on the command-line.",
        path.display()
      ),
    }
  }
}

/// Result type alias for readme-release
pub type ReadmeResult<T> = Result<T, ReadmeError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReadmeResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReadmeError>,
{
  fn with_context<F>(self, f: F) -> ReadmeResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with colors and help text
pub fn print_error(error: &ReadmeError) {
  style::print_failure(&error.to_string());

  if let Some(help) = error.help_message() {
    eprintln!("{}", help_line(&help));
  }
}

fn help_line(help: &str) -> String {
  format!("💡 Help: {}\n", help)
}
