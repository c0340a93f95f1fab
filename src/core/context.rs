//! Run context shared by the update pipeline
//!
//! Captures the two pieces of ambient state the tool depends on, the working
//! directory and today's date, once at startup so the rest of the code can
//! take them as plain values.

use crate::core::error::{ReadmeResult, ResultExt};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Working directory and clock for a single invocation
#[derive(Debug, Clone)]
pub struct RunContext {
  /// Directory searched for README.org / README.md and pyproject.toml
  pub root: PathBuf,
  /// Date stamped into the new release header
  pub today: NaiveDate,
}

impl RunContext {
  pub fn new(root: impl Into<PathBuf>, today: NaiveDate) -> Self {
    Self {
      root: root.into(),
      today,
    }
  }

  /// Build the context from the process working directory and the local clock
  pub fn current() -> ReadmeResult<Self> {
    let root = std::env::current_dir().with_context(|| "Failed to get current directory".to_string())?;
    Ok(Self::new(root, Local::now().date_naive()))
  }
}
