//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Release history with an Unreleased section above two shipped versions
pub const README_MD: &str = "
# Release History

## Unreleased
   - [[https://towardsdatascience.com/should-we-use-custom-exceptions-in-python-b4b4bca474ac][custom exceptions]]

## 1.9.10
   - open text open text open text open text open text open text open text.

## 1.9.09
   - open text open text open text open text open text open text open text.
";

/// Same history, nothing unreleased
pub const README_MD_NO_UNRELEASED: &str = "
# Release History

## 1.9.10
   - open text open text open text open text open text open text open text.

## 1.9.09
   - open text open text open text open text open text open text open text.
";

/// Org-mode release history
pub const README_ORG: &str = "* Release History
** Unreleased
   - changed this
   - changed that
** 1.9.10 - 2024-03-02
   - older change
";

/// A scratch project directory the binary runs in
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create an empty project directory
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the project root, creating parent directories
  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let file_path = self.path.join(path);
    if let Some(parent) = file_path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
  }

  /// Write a minimal poetry pyproject.toml carrying `version`
  pub fn write_pyproject(&self, version: &str) -> Result<()> {
    self.write_file(
      "pyproject.toml",
      &format!(
        r#"[tool.poetry]
name = "manage"
version = "{}"
description = "Project management tasks"

[tool.poetry.dependencies]
python = "^3.11"
"#,
        version
      ),
    )
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }

  /// Run the binary in the project directory
  pub fn run(&self, args: &[&str]) -> Result<Output> {
    run_readme_release_raw(&self.path, args)
  }
}

/// Today's date as stamped into new headers
pub fn today() -> String {
  chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Run readme-release without judging the exit status
pub fn run_readme_release_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_readme-release");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .env("NO_COLOR", "1")
    .output()
    .context("Failed to run readme-release")
}

/// Run readme-release, failing if it exits non-zero
pub fn run_readme_release(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_readme_release_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "readme-release failed: readme-release {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}
