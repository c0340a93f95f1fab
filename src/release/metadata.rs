//! Resolving the version to release
//!
//! An explicit `--version` always wins. Otherwise the version comes from
//! `tool.poetry.version` in the project's pyproject.toml; no other schema is
//! consulted.

use crate::core::error::{ReadmeError, ReadmeResult, ResultExt, VersionSourceError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default project metadata file, relative to the working directory
pub const METADATA_FILE: &str = "pyproject.toml";

/// The slice of pyproject.toml we care about
#[derive(Debug, Default, Deserialize)]
struct PyProject {
  #[serde(default)]
  tool: Tool,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
  #[serde(default)]
  poetry: Poetry,
}

#[derive(Debug, Default, Deserialize)]
struct Poetry {
  version: Option<String>,
}

/// Read `tool.poetry.version` from a metadata file
pub fn read_project_version(metadata_path: &Path) -> ReadmeResult<String> {
  if !metadata_path.exists() {
    return Err(
      VersionSourceError::MetadataNotFound {
        path: metadata_path.to_path_buf(),
      }
      .into(),
    );
  }

  let content = std::fs::read_to_string(metadata_path)
    .with_context(|| format!("Failed to read {}", metadata_path.display()))?;

  let project: PyProject = toml_edit::de::from_str(&content).map_err(|e| ReadmeError::Metadata {
    path: metadata_path.to_path_buf(),
    message: e.to_string(),
  })?;

  match project.tool.poetry.version {
    Some(version) if !version.is_empty() => {
      debug!(path = %metadata_path.display(), %version, "read version from project metadata");
      Ok(version)
    }
    _ => Err(
      VersionSourceError::VersionMissing {
        path: metadata_path.to_path_buf(),
      }
      .into(),
    ),
  }
}

/// Pick the version to stamp: `explicit` verbatim if non-empty, else the metadata file's
pub fn resolve_version(explicit: Option<&str>, metadata_path: &Path) -> ReadmeResult<String> {
  if let Some(version) = explicit.filter(|v| !v.is_empty()) {
    debug!(%version, "using explicit version");
    return Ok(version.to_string());
  }

  read_project_version(metadata_path)
}
