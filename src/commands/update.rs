//! The update command: stamp the README's unreleased section with a version
//!
//! Exit points:
//! 1. no unreleased header → error, README untouched
//! 2. version already in README → success, README untouched
//! 3. otherwise → success, README rewritten (unless dry-run)

use crate::core::context::RunContext;
use crate::core::error::{ReadmeError, ReadmeResult, ResultExt};
use crate::release::{ReadmeFormat, ReleaseHeaderUpdater, UpdateOutcome, locate_readme, resolve_version};
use crate::ui::style::print_success;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the update command
#[derive(Debug, Clone)]
pub struct UpdateArgs {
  /// README to update (default: README.org, then README.md in the working directory)
  pub readme: Option<PathBuf>,
  /// Version overriding the one in the metadata file
  pub version: Option<String>,
  /// Metadata file, relative to the working directory
  pub metadata: PathBuf,
  /// Report the new header without writing it
  pub dry_run: bool,
}

/// Run the update command
pub fn run_update(ctx: &RunContext, args: UpdateArgs) -> ReadmeResult<()> {
  let readme = locate_readme(args.readme.as_deref(), &ctx.root)?;
  let version = resolve_version(args.version.as_deref(), &ctx.root.join(&args.metadata))?;

  let contents =
    std::fs::read_to_string(&readme).with_context(|| format!("Failed to read {}", readme.display()))?;

  let format = ReadmeFormat::from_path(&readme);
  debug!(path = %readme.display(), ?format, %version, "updating README");

  match ReleaseHeaderUpdater::new(&version, format, ctx.today).apply(&contents) {
    UpdateOutcome::HeaderNotFound => Err(ReadmeError::NoUnreleasedHeader { path: readme }),
    UpdateOutcome::AlreadyPresent => {
      print_success(&format!("Already had version {} in README; Nothing done!", version));
      Ok(())
    }
    UpdateOutcome::Inserted { header, contents } => {
      let name = readme
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| readme.display().to_string());

      if args.dry_run {
        print_success(&format!("🔍 Would update {} version to: '{}' (dry-run, nothing written)", name, header));
        return Ok(());
      }

      print_success(&format!("Running update on {} version to: '{}'", name, header));
      std::fs::write(&readme, contents).with_context(|| format!("Failed to write {}", readme.display()))?;
      Ok(())
    }
  }
}
