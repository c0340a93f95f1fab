//! Release header stamping for changelog-style READMEs
//!
//! Everything in here is free of process state: paths, versions and dates
//! come in as arguments.
//!
//! - **readme**: locate the README and infer its format (`md` / `org`)
//! - **metadata**: resolve the version (explicit or `tool.poetry.version`)
//! - **header**: find the unreleased header, synthesize and insert the new one

pub mod header;
pub mod metadata;
pub mod readme;

pub use header::{ReleaseHeaderUpdater, UpdateOutcome};
pub use metadata::{METADATA_FILE, resolve_version};
pub use readme::{ReadmeFormat, locate_readme};
