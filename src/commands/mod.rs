//! Command implementations

mod update;

pub use update::{UpdateArgs, run_update};
