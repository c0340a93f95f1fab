//! Core building blocks shared by every readme-release operation
//!
//! - **context**: working directory and clock captured once per run
//! - **error**: error taxonomy with exit codes and help messages

pub mod context;
pub mod error;
