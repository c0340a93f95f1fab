//! Terminal presentation helpers

pub mod style;
