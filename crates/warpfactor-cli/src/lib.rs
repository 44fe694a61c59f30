//! Warp factor CLI library.
//!
//! This crate provides the presentation layer for the warp factor
//! calculator: display-unit tables, terminal styling and output formatting.

pub mod output;
pub mod terminal;
pub mod units;
