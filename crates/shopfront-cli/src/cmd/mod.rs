//! Command handlers for the `sf` binary.

pub mod completions;
pub mod login;
pub mod orders;
pub mod ui;
