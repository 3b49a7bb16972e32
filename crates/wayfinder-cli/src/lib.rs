//! Wayfinder CLI library.
//!
//! This crate provides the subcommand handlers, output formatting and
//! terminal styling used by the `wayfinder-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
