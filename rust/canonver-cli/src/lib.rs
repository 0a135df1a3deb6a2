//! canonver CLI library.
//!
//! Shared functionality behind the `canonver` binary: configuration loading,
//! output rendering and the individual commands. Commands return their output
//! as strings so they can be exercised without spawning a process.

pub mod colors;
pub mod commands;
pub mod config;
pub mod error;

pub use error::CliError;
