//! EMD driver.
//!
//! Library half of the `emd` binary. Each command is a function that returns
//! its output (or a [`CliError`]) instead of printing, so the binary stays a
//! thin argument dispatcher and the commands can be tested directly.

pub mod commands;
mod tracing_setup;

pub use commands::CliError;
pub use tracing_setup::init_tracing;
