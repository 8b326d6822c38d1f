//! ELK Graph JSON command-line tools.
//!
//! The `elkj` binary is a thin dispatcher over [`commands`]; everything it
//! prints is rendered here so it can be tested without a process.

pub mod commands;
mod config;
mod error;
mod tracing_setup;

pub use config::{LexConfig, THREADS_ENV};
pub use error::CliError;
pub use tracing_setup::init_tracing;
