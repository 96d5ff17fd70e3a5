//! fenci CLI library
//!
//! This library provides the command-line interface for the fenci
//! dictionary-driven Chinese word segmentation system.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
