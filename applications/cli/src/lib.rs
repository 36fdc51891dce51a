//! Highspot CLI Library
//!
//! Driver around `highspot-core`: configuration, empty-file handling and
//! exit codes for the `highspot` binary.
//!
//! This library exposes the driver for testing purposes.

pub mod config;
pub mod driver;
pub mod error;

pub use config::{EmptyChangesPolicy, HighspotConfig};
pub use driver::{run, Outcome};
pub use error::{CliError, Result};
