//! Error types for device discovery and platform construction.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the driver.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors surfaced by the iOS device driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The device tool could not be located.
    #[error("Could not find binary '{name}'. Checked paths:\n{checked}")]
    BinaryNotFound {
        /// Binary name that was looked up
        name: String,
        /// Newline separated list of locations that were tried
        checked: String,
    },

    /// The device tool failed to start or exited with a non-zero status.
    #[error("{} failed: {message}", .tool.display())]
    Probe {
        /// Path of the tool that was run
        tool: PathBuf,
        /// stderr of the tool, or the spawn error
        message: String,
    },

    /// The `device` option is not a JSON device descriptor.
    #[error("device must be a json string: {0}")]
    InvalidDeviceOverride(String),

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration {}: {message}", .path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}
