use crate::error::{DriverError, DriverResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Device selection options handed to the iOS driver
///
/// Mirrors the harness arguments: `device` is a JSON descriptor naming one
/// exact device, `excluded_devices` and `devices` are comma-separated
/// identifier lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverArgs {
    /// JSON device override, e.g. `{"hash": "...", "kind": "iphone"}`
    pub device: Option<String>,

    /// Comma-separated identifiers to drop from the discovered set
    pub excluded_devices: Option<String>,

    /// Comma-separated identifiers to restrict the discovered set to
    pub devices: Option<String>,
}

impl DriverArgs {
    /// Load options from a YAML file
    pub fn from_file(path: &Path) -> DriverResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DriverError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| DriverError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: DriverArgs) -> Self {
        Self {
            device: other.device.or(self.device),
            excluded_devices: other.excluded_devices.or(self.excluded_devices),
            devices: other.devices.or(self.devices),
        }
    }
}
