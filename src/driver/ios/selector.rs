//! Device selection: explicit override, exclusion and inclusion lists
//!
//! All filters take a `DeviceSet` by reference and return a new one.

use super::device_list::DeviceSet;
use crate::error::{DriverError, DriverResult};
use crate::utils::config::DriverArgs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single exact device named by configuration, bypassing discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceOverride {
    pub hash: String,
    pub kind: String,
    #[serde(default)]
    pub os_version: Option<String>,
    #[serde(default)]
    pub abi: Option<String>,
}

impl DeviceOverride {
    /// Parse the `device` option. It must be a JSON object.
    pub fn parse(device: &str) -> DriverResult<Self> {
        let device = device.trim();
        if !device.starts_with('{') {
            return Err(DriverError::InvalidDeviceOverride(device.to_string()));
        }
        serde_json::from_str(device)
            .map_err(|e| DriverError::InvalidDeviceOverride(format!("{device}: {e}")))
    }
}

/// List of device identifiers given either as one value or a sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct DeviceList(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for DeviceList {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(id) => id.into(),
            OneOrMany::Many(ids) => ids.into(),
        }
    }
}

impl DeviceList {
    /// Split a comma-separated option, ignoring blanks
    pub fn from_csv(value: &str) -> Self {
        Self(
            value
                .trim()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|d| d == id)
    }
}

impl From<&str> for DeviceList {
    fn from(id: &str) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<String> for DeviceList {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<String>> for DeviceList {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

/// Keep only the devices named in `list`; unknown names are ignored
pub fn retain_listed(devices: &DeviceSet, list: &DeviceList) -> DeviceSet {
    devices
        .iter()
        .filter(|(id, _)| list.contains(id))
        .map(|(id, record)| (id.clone(), record.clone()))
        .collect()
}

/// Drop the devices named in `excluded`
pub fn exclude_devices(devices: &DeviceSet, excluded: &DeviceList) -> DeviceSet {
    devices
        .iter()
        .filter(|(id, _)| !excluded.contains(id))
        .map(|(id, record)| (id.clone(), record.clone()))
        .collect()
}

/// Narrow to exactly `included` when every entry was discovered.
///
/// If any entry is unknown, or the list is empty, the set is returned unchanged.
pub fn include_devices(devices: &DeviceSet, included: &DeviceList) -> DeviceSet {
    if included.is_empty() {
        return devices.clone();
    }

    let unknown: BTreeSet<&str> = included
        .iter()
        .filter(|id| !devices.contains_key(*id))
        .collect();

    if !unknown.is_empty() {
        log::warn!(
            "Ignoring device list, not connected: {}",
            unknown.into_iter().collect::<Vec<_>>().join(", ")
        );
        return devices.clone();
    }

    retain_listed(devices, included)
}

/// What the platform factory should build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exactly one device named by configuration
    Override(DeviceOverride),
    /// The discovered devices that survived filtering
    Discovered(DeviceSet),
}

/// Blank option values count as unset
fn configured(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Apply the configured override or exclusion/inclusion filters
pub fn select_devices(devices: &DeviceSet, args: &DriverArgs) -> DriverResult<Selection> {
    if let Some(device) = configured(&args.device) {
        return DeviceOverride::parse(device).map(Selection::Override);
    }

    let mut selected = devices.clone();

    if let Some(excluded) = configured(&args.excluded_devices) {
        selected = exclude_devices(&selected, &DeviceList::from_csv(excluded));
    }

    if let Some(included) = configured(&args.devices) {
        selected = include_devices(&selected, &DeviceList::from_csv(included));
    }

    Ok(Selection::Discovered(selected))
}
