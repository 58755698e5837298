//! Per-device platform handle
//!
//! Later benchmarking stages drive a device through its `IosPlatform`. This
//! crate only builds handles; running benchmarks on them lives elsewhere.

use super::device_list::DeviceRecord;
use super::idb::Idb;
use crate::utils::config::DriverArgs;
use std::fmt;
use std::path::{Path, PathBuf};

/// Metadata snapshot taken from discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMeta {
    pub os_version: String,
    pub model: String,
    pub abi: String,
}

impl From<&DeviceRecord> for PlatformMeta {
    fn from(record: &DeviceRecord) -> Self {
        Self {
            os_version: record.os_version.clone(),
            model: record.model.clone(),
            abi: record.abi.clone(),
        }
    }
}

/// Handle for one iOS device
#[derive(Debug, Clone)]
pub struct IosPlatform {
    workdir: PathBuf,
    idb: Idb,
    args: DriverArgs,
    meta: Option<PlatformMeta>,
    platform: Option<String>,
    os_version: Option<String>,
    abi: Option<String>,
}

impl IosPlatform {
    /// Build a handle; OS version and ABI start out from `meta` when given
    pub fn new(workdir: &Path, idb: Idb, args: &DriverArgs, meta: Option<PlatformMeta>) -> Self {
        let os_version = meta.as_ref().map(|m| m.os_version.clone());
        let abi = meta.as_ref().map(|m| m.abi.clone());
        Self {
            workdir: workdir.to_path_buf(),
            idb,
            args: args.clone(),
            meta,
            platform: None,
            os_version,
            abi,
        }
    }

    pub fn set_platform(&mut self, platform: impl Into<String>) {
        self.platform = Some(platform.into());
    }

    /// `None` leaves the platform default in place
    pub fn set_os_version(&mut self, os_version: Option<String>) {
        self.os_version = os_version;
    }

    /// `None` leaves the platform default in place
    pub fn set_abi(&mut self, abi: Option<String>) {
        self.abi = abi;
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    pub fn abi(&self) -> Option<&str> {
        self.abi.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.meta.as_ref().map(|m| m.model.as_str())
    }

    pub fn meta(&self) -> Option<&PlatformMeta> {
        self.meta.as_ref()
    }

    /// Identifier of the device the control channel is bound to
    pub fn device_hash(&self) -> Option<&str> {
        self.idb.device()
    }

    pub fn idb(&self) -> &Idb {
        &self.idb
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn args(&self) -> &DriverArgs {
        &self.args
    }
}

impl fmt::Display for IosPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] model={} abi={} os={}",
            self.platform().unwrap_or("ios"),
            self.device_hash().unwrap_or("default"),
            self.model().unwrap_or("-"),
            self.abi().unwrap_or("default"),
            self.os_version().unwrap_or("default"),
        )
    }
}
