//! iOS driver
//!
//! Probes attached devices once at construction, then builds one
//! `IosPlatform` per selected device on request.

use std::path::Path;

use super::device_list::{parse_device_list, DeviceListing, DeviceSet};
use super::idb::Idb;
use super::platform::{IosPlatform, PlatformMeta};
use super::selector::{retain_listed, select_devices, DeviceList, DeviceOverride, Selection};
use crate::driver::traits::DeviceProbe;
use crate::error::DriverResult;
use crate::utils::config::DriverArgs;

/// Run detection through `probe` and parse the listing
pub async fn discover(probe: &dyn DeviceProbe, silent: bool) -> DriverResult<DeviceListing> {
    let lines = probe.detect(silent).await?;
    let listing = parse_device_list(&lines);
    if !silent {
        log::info!(
            "Discovered {} iOS device(s), skipped {} line(s)",
            listing.devices.len(),
            listing.skipped
        );
    }
    Ok(listing)
}

/// Build one platform handle per selected device
pub fn build_platforms(selection: &Selection, workdir: &Path, args: &DriverArgs) -> Vec<IosPlatform> {
    match selection {
        Selection::Override(device) => vec![build_override_platform(device, workdir, args)],
        Selection::Discovered(devices) => devices
            .iter()
            .map(|(id, record)| {
                let idb = Idb::new(Some(id.clone()), Some(workdir.to_path_buf()));
                let mut platform =
                    IosPlatform::new(workdir, idb, args, Some(PlatformMeta::from(record)));
                platform.set_platform(id.clone());
                platform
            })
            .collect(),
    }
}

fn build_override_platform(device: &DeviceOverride, workdir: &Path, args: &DriverArgs) -> IosPlatform {
    let idb = Idb::new(Some(device.hash.clone()), Some(workdir.to_path_buf()));
    let mut platform = IosPlatform::new(workdir, idb, args, None);
    platform.set_platform(device.kind.clone());
    platform.set_os_version(device.os_version.clone());
    platform.set_abi(device.abi.clone());
    platform
}

/// Discovery-and-dispatch driver for iOS devices
pub struct IosDriver {
    args: DriverArgs,
    probe: Box<dyn DeviceProbe>,
    devices: DeviceSet,
    skipped: usize,
}

impl IosDriver {
    /// Platform type reported by this driver
    pub const KIND: &'static str = "ios";

    /// Create a driver backed by ios-deploy.
    ///
    /// `devices`, when non-empty, keeps only those identifiers from the
    /// discovered set.
    pub async fn new(args: DriverArgs, devices: Option<DeviceList>) -> DriverResult<Self> {
        Self::with_probe(args, Box::new(Idb::default()), devices).await
    }

    /// Create a driver backed by an arbitrary probe
    pub async fn with_probe(
        args: DriverArgs,
        probe: Box<dyn DeviceProbe>,
        devices: Option<DeviceList>,
    ) -> DriverResult<Self> {
        let listing = discover(probe.as_ref(), false).await?;

        let devices = match devices.filter(|list| !list.is_empty()) {
            Some(list) => retain_listed(&listing.devices, &list),
            None => listing.devices,
        };

        Ok(Self {
            args,
            probe,
            devices,
            skipped: listing.skipped,
        })
    }

    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    pub fn args(&self) -> &DriverArgs {
        &self.args
    }

    /// Devices discovered at construction
    pub fn devices(&self) -> &DeviceSet {
        &self.devices
    }

    /// Probe lines skipped at construction
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Probe again and return the current device set
    pub async fn get_devices(&self, silent: bool) -> DriverResult<DeviceSet> {
        Ok(discover(self.probe.as_ref(), silent).await?.devices)
    }

    /// Apply the configured override or filters to the discovered set
    pub fn select(&self) -> DriverResult<Selection> {
        select_devices(&self.devices, &self.args)
    }

    /// Build platform handles for the selected devices, working in `tempdir`
    pub fn get_ios_platforms(&self, tempdir: &Path) -> DriverResult<Vec<IosPlatform>> {
        let selection = self.select()?;
        let platforms = build_platforms(&selection, tempdir, &self.args);
        log::info!("Created {} iOS platform(s)", platforms.len());
        Ok(platforms)
    }
}
