//! iOS device discovery using ios-deploy
//!
//! Enumerates attached devices, applies the configured device selection and
//! builds one platform handle per selected device.

pub mod device_list;
pub mod driver;
pub mod idb;
pub mod platform;
pub mod selector;

pub use device_list::{DeviceRecord, DeviceSet};
pub use driver::IosDriver;
pub use platform::IosPlatform;

use anyhow::Result;
use colored::Colorize;

/// List attached iOS devices
pub async fn list_devices(silent: bool) -> Result<()> {
    let listing = driver::discover(&idb::Idb::default(), silent).await?;

    if listing.devices.is_empty() {
        println!("No iOS devices found.");
        println!("Make sure ios-deploy is installed and devices are connected.");
    } else {
        println!("Connected iOS devices:");
        for device in listing.devices.values() {
            println!(
                "  {} - {} ({}, iOS {})",
                device.identifier.cyan(),
                device.model,
                device.abi,
                device.os_version
            );
        }
    }

    if listing.skipped > 0 {
        println!("{} {} unrecognised line(s) skipped", "⚠".yellow(), listing.skipped);
    }

    Ok(())
}
