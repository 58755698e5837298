//! Parsing of `ios-deploy --detect` output
//!
//! A detection listing looks like:
//!
//! ```text
//! [....] Waiting up to 1 seconds for iOS device to be connected
//! [....] Found 00008030-001A2D3C0E91802E (D321AP, iPhone XS, iphoneos, arm64e, 14.2, 18B92) a.k.a. 'Lab 3' connected through USB.
//! ```
//!
//! The first line is always a header. Every other line either describes one
//! device or is noise and gets skipped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Capture groups: 1 identifier, 2 model, 3 ABI, 4 OS version.
///
/// The model accepts commas so product types such as `iPhone8,1` parse.
pub const DEVICE_LINE_PATTERN: &str =
    r".* Found ([\d|a-f|\-|A-F]+) \(([\w,]+), .+, .+, (.+), (.+), .+\) a\.k\.a\. .*";

fn device_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DEVICE_LINE_PATTERN).expect("device line pattern is valid"))
}

/// One attached device as reported by the probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub identifier: String,
    pub model: String,
    pub abi: String,
    pub os_version: String,
}

/// Discovered devices keyed by identifier, iterated in identifier order
pub type DeviceSet = BTreeMap<String, DeviceRecord>;

/// Result of parsing one probe listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceListing {
    pub devices: DeviceSet,
    /// Lines after the header that did not describe a device
    pub skipped: usize,
}

/// Parse a single device line
pub fn parse_device_line(line: &str) -> Option<DeviceRecord> {
    let caps = device_line_regex().captures(line)?;
    Some(DeviceRecord {
        identifier: caps[1].to_string(),
        model: caps[2].to_string(),
        abi: caps[3].to_string(),
        os_version: caps[4].to_string(),
    })
}

/// Parse the full probe output, dropping the header line
pub fn parse_device_list<S: AsRef<str>>(lines: &[S]) -> DeviceListing {
    let mut listing = DeviceListing::default();

    for line in lines.iter().skip(1) {
        let line = line.as_ref();
        match parse_device_line(line) {
            Some(record) => {
                listing.devices.insert(record.identifier.clone(), record);
            }
            None => {
                log::debug!("Skipping probe line: {}", line);
                listing.skipped += 1;
            }
        }
    }

    listing
}
