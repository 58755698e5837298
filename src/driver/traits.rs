use crate::error::DriverResult;
use async_trait::async_trait;

/// Arguments that ask the device tool to list attached devices
pub const DETECT_ARGS: &[&str] = &["--detect", "--timeout", "1"];

/// Source of raw device listings
///
/// The iOS driver only depends on this trait for discovery, so the real
/// `ios-deploy` wrapper can be swapped for a canned listing in tests.
#[async_trait]
pub trait DeviceProbe: Send + Sync {
    /// Run detection and return the tool's stdout, one entry per line.
    ///
    /// The first line is a header. When `silent` is set the command line is
    /// not logged.
    async fn detect(&self, silent: bool) -> DriverResult<Vec<String>>;
}
