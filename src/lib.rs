pub mod driver;
pub mod error;
pub mod utils;

// Re-export common items
pub use driver::ios::{IosDriver, IosPlatform};
pub use driver::list_devices;
pub use error::{DriverError, DriverResult};
pub use utils::config::DriverArgs;
