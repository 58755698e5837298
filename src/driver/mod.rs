pub mod ios;
pub mod traits;

use anyhow::Result;

/// List connected devices for the specified platform
pub async fn list_devices(platform: &str, silent: bool) -> Result<()> {
    match platform {
        "ios" => ios::list_devices(silent).await,
        _ => {
            anyhow::bail!("Unknown platform: {}", platform);
        }
    }
}
