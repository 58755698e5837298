use crate::error::{DriverError, DriverResult};
use std::path::PathBuf;

/// Environment variable that pins the device tool to an explicit path
pub const IOS_DEPLOY_ENV: &str = "IOS_DEPLOY";

/// Name of the device tool binary
pub const IOS_DEPLOY: &str = "ios-deploy";

/// Find a binary: explicit env override, then the install directory
/// (~/.ios-bench/bin), then the system PATH
pub fn find_binary(name: &str, env_var: Option<&str>) -> DriverResult<PathBuf> {
    let mut checked_paths = Vec::new();

    // 1. Explicit override
    if let Some(var) = env_var {
        if let Some(value) = std::env::var_os(var).filter(|v| !v.is_empty()) {
            let path = PathBuf::from(value);
            checked_paths.push(format!("Env {}: {:?}", var, path));
            if path.exists() {
                return Ok(path);
            }
        }
    }

    // 2. Install directory
    if let Some(install_dir) = install_dir() {
        let path = install_dir.join("bin").join(name);
        checked_paths.push(format!("Install Dir: {:?}", path));
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. Fallback to system PATH
    match which::which(name) {
        Ok(path) => Ok(path),
        Err(_) => {
            checked_paths.push(format!("System PATH: {}", name));
            Err(DriverError::BinaryNotFound {
                name: name.to_string(),
                checked: checked_paths.join("\n"),
            })
        }
    }
}

/// Install directory for bundled tools
pub fn install_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ios-bench"))
}

/// Find the ios-deploy binary
pub fn find_ios_deploy() -> DriverResult<PathBuf> {
    find_binary(IOS_DEPLOY, Some(IOS_DEPLOY_ENV))
}
