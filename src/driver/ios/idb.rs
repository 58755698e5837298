//! ios-deploy CLI wrapper
//!
//! `Idb` is the control channel for one iOS device. Without a device it talks
//! to whatever ios-deploy picks up by default, which is how detection runs.

use crate::driver::traits::{DeviceProbe, DETECT_ARGS};
use crate::error::{DriverError, DriverResult};
use crate::utils::binary_resolver;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Control channel bound to an optional device and working directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Idb {
    device: Option<String>,
    workdir: Option<PathBuf>,
    binary: Option<PathBuf>,
}

impl Idb {
    /// Create a channel for `device`, running the tool inside `workdir`
    pub fn new(device: Option<String>, workdir: Option<PathBuf>) -> Self {
        Self {
            device,
            workdir,
            binary: None,
        }
    }

    /// Use an explicit tool path instead of resolving `ios-deploy`
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    /// Device identifier this channel is bound to
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Working directory used for tool invocations
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// Full argument list for a call, with `--id` first when bound to a device
    pub fn command_args(&self, args: &[&str]) -> Vec<String> {
        let mut full_args = Vec::with_capacity(args.len() + 2);
        if let Some(device) = &self.device {
            full_args.push("--id".to_string());
            full_args.push(device.clone());
        }
        full_args.extend(args.iter().map(|a| a.to_string()));
        full_args
    }

    /// Run ios-deploy and return stdout lines
    pub async fn run(&self, args: &[&str], silent: bool) -> DriverResult<Vec<String>> {
        let binary = match &self.binary {
            Some(path) => path.clone(),
            None => binary_resolver::find_ios_deploy()?,
        };
        let full_args = self.command_args(args);

        if !silent {
            log::debug!("Running {} {}", binary.display(), full_args.join(" "));
        }

        let mut command = Command::new(&binary);
        command
            .args(&full_args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|e| DriverError::Probe {
            tool: binary.clone(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DriverError::Probe {
                tool: binary,
                message: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

#[async_trait]
impl DeviceProbe for Idb {
    async fn detect(&self, silent: bool) -> DriverResult<Vec<String>> {
        self.run(DETECT_ARGS, silent).await
    }
}
