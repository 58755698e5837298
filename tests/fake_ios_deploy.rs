//! Drives the ios-deploy wrapper against a stand-in shell script.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use ios_bench_devices::driver::ios::idb::Idb;
use ios_bench_devices::driver::traits::DeviceProbe;
use ios_bench_devices::{DriverArgs, DriverError, IosDriver};

const DETECT_OUTPUT: &str = r#"[....] Waiting up to 1 seconds for iOS device to be connected
[....] Found 00008030-001A2D3C0E91802E (D321AP, iPhone XS, iphoneos, arm64e, 14.2, 18B92) a.k.a. 'Lab 3' connected through USB.
[....] Found 4f9c2a0e1b (N71AP, iPhone 6s, iphoneos, arm64, 13.3, 17C54) a.k.a. 'Lab 7' connected through USB.
"#;

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("ios-deploy");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn detect_script(dir: &Path) -> PathBuf {
    let listing = dir.join("listing.txt");
    fs::write(&listing, DETECT_OUTPUT).unwrap();
    write_script(
        dir,
        &format!("echo \"$@\" > args.txt\ncat '{}'", listing.display()),
    )
}

#[tokio::test]
async fn test_detect_runs_tool_with_detect_flags() {
    let dir = tempfile::tempdir().unwrap();
    let script = detect_script(dir.path());

    let idb = Idb::new(None, Some(dir.path().to_path_buf())).with_binary(&script);
    let lines = idb.detect(false).await.unwrap();

    assert_eq!(lines.len(), 3);
    let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
    assert_eq!(args.trim(), "--detect --timeout 1");
}

#[tokio::test]
async fn test_device_bound_channel_passes_id() {
    let dir = tempfile::tempdir().unwrap();
    let script = detect_script(dir.path());

    let idb = Idb::new(Some("4f9c2a0e1b".into()), Some(dir.path().to_path_buf())).with_binary(&script);
    idb.run(&["--exists"], true).await.unwrap();

    let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
    assert_eq!(args.trim(), "--id 4f9c2a0e1b --exists");
}

#[tokio::test]
async fn test_driver_builds_platforms_from_tool_output() {
    let dir = tempfile::tempdir().unwrap();
    let script = detect_script(dir.path());
    let probe = Idb::new(None, Some(dir.path().to_path_buf())).with_binary(&script);

    let args = DriverArgs {
        excluded_devices: Some("4f9c2a0e1b".into()),
        ..Default::default()
    };
    let driver = IosDriver::with_probe(args, Box::new(probe), None).await.unwrap();
    assert_eq!(driver.devices().len(), 2);
    assert_eq!(driver.skipped_lines(), 0);

    let platforms = driver.get_ios_platforms(dir.path()).unwrap();
    assert_eq!(platforms.len(), 1);
    let xs = &platforms[0];
    assert_eq!(xs.platform(), Some("00008030-001A2D3C0E91802E"));
    assert_eq!(xs.model(), Some("D321AP"));
    assert_eq!(xs.abi(), Some("arm64e"));
    assert_eq!(xs.os_version(), Some("14.2"));
    assert_eq!(xs.workdir(), dir.path());
}

#[tokio::test]
async fn test_tool_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "echo 'no device found' >&2\nexit 253");

    let idb = Idb::default().with_binary(&script);
    match idb.detect(true).await {
        Err(DriverError::Probe { message, .. }) => assert!(message.contains("no device found")),
        other => panic!("expected probe error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_silent_tool_means_no_devices() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "exit 0");

    let probe = Idb::default().with_binary(&script);
    let driver = IosDriver::with_probe(DriverArgs::default(), Box::new(probe), None)
        .await
        .unwrap();
    assert!(driver.get_devices(true).await.unwrap().is_empty());
}
