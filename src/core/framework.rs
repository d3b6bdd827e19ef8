//! Purpose: Locate and load the CoreLocation framework through the bridge.
//! Exports: `MACOS_FRAMEWORK_PATH`, `IOS_FRAMEWORK_PATH`, `default_framework_paths`, `load_framework`.
//! Role: First step of `Location` construction.
//! Invariants: Paths are tried in order and the first successful dlopen wins.
//! Invariants: Exhausting every path is `MissingLibrary` carrying the last path tried.
//! Invariants: Bridge errors from dlopen pass through untouched.

use std::path::PathBuf;
use tracing::debug;

use crate::core::bridge::ObjcBridge;
use crate::core::error::{Error, ErrorKind, Result};

pub const MACOS_FRAMEWORK_PATH: &str =
    "/System/Library/Frameworks/CoreLocation.framework/Versions/A/CoreLocation";
pub const IOS_FRAMEWORK_PATH: &str = "/System/Library/Frameworks/CoreLocation.framework/CoreLocation";

pub fn default_framework_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(MACOS_FRAMEWORK_PATH),
        PathBuf::from(IOS_FRAMEWORK_PATH),
    ]
}

/// Returns the path that loaded.
pub fn load_framework<'a, B: ObjcBridge + ?Sized>(
    bridge: &B,
    paths: &'a [PathBuf],
    mode: i32,
) -> Result<&'a PathBuf> {
    for path in paths {
        let path_str = path.to_string_lossy();
        let loaded = bridge.dlopen(&path_str, mode)?;
        debug!(path = %path_str, mode, loaded, "dlopen CoreLocation");
        if loaded {
            return Ok(path);
        }
    }
    let mut err = Error::new(ErrorKind::MissingLibrary)
        .with_message("CoreLocation library isn't available")
        .with_hint(format!("tried {} path(s)", paths.len()));
    if let Some(last) = paths.last() {
        err = err.with_path(last);
    }
    Err(err)
}
