//! Purpose: Define the public Rust API boundary for the CoreLocation binding.
//! Exports: `Location`, `LocationOptions`, `LocationSample`, status, bridge and error types.
//! Role: Public, additive-only surface; hides internal `core` modules.
//! Invariants: This module is the only public path to core types.

mod location;
mod options;
mod sample;

pub use crate::core::bridge::{ObjcArg, ObjcBridge, ObjcRef};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::framework::{IOS_FRAMEWORK_PATH, MACOS_FRAMEWORK_PATH};
pub use crate::core::status::AuthorizationStatus;
pub use location::Location;
pub use options::{DEFAULT_MANAGER_CLASS, LocationOptions};
pub use sample::LocationSample;
