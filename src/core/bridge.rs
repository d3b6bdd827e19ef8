//! Purpose: Define the seam to the remote Objective-C call bridge.
//! Exports: `ObjcBridge`, `ObjcRef`, `ObjcArg`.
//! Role: The only way this crate reaches the remote runtime; implemented by callers.
//! Invariants: Bridge errors are returned as `Error` and propagated untouched.
//! Invariants: `ObjcRef` is a plain remote address; it is never released here.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::core::error::Result;

/// Opaque reference to a remote object. Selectors returning scalars
/// (`BOOL`, `NSInteger`) also come back as an `ObjcRef` holding the raw value.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct ObjcRef(u64);

impl ObjcRef {
    pub const NULL: Self = Self(0);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Reads the value as an Objective-C `BOOL` return.
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }

    /// Reads the value as a signed `NSInteger` return.
    pub const fn as_integer(self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Debug for ObjcRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjcRef({:#x})", self.0)
    }
}

/// Selector argument. `Location` only sends `Bool`; the other variants let
/// bridge callers reuse the same vocabulary for their own selectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObjcArg {
    Bool(bool),
    Int(i64),
    Double(f64),
    Object(ObjcRef),
}

impl From<bool> for ObjcArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ObjcArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ObjcArg {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<ObjcRef> for ObjcArg {
    fn from(value: ObjcRef) -> Self {
        Self::Object(value)
    }
}

/// Remote-call client collaborator.
pub trait ObjcBridge {
    /// Loads a shared library on the remote side. `Ok(false)` means the path did not load.
    fn dlopen(&self, path: &str, mode: i32) -> Result<bool>;

    /// Resolves an Objective-C class by name.
    fn objc_get_class(&self, name: &str) -> Result<ObjcRef>;

    /// Sends `selector` to `target` (a class or an instance).
    fn objc_call(&self, target: ObjcRef, selector: &str, args: &[ObjcArg]) -> Result<ObjcRef>;

    /// Converts a remote object into a native structured value.
    fn to_native(&self, object: ObjcRef) -> Result<Value>;
}

impl<T: ObjcBridge + ?Sized> ObjcBridge for &T {
    fn dlopen(&self, path: &str, mode: i32) -> Result<bool> {
        (**self).dlopen(path, mode)
    }

    fn objc_get_class(&self, name: &str) -> Result<ObjcRef> {
        (**self).objc_get_class(name)
    }

    fn objc_call(&self, target: ObjcRef, selector: &str, args: &[ObjcArg]) -> Result<ObjcRef> {
        (**self).objc_call(target, selector, args)
    }

    fn to_native(&self, object: ObjcRef) -> Result<Value> {
        (**self).to_native(object)
    }
}

impl<T: ObjcBridge + ?Sized> ObjcBridge for Box<T> {
    fn dlopen(&self, path: &str, mode: i32) -> Result<bool> {
        (**self).dlopen(path, mode)
    }

    fn objc_get_class(&self, name: &str) -> Result<ObjcRef> {
        (**self).objc_get_class(name)
    }

    fn objc_call(&self, target: ObjcRef, selector: &str, args: &[ObjcArg]) -> Result<ObjcRef> {
        (**self).objc_call(target, selector, args)
    }

    fn to_native(&self, object: ObjcRef) -> Result<Value> {
        (**self).to_native(object)
    }
}

impl<T: ObjcBridge + ?Sized> ObjcBridge for Arc<T> {
    fn dlopen(&self, path: &str, mode: i32) -> Result<bool> {
        (**self).dlopen(path, mode)
    }

    fn objc_get_class(&self, name: &str) -> Result<ObjcRef> {
        (**self).objc_get_class(name)
    }

    fn objc_call(&self, target: ObjcRef, selector: &str, args: &[ObjcArg]) -> Result<ObjcRef> {
        (**self).objc_call(target, selector, args)
    }

    fn to_native(&self, object: ObjcRef) -> Result<Value> {
        (**self).to_native(object)
    }
}
