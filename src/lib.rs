//! Purpose: CoreLocation bindings driven through a remote Objective-C call bridge.
//! Exports: `api` (location service, options, samples, errors, bridge trait).
//! Role: Library crate; callers supply the bridge, this crate supplies the typed surface.
//! Invariants: All remote work goes through `core::bridge::ObjcBridge`.
//! Invariants: No process-wide state; every handle lives inside a `Location`.
pub mod api;
pub(crate) mod core;
