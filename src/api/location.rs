//! Purpose: Wrap the remote `CLLocationManager` singleton behind a typed API.
//! Exports: `Location`.
//! Role: Pass-through service; each method is one blocking bridge round trip.
//! Invariants: The framework is loaded and the manager resolved exactly once, in `with_options`.
//! Invariants: Tracking requests are gated on `AuthorizationStatus::permits_tracking`.
//! Invariants: A rejected gate never forwards the tracking selector.

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::options::LocationOptions;
use super::sample::LocationSample;
use crate::core::bridge::{ObjcArg, ObjcBridge, ObjcRef};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::framework::load_framework;
use crate::core::status::AuthorizationStatus;

const SHARED_MANAGER: &str = "sharedManager";
const LOCATION_SERVICES_ENABLED: &str = "locationServicesEnabled";
const SET_LOCATION_SERVICES_ENABLED: &str = "setLocationServicesEnabled:";
const AUTHORIZATION_STATUS: &str = "authorizationStatus";
const LOCATION: &str = "location";
const JSON_OBJECT: &str = "jsonObject";
const START_UPDATING_LOCATION: &str = "startUpdatingLocation";
const STOP_UPDATING_LOCATION: &str = "stopUpdatingLocation";
const REQUEST_LOCATION: &str = "requestLocation";

/// Wrapper to `CLLocationManager`.
///
/// <https://developer.apple.com/documentation/corelocation/cllocationmanager?language=objc>
#[derive(Debug)]
pub struct Location<B: ObjcBridge> {
    bridge: B,
    manager_class: ObjcRef,
    manager: ObjcRef,
}

impl<B: ObjcBridge> Location<B> {
    pub fn new(bridge: B) -> Result<Self> {
        Self::with_options(bridge, &LocationOptions::default())
    }

    pub fn with_options(bridge: B, options: &LocationOptions) -> Result<Self> {
        let loaded = load_framework(&bridge, options.framework_paths(), options.dlopen_mode())?;
        let manager_class = bridge.objc_get_class(options.manager_class())?;
        let manager = bridge.objc_call(manager_class, SHARED_MANAGER, &[])?;
        info!(
            framework = %loaded.display(),
            class = options.manager_class(),
            ?manager,
            "resolved location manager"
        );
        Ok(Self {
            bridge,
            manager_class,
            manager,
        })
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn manager_class(&self) -> ObjcRef {
        self.manager_class
    }

    pub fn manager(&self) -> ObjcRef {
        self.manager
    }

    pub fn location_services_enabled(&self) -> Result<bool> {
        Ok(self.call(self.manager, LOCATION_SERVICES_ENABLED, &[])?.as_bool())
    }

    /// Class-level toggle; affects every client of the remote process.
    pub fn set_location_services_enabled(&self, enabled: bool) -> Result<()> {
        self.call(
            self.manager_class,
            SET_LOCATION_SERVICES_ENABLED,
            &[ObjcArg::Bool(enabled)],
        )?;
        Ok(())
    }

    /// `Ok(None)` when the framework reports a code outside the known set.
    pub fn authorization_status(&self) -> Result<Option<AuthorizationStatus>> {
        let code = self.call(self.manager, AUTHORIZATION_STATUS, &[])?.as_integer();
        let status = AuthorizationStatus::from_value(code);
        if status.is_none() {
            debug!(code, "unrecognized authorization status");
        }
        Ok(status)
    }

    /// Most recent fix as reported by `-[CLLocation jsonObject]`; `None` when there is no fix.
    pub fn last_sample(&self) -> Result<Option<Map<String, Value>>> {
        let location = self.call(self.manager, LOCATION, &[])?;
        if location.is_null() {
            return Ok(None);
        }
        let json = self.call(location, JSON_OBJECT, &[])?;
        if json.is_null() {
            return Ok(None);
        }
        match self.bridge.to_native(json)? {
            Value::Object(map) => Ok(Some(map)),
            Value::Null => Ok(None),
            other => Err(Error::new(ErrorKind::Conversion)
                .with_message(format!("expected a mapping, got {}", value_kind(&other)))
                .with_selector(JSON_OBJECT)),
        }
    }

    pub fn last_sample_typed(&self) -> Result<Option<LocationSample>> {
        self.last_sample()?.map(LocationSample::from_map).transpose()
    }

    pub fn start_updating_location(&self) -> Result<()> {
        self.require_tracking_permission(START_UPDATING_LOCATION)?;
        self.call(self.manager, START_UPDATING_LOCATION, &[])?;
        Ok(())
    }

    pub fn stop_updating_location(&self) -> Result<()> {
        self.call(self.manager, STOP_UPDATING_LOCATION, &[])?;
        Ok(())
    }

    /// Requests the one-time delivery of the user's current location.
    pub fn request_oneshot_location(&self) -> Result<()> {
        self.require_tracking_permission(REQUEST_LOCATION)?;
        self.call(self.manager, REQUEST_LOCATION, &[])?;
        Ok(())
    }

    fn require_tracking_permission(&self, selector: &str) -> Result<()> {
        match self.authorization_status()? {
            Some(status) if status.permits_tracking() => Ok(()),
            Some(status) => {
                warn!(%status, selector, "location tracking not authorized");
                Err(Error::new(ErrorKind::PermissionDenied)
                    .with_message(format!("authorization status is {status}"))
                    .with_selector(selector)
                    .with_hint("grant the process kCLAuthorizationStatusAuthorizedAlways"))
            }
            None => {
                warn!(selector, "location tracking gated on unknown authorization status");
                Err(Error::new(ErrorKind::PermissionDenied)
                    .with_message("authorization status is unrecognized")
                    .with_selector(selector))
            }
        }
    }

    fn call(&self, target: ObjcRef, selector: &str, args: &[ObjcArg]) -> Result<ObjcRef> {
        debug!(?target, selector, ?args, "objc_call");
        self.bridge.objc_call(target, selector, args)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
