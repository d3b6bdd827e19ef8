//! Purpose: Model CoreLocation's `CLAuthorizationStatus` codes.
//! Exports: `AuthorizationStatus`.
//! Role: Typed view of the integer returned by `authorizationStatus`.
//! Invariants: Declaration order and discriminants match the framework (0..=4).
//! Invariants: Permission gating compares ordinals, so reordering changes behavior.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(i64)]
pub enum AuthorizationStatus {
    NotDetermined = 0,
    Restricted = 1,
    Denied = 2,
    AuthorizedAlways = 3,
    AuthorizedWhenInUse = 4,
}

impl AuthorizationStatus {
    /// Deprecated framework alias `kCLAuthorizationStatusAuthorized`.
    pub const AUTHORIZED: Self = Self::AuthorizedAlways;

    pub const ALL: [Self; 5] = [
        Self::NotDetermined,
        Self::Restricted,
        Self::Denied,
        Self::AuthorizedAlways,
        Self::AuthorizedWhenInUse,
    ];

    /// Looks up a raw status code; codes the framework does not define yield `None`.
    pub fn from_value(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.value() == value)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn objc_name(self) -> &'static str {
        match self {
            Self::NotDetermined => "kCLAuthorizationStatusNotDetermined",
            Self::Restricted => "kCLAuthorizationStatusRestricted",
            Self::Denied => "kCLAuthorizationStatusDenied",
            Self::AuthorizedAlways => "kCLAuthorizationStatusAuthorizedAlways",
            Self::AuthorizedWhenInUse => "kCLAuthorizationStatusAuthorizedWhenInUse",
        }
    }

    /// Gate used before starting location delivery.
    pub fn permits_tracking(self) -> bool {
        self.value() >= Self::AuthorizedAlways.value()
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.objc_name())
    }
}

#[cfg(test)]
mod tests {
    use super::AuthorizationStatus;

    #[test]
    fn known_codes_map_to_variants() {
        let cases = [
            (0, AuthorizationStatus::NotDetermined),
            (1, AuthorizationStatus::Restricted),
            (2, AuthorizationStatus::Denied),
            (3, AuthorizationStatus::AuthorizedAlways),
            (4, AuthorizationStatus::AuthorizedWhenInUse),
        ];

        for (code, status) in cases {
            assert_eq!(AuthorizationStatus::from_value(code), Some(status));
            assert_eq!(status.value(), code);
        }
    }

    #[test]
    fn unknown_codes_are_absent() {
        for code in [-1, 5, 42, i64::MAX] {
            assert_eq!(AuthorizationStatus::from_value(code), None);
        }
    }

    #[test]
    fn authorized_alias_shares_value() {
        assert_eq!(
            AuthorizationStatus::AUTHORIZED,
            AuthorizationStatus::AuthorizedAlways
        );
        assert_eq!(AuthorizationStatus::AUTHORIZED.value(), 3);
    }

    #[test]
    fn tracking_gate_follows_ordinal() {
        assert!(!AuthorizationStatus::NotDetermined.permits_tracking());
        assert!(!AuthorizationStatus::Restricted.permits_tracking());
        assert!(!AuthorizationStatus::Denied.permits_tracking());
        assert!(AuthorizationStatus::AuthorizedAlways.permits_tracking());
        assert!(AuthorizationStatus::AuthorizedWhenInUse.permits_tracking());
    }

    #[test]
    fn display_uses_framework_names() {
        assert_eq!(
            AuthorizationStatus::Denied.to_string(),
            "kCLAuthorizationStatusDenied"
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let value = serde_json::to_value(AuthorizationStatus::AuthorizedWhenInUse).expect("json");
        assert_eq!(value, serde_json::json!("authorized_when_in_use"));
    }
}
