//! Purpose: Typed view over the `CLLocation -jsonObject` mapping.
//! Exports: `LocationSample`.
//! Role: Optional convenience on top of the raw map returned by `Location::last_sample`.
//! Invariants: Every field is optional; unknown keys survive in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSample {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub horizontal_accuracy: Option<f64>,
    #[serde(default)]
    pub vertical_accuracy: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub course: Option<f64>,
    /// Seconds since the Core Foundation reference date (2001-01-01 UTC).
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationSample {
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    pub fn coordinate(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
