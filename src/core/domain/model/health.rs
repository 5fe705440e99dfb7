//! Health verdict derived from the appliance-wide status code.

use serde::Serialize;

/// Appliance status code meaning "operating normally".
const STATUS_NORMAL: i32 = 32768;
/// Appliance status codes for degraded-but-serving conditions, such as a
/// capacity warning or an in-progress relayout.
const STATUS_DEGRADED: [i32; 2] = [32772, 32774];

/// Three-state health classification of a [`DeviceStatus`] snapshot.
///
/// [`DeviceStatus`]: super::device_status::DeviceStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthVerdict {
    Pass,
    Warn,
    Fail,
}

impl HealthVerdict {
    /// Classifies an appliance-wide status code.
    ///
    /// Any code outside the known normal and degraded sets is a failure,
    /// including zero (the parser's default for a document that omitted
    /// `mStatus` entirely).
    pub fn from_status_code(code: i32) -> Self {
        if code == STATUS_NORMAL {
            HealthVerdict::Pass
        } else if STATUS_DEGRADED.contains(&code) {
            HealthVerdict::Warn
        } else {
            HealthVerdict::Fail
        }
    }

    /// Returns the verdict as the wire string used in health bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthVerdict::Pass => "pass",
            HealthVerdict::Warn => "warn",
            HealthVerdict::Fail => "fail",
        }
    }
}
