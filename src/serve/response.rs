//! Response bodies for the health view.

use crate::core::domain::model::health::HealthVerdict;
use serde::Serialize;

/// Body of a health response, in the `application/health+json` shape.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: HealthVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl HealthBody {
    /// A pass/warn body carrying the verdict alone.
    pub fn verdict(verdict: HealthVerdict) -> Self {
        Self {
            status: verdict,
            notes: None,
        }
    }

    /// The failure body. Carries a generic note only; raw error text never
    /// reaches the health document.
    pub fn fail() -> Self {
        Self {
            status: HealthVerdict::Fail,
            notes: Some("could not retrieve appliance status".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_body_has_no_notes() {
        let json = serde_json::to_value(HealthBody::verdict(HealthVerdict::Pass)).unwrap();
        assert_eq!(json, serde_json::json!({"status": "pass"}));
    }

    #[test]
    fn test_fail_body_carries_generic_note() {
        let json = serde_json::to_value(HealthBody::fail()).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["notes"], "could not retrieve appliance status");
    }
}
