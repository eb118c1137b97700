use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Response payload from the costing service, kept exactly as received.
///
/// The service owns the shape; this side only offers read accessors for the
/// fields the UI knows how to display and hands the payload on untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationResult(Value);

impl CalculationResult {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn into_payload(self) -> Value {
        self.0
    }

    /// Total life cycle cost, when the payload carries a numeric `total_lcc`.
    pub fn total_lcc(&self) -> Option<f64> {
        self.0.get("total_lcc").and_then(Value::as_f64)
    }

    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// One completed calculation, kept for the recent-calculations list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: String,
    pub project_name: String,
    /// Copied out of the payload at record time; `None` when the service
    /// answered with something the client does not recognize.
    pub total_lcc: Option<f64>,
    /// Unix timestamp (seconds) of the successful submission.
    pub calculated_at: i64,
}

impl CalculationRecord {
    pub fn new(project_name: impl Into<String>, result: &CalculationResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            project_name: project_name.into(),
            total_lcc: result.total_lcc(),
            calculated_at: OffsetDateTime::now_utc().unix_timestamp(),
        }
    }

    /// RFC 3339 label for the history table, e.g. `2026-08-24T09:31:00Z`.
    pub fn calculated_at_label(&self) -> String {
        OffsetDateTime::from_unix_timestamp(self.calculated_at)
            .ok()
            .and_then(|stamp| stamp.format(&Rfc3339).ok())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
