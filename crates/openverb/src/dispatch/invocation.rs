//! Dispatch records capturing timing and outcome of a single call.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

use crate::verb::VerbId;

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchStatus {
    /// The handler returned a result without a failure marker.
    Completed,
    /// The handler returned `success: false` or an `error` of its own.
    Declined,
    /// No handler is registered for the verb id.
    UnknownVerb,
    /// The handler raised a fault or panicked.
    Faulted,
    /// Input or output did not conform to the declared schema.
    Rejected,
}

/// Record of one dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub call_id: Uuid,
    pub verb_id: VerbId,
    pub started_at: SystemTime,
    pub ended_at: SystemTime,
    pub duration_ms: u64,
    pub status: DispatchStatus,
    /// Error message carried by the result, if any.
    pub error: Option<String>,
}

impl DispatchRecord {
    /// Computes `duration_ms` from the difference between `ended_at` and `started_at`.
    pub fn new(
        verb_id: VerbId,
        started_at: SystemTime,
        ended_at: SystemTime,
        status: DispatchStatus,
    ) -> Self {
        let duration_ms = ended_at
            .duration_since(started_at)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            call_id: Uuid::new_v4(),
            verb_id,
            started_at,
            ended_at,
            duration_ms,
            status,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_computes_duration() {
        let start = SystemTime::now();
        let end = start + Duration::from_millis(150);
        let record = DispatchRecord::new(
            "ui.theme.get".into(),
            start,
            end,
            DispatchStatus::Completed,
        );
        assert_eq!(record.duration_ms, 150);
        assert_eq!(record.verb_id.as_str(), "ui.theme.get");
        assert_eq!(record.error, None);
    }

    #[test]
    fn clock_skew_yields_zero_duration() {
        let end = SystemTime::now();
        let start = end + Duration::from_millis(20);
        let record = DispatchRecord::new("ui.nav.back".into(), start, end, DispatchStatus::Faulted);
        assert_eq!(record.duration_ms, 0);
    }
}
