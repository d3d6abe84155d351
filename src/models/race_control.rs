use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A flag, penalty or message issued by race control.
///
/// Track-wide events carry no `driver_number`; messages issued before the
/// first lap carry no `lap_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceControl {
    pub category: String,
    pub date: DateTime<FixedOffset>,
    pub driver_number: Option<i64>,
    pub flag: Option<String>,
    pub lap_number: Option<i64>,
    pub meeting_key: i64,
    pub message: String,
    pub scope: Option<String>,
    pub sector: Option<i64>,
    pub session_key: i64,
}

#[cfg(test)]
impl RaceControl {
    pub fn placeholder() -> Self {
        RaceControl {
            category: "CarEvent".to_string(),
            date: chrono::Utc::now().fixed_offset(),
            driver_number: Some(0),
            flag: Some("GREEN".to_string()),
            lap_number: Some(1),
            meeting_key: 0,
            message: "Test message".to_string(),
            scope: Some("Track".to_string()),
            sector: Some(1),
            session_key: 0,
        }
    }
}
