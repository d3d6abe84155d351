use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One practice, qualifying, sprint or race session within a meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub circuit_key: i64,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: i64,
    pub country_name: String,
    pub date_end: DateTime<FixedOffset>,
    pub date_start: DateTime<FixedOffset>,
    pub gmt_offset: String,
    pub location: String,
    pub meeting_key: i64,
    pub session_key: i64,
    pub session_name: String,
    pub session_type: String,
    pub year: i32,
}

#[cfg(test)]
impl Session {
    pub fn placeholder() -> Self {
        let now = chrono::Utc::now().fixed_offset();
        Session {
            circuit_key: 0,
            circuit_short_name: "Testname".to_string(),
            country_code: "ABC".to_string(),
            country_key: 0,
            country_name: "Testcountry".to_string(),
            date_end: now,
            date_start: now,
            gmt_offset: "00:00:00".to_string(),
            location: "Testlocation".to_string(),
            meeting_key: 0,
            session_key: 0,
            session_name: "Testsession".to_string(),
            session_type: "Testtype".to_string(),
            year: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_session_ignores_unknown_fields() {
        let body = r#"{
            "circuit_key": 61,
            "circuit_short_name": "Singapore",
            "country_code": "SGP",
            "country_key": 157,
            "country_name": "Singapore",
            "date_end": "2023-09-17T14:00:00+00:00",
            "date_start": "2023-09-17T12:00:00+00:00",
            "gmt_offset": "08:00:00",
            "location": "Marina Bay",
            "meeting_key": 1219,
            "session_key": 9165,
            "session_name": "Race",
            "session_type": "Race",
            "year": 2023,
            "is_cancelled": false
        }"#;
        let session: Session = serde_json::from_str(body).unwrap();
        assert_eq!(session.session_key, 9165);
        assert_eq!(session.meeting_key, 1219);
        assert_eq!(session.session_name, "Race");
        assert!(session.date_end > session.date_start);
    }

    #[test]
    fn missing_key_is_rejected() {
        let body = r#"{"session_name": "Race"}"#;
        assert!(serde_json::from_str::<Session>(body).is_err());
    }
}
