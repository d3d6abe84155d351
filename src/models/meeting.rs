use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A Grand Prix weekend at one circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub circuit_key: i64,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: i64,
    pub country_name: String,
    pub date_start: DateTime<FixedOffset>,
    pub gmt_offset: String,
    pub location: String,
    pub meeting_key: i64,
    pub meeting_name: String,
    pub meeting_official_name: String,
    pub year: i32,
}

#[cfg(test)]
impl Meeting {
    pub fn placeholder() -> Self {
        Meeting {
            circuit_key: 0,
            circuit_short_name: "Testname".to_string(),
            country_code: "ABC".to_string(),
            country_key: 0,
            country_name: "Testcountry".to_string(),
            date_start: chrono::Utc::now().fixed_offset(),
            gmt_offset: "00:00:00".to_string(),
            location: "Testlocation".to_string(),
            meeting_key: 0,
            meeting_name: "Testmeeting".to_string(),
            meeting_official_name: "Testofficialname".to_string(),
            year: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "circuit_key": 61,
        "circuit_short_name": "Singapore",
        "country_code": "SGP",
        "country_key": 157,
        "country_name": "Singapore",
        "date_start": "2023-09-15T09:30:00+00:00",
        "gmt_offset": "08:00:00",
        "location": "Marina Bay",
        "meeting_key": 1219,
        "meeting_name": "Singapore Grand Prix",
        "meeting_official_name": "FORMULA 1 SINGAPORE AIRLINES SINGAPORE GRAND PRIX 2023",
        "year": 2023
    }"#;

    #[test]
    fn parse_meeting() {
        let meeting: Meeting = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(meeting.meeting_key, 1219);
        assert_eq!(meeting.circuit_key, 61);
        assert_eq!(meeting.year, 2023);
        assert_eq!(meeting.location, "Marina Bay");
        assert_eq!(meeting.date_start.to_rfc3339(), "2023-09-15T09:30:00+00:00");
    }

    #[test]
    fn placeholder_uses_zero_keys() {
        let meeting = Meeting::placeholder();
        assert_eq!(meeting.meeting_key, 0);
        assert_eq!(meeting.country_code, "ABC");
    }
}
