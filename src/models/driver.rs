use serde::{Deserialize, Serialize};

/// A driver's identity and team for one session. OpenF1 leaves several of
/// these blank for reserve drivers, hence the options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub broadcast_name: String,
    pub country_code: Option<String>,
    pub driver_number: i64,
    pub first_name: Option<String>,
    pub full_name: String,
    pub headshot_url: Option<String>,
    pub last_name: Option<String>,
    pub meeting_key: i64,
    pub name_acronym: String,
    pub session_key: i64,
    pub team_colour: Option<String>,
    pub team_name: Option<String>,
}

#[cfg(test)]
impl Driver {
    pub fn placeholder() -> Self {
        Driver {
            broadcast_name: "Testbname".to_string(),
            country_code: Some("ABC".to_string()),
            driver_number: 0,
            first_name: Some("Test First Name".to_string()),
            full_name: "Test Full Name".to_string(),
            headshot_url: Some("http://example.com/headshot.jpg".to_string()),
            last_name: Some("Test Last Name".to_string()),
            meeting_key: 0,
            name_acronym: "TST".to_string(),
            session_key: 0,
            team_colour: Some("FFFFFF".to_string()),
            team_name: Some("Test Team".to_string()),
        }
    }
}
