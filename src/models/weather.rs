use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::bool_from_int;

/// One weather sample, taken roughly every minute during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub air_temperature: f64,
    pub date: DateTime<FixedOffset>,
    pub humidity: f64,
    pub meeting_key: i64,
    pub pressure: f64,
    #[serde(deserialize_with = "bool_from_int")]
    pub rainfall: bool,
    pub session_key: i64,
    pub track_temperature: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
}

#[cfg(test)]
impl Weather {
    pub fn placeholder() -> Self {
        Weather {
            air_temperature: 0.0,
            date: chrono::Utc::now().fixed_offset(),
            humidity: 0.0,
            meeting_key: 0,
            pressure: 0.0,
            rainfall: false,
            session_key: 0,
            track_temperature: 0.0,
            wind_direction: 0.0,
            wind_speed: 0.0,
        }
    }
}
