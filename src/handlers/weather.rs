use chrono::Duration;
use tracing::debug;

use crate::{
    utils::query::format_date, OpenF1Client, Query, Resource, Result, Session, Weather,
};

/// Width of the window after the session start searched for a weather sample.
pub const WEATHER_WINDOW_MINUTES: i64 = 5;

impl OpenF1Client {
    /// The first weather sample recorded within five minutes of the session
    /// start, or `None` if the window holds no samples.
    pub async fn get_weather_for_session(&self, session: &Session) -> Result<Option<Weather>> {
        let window_end = session.date_start + Duration::minutes(WEATHER_WINDOW_MINUTES);
        let query = Query::new()
            .eq("session_key", session.session_key)
            .gte("date", format_date(&session.date_start))
            .lte("date", format_date(&window_end));
        self.fetch_first(Resource::Weather, &query.to_string()).await
    }

    /// Resolves the session first, then looks up its weather: two requests,
    /// one after the other. An unknown `session_key` yields `None` without
    /// the second request.
    pub async fn get_weather_for_session_key(&self, session_key: i64) -> Result<Option<Weather>> {
        let Some(session) = self.get_session_for_session_key(session_key).await? else {
            debug!(session_key, "no session found, skipping weather lookup");
            return Ok(None);
        };
        self.get_weather_for_session(&session).await
    }

    /// Experimental: sends `query` to `/weather` verbatim.
    pub async fn get_weather_for_query(&self, query: &str) -> Result<Vec<Weather>> {
        self.fetch(Resource::Weather, query).await
    }
}
