use crate::{OpenF1Client, Query, RaceControl, Resource, Result, Session};

impl OpenF1Client {
    pub async fn get_race_control_for_session_key(
        &self,
        session_key: i64,
    ) -> Result<Vec<RaceControl>> {
        let query = Query::new().eq("session_key", session_key);
        self.fetch(Resource::RaceControl, &query.to_string()).await
    }

    pub async fn get_race_control_for_session(
        &self,
        session: &Session,
    ) -> Result<Vec<RaceControl>> {
        self.get_race_control_for_session_key(session.session_key)
            .await
    }

    /// Race control events of a session up to and including lap `lap`.
    /// Events without a lap number are left out by the API.
    pub async fn get_race_control_for_session_key_until_lap(
        &self,
        session_key: i64,
        lap: i64,
    ) -> Result<Vec<RaceControl>> {
        let query = Query::new()
            .eq("session_key", session_key)
            .lte("lap_number", lap);
        self.fetch(Resource::RaceControl, &query.to_string()).await
    }

    pub async fn get_race_control_for_session_until_lap(
        &self,
        session: &Session,
        lap: i64,
    ) -> Result<Vec<RaceControl>> {
        self.get_race_control_for_session_key_until_lap(session.session_key, lap)
            .await
    }

    /// Experimental: sends `query` to `/race_control` verbatim, e.g.
    /// `flag=BLACK AND WHITE&driver_number=1`.
    pub async fn get_race_control_for_query(&self, query: &str) -> Result<Vec<RaceControl>> {
        self.fetch(Resource::RaceControl, query).await
    }
}
