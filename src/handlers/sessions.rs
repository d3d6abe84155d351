use crate::{Meeting, OpenF1Client, Query, Resource, Result, Session};

impl OpenF1Client {
    /// Every session of the meeting identified by `meeting_key`.
    pub async fn get_sessions_for_meeting_key(&self, meeting_key: i64) -> Result<Vec<Session>> {
        let query = Query::new().eq("meeting_key", meeting_key);
        self.fetch(Resource::Sessions, &query.to_string()).await
    }

    pub async fn get_sessions_for_meeting(&self, meeting: &Meeting) -> Result<Vec<Session>> {
        self.get_sessions_for_meeting_key(meeting.meeting_key).await
    }

    pub async fn get_session_for_session_key(&self, session_key: i64) -> Result<Option<Session>> {
        let query = Query::new().eq("session_key", session_key);
        self.fetch_first(Resource::Sessions, &query.to_string()).await
    }

    /// The most recent session OpenF1 knows about, live or finished.
    pub async fn get_latest_session(&self) -> Result<Option<Session>> {
        let query = Query::new().eq("session_key", "latest");
        self.fetch_first(Resource::Sessions, &query.to_string()).await
    }

    /// Experimental: sends `query` to `/sessions` verbatim.
    pub async fn get_sessions_for_query(&self, query: &str) -> Result<Vec<Session>> {
        self.fetch(Resource::Sessions, query).await
    }
}
