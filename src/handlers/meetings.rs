use crate::{Meeting, OpenF1Client, Query, Resource, Result};

impl OpenF1Client {
    /// All meetings (race weekends, testing included) held in `year`.
    pub async fn get_meetings_for_year(&self, year: i32) -> Result<Vec<Meeting>> {
        let query = Query::new().eq("year", year);
        self.fetch(Resource::Meetings, &query.to_string()).await
    }

    /// The meeting identified by `meeting_key`, or `None` if OpenF1 has no
    /// such meeting.
    pub async fn get_meeting_for_meeting_key(&self, meeting_key: i64) -> Result<Option<Meeting>> {
        let query = Query::new().eq("meeting_key", meeting_key);
        self.fetch_first(Resource::Meetings, &query.to_string()).await
    }

    /// Experimental: sends `query` to `/meetings` verbatim. Prefer a typed
    /// accessor where one exists.
    pub async fn get_meetings_for_query(&self, query: &str) -> Result<Vec<Meeting>> {
        self.fetch(Resource::Meetings, query).await
    }
}
