use crate::{Driver, OpenF1Client, Query, Resource, Result, Session};

impl OpenF1Client {
    /// The drivers entered in the session identified by `session_key`.
    pub async fn get_drivers_for_session_key(&self, session_key: i64) -> Result<Vec<Driver>> {
        let query = Query::new().eq("session_key", session_key);
        self.fetch(Resource::Drivers, &query.to_string()).await
    }

    pub async fn get_drivers_for_session(&self, session: &Session) -> Result<Vec<Driver>> {
        self.get_drivers_for_session_key(session.session_key).await
    }

    /// Experimental: sends `query` to `/drivers` verbatim, e.g.
    /// `driver_number=1&session_key=9158`.
    pub async fn get_drivers_for_query(&self, query: &str) -> Result<Vec<Driver>> {
        self.fetch(Resource::Drivers, query).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{mock_client, pairs, received_queries};
    use crate::{Driver, Session};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn drivers_for_session() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/v1/drivers"))
            .and(query_param("session_key", "9158"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "broadcast_name": "M VERSTAPPEN",
                "country_code": "NED",
                "driver_number": 1,
                "first_name": "Max",
                "full_name": "Max VERSTAPPEN",
                "headshot_url": "https://www.formula1.com/content/dam/fom-website/drivers/M/MAXVER01_Max_Verstappen/maxver01.png",
                "last_name": "Verstappen",
                "meeting_key": 1219,
                "name_acronym": "VER",
                "session_key": 9158,
                "team_colour": "3671C6",
                "team_name": "Red Bull Racing"
            }])))
            .expect(2)
            .mount(&server)
            .await;

        let mut session = Session::placeholder();
        session.session_key = 9158;

        let drivers = client.get_drivers_for_session(&session).await.unwrap();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].name_acronym, "VER");
        assert_eq!(drivers, client.get_drivers_for_session_key(9158).await.unwrap());

        let queries = received_queries(&server).await;
        assert_eq!(queries, vec![pairs(&[("session_key", "9158")]); 2]);
    }

    #[tokio::test]
    async fn reserve_driver_without_team_details() {
        let (server, client) = mock_client().await;
        let mut reserve = Driver::placeholder();
        reserve.driver_number = 40;
        reserve.session_key = 9158;
        reserve.team_name = None;
        reserve.team_colour = None;
        reserve.headshot_url = None;
        Mock::given(method("GET"))
            .and(path("/v1/drivers"))
            .and(query_param("session_key", "9158"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([reserve])))
            .mount(&server)
            .await;

        let drivers = client.get_drivers_for_session_key(9158).await.unwrap();
        assert_eq!(drivers, vec![reserve]);
        assert!(drivers[0].team_name.is_none());
    }

    #[tokio::test]
    async fn raw_driver_query() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/v1/drivers"))
            .and(query_param("driver_number", "44"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let drivers = client
            .get_drivers_for_query("driver_number=44&session_key=9158")
            .await
            .unwrap();
        assert!(drivers.is_empty());
    }
}
