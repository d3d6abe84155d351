//! # openf1
//!
//! Typed async client for the [OpenF1](https://openf1.org) motorsport
//! telemetry API.
//!
//! Every accessor is a single GET against `https://api.openf1.org/v1/<resource>`
//! whose JSON array body is deserialized into one of the record types in
//! [`models`]. There is no caching, retrying or pagination; a failed request
//! surfaces as [`OpenF1Error`].
//!
//! ```no_run
//! # async fn run() -> openf1::Result<()> {
//! let client = openf1::OpenF1Client::new()?;
//! for meeting in client.get_meetings_for_year(2023).await? {
//!     let sessions = client.get_sessions_for_meeting(&meeting).await?;
//!     println!("{}: {} sessions", meeting.meeting_name, sessions.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod handlers;
pub mod models;
pub mod utils;

use std::fmt;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::from_str;
use tracing::{debug, trace, warn};

pub use models::{
    driver::Driver,
    error::{OpenF1Error, Result},
    meeting::Meeting,
    race_control::RaceControl,
    session::Session,
    weather::Weather,
};
pub use utils::{config::Config, query::Query};

/// Path segment of each OpenF1 resource this client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Meetings,
    Sessions,
    Drivers,
    Weather,
    RaceControl,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Meetings => "meetings",
            Resource::Sessions => "sessions",
            Resource::Drivers => "drivers",
            Resource::Weather => "weather",
            Resource::RaceControl => "race_control",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to the OpenF1 API. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct OpenF1Client {
    config: Config,
    http_client: Client,
}

impl OpenF1Client {
    /// Builds a client from [`Config::init`], i.e. from the environment.
    ///
    /// `OPENF1_BASE_URL`, when set, redirects every request this client makes;
    /// `OPENF1_USER_AGENT` replaces the `User-Agent` header. Use
    /// [`from_config`](Self::from_config) to ignore the environment.
    pub fn new() -> Result<Self> {
        Self::from_config(Config::init())
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let http_client = Client::builder().user_agent(config.user_agent.as_str()).build()?;
        Ok(OpenF1Client {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issues `GET <base_url>/<resource>?<query>` and parses the body as an
    /// array of `T`. The query is sent as given.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        resource: Resource,
        query: &str,
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}?{}", self.config.base_url, resource, query);
        debug!(%resource, query, "querying OpenF1");

        let res = self.http_client.get(&url).send().await.map_err(|err| {
            warn!(%resource, query, error = %err, "OpenF1 request failed");
            err
        })?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            warn!(%resource, query, %status, "OpenF1 returned an error status");
            return Err(OpenF1Error::Api { status, body });
        }

        let records: Vec<T> = from_str(&body).map_err(|err| {
            warn!(%resource, query, error = %err, "unexpected OpenF1 response body");
            err
        })?;
        trace!(%resource, count = records.len(), "OpenF1 response parsed");
        Ok(records)
    }

    /// Like [`fetch`](Self::fetch), keeping only the first record.
    pub(crate) async fn fetch_first<T: DeserializeOwned>(
        &self,
        resource: Resource,
        query: &str,
    ) -> Result<Option<T>> {
        Ok(self.fetch(resource, query).await?.into_iter().next())
    }
}
