pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: default_user_agent(),
        }
    }

    /// Reads `OPENF1_BASE_URL` and `OPENF1_USER_AGENT`, falling back to the
    /// public endpoint and the crate's own agent string.
    pub fn init() -> Self {
        let base_url =
            std::env::var("OPENF1_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent =
            std::env::var("OPENF1_USER_AGENT").unwrap_or_else(|_| default_user_agent());
        Config {
            user_agent,
            ..Config::new(base_url)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_BASE_URL)
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
