use std::env;

/// Connection settings for the remote travel API.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    /// Read the API settings from the environment.
    ///
    /// `WANDER_API_BASE_URL` defaults to the hosted backend;
    /// `WANDER_API_TOKEN`, when set and non-empty, overrides any persisted
    /// session token.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("WANDER_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.wander-travel.example/v1".into());
        let token = env::var("WANDER_API_TOKEN")
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self { base_url, token }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}
