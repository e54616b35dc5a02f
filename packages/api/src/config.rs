//! # Client configuration
//!
//! Where the backend lives and which paths it serves. Loaded with the `config`
//! crate from, in increasing priority:
//!
//! 1. built-in defaults (the hosted backend and its well-known paths),
//! 2. `news-client.toml` in the working directory (native only, optional),
//! 3. `NEWS_*` environment variables, `__` separating nested keys (native only),
//! 4. the compile-time `NEWS_BACKEND_URL` (WASM, where there is no environment).
//!
//! ```toml
//! backend_url = "http://localhost:5000"
//! logout_method = "POST"
//!
//! [endpoints]
//! feed = "/news-galore"
//! ```

use config::{Config, ConfigError};
use serde::Deserialize;
use url::Url;

use crate::transport::Method;

pub const DEFAULT_BACKEND_URL: &str = "https://news-recommender-backend-20d530136c15.herokuapp.com";

/// Backend paths, relative to [`ClientConfig::backend_url`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Endpoints {
    pub feed: String,
    pub login: String,
    pub logout: String,
    pub google_auth: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            feed: "/news-galore".into(),
            login: "/login".into(),
            logout: "/logout".into(),
            google_auth: "/auth/google".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
    pub endpoints: Endpoints,
    /// The backend has answered logout on both GET and POST; GET unless told otherwise.
    pub logout_method: Method,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            endpoints: Endpoints::default(),
            logout_method: Method::Get,
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the optional config file.
    pub fn filename() -> &'static str {
        "news-client.toml"
    }

    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Endpoints::default();
        let builder = Config::builder()
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .set_default("endpoints.feed", defaults.feed)?
            .set_default("endpoints.login", defaults.login)?
            .set_default("endpoints.logout", defaults.logout)?
            .set_default("endpoints.google_auth", defaults.google_auth)?
            .set_default("logout_method", "GET")?;

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .add_source(
                config::File::with_name(Self::filename())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("NEWS")
                    .prefix_separator("_")
                    .separator("__"),
            );

        #[cfg(target_arch = "wasm32")]
        let builder = builder.set_override_option("backend_url", option_env!("NEWS_BACKEND_URL"))?;

        builder.build()?.try_deserialize()
    }

    /// [`load`](Self::load), falling back to the defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Invalid client configuration, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    pub fn with_logout_method(mut self, method: Method) -> Self {
        self.logout_method = method;
        self
    }

    /// Resolve `path` against the backend URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&self.backend_url)?.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::{remove_var, set_var};

    #[test]
    fn test_endpoint_resolution() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint(&config.endpoints.feed).unwrap().as_str(),
            "https://news-recommender-backend-20d530136c15.herokuapp.com/news-galore"
        );

        let local = ClientConfig::default().with_backend_url("http://localhost:5000");
        assert_eq!(
            local.endpoint("/auth/google").unwrap().as_str(),
            "http://localhost:5000/auth/google"
        );
    }

    #[test]
    fn test_invalid_backend_url() {
        let config = ClientConfig::default().with_backend_url("not a url");
        assert!(config.endpoint("/login").is_err());
    }

    #[test]
    fn test_settings_from_environment() {
        set_var("NEWS_BACKEND_URL", "http://localhost:5000");
        set_var("NEWS_ENDPOINTS__FEED", "/feed");
        set_var("NEWS_LOGOUT_METHOD", "POST");
        let config = ClientConfig::load().unwrap_or_default();
        remove_var("NEWS_BACKEND_URL");
        remove_var("NEWS_ENDPOINTS__FEED");
        remove_var("NEWS_LOGOUT_METHOD");

        println!("Config = {:?}", config);
        assert_eq!(config.backend_url, "http://localhost:5000");
        assert_eq!(config.endpoints.feed, "/feed");
        assert_eq!(config.endpoints.login, "/login");
        assert_eq!(config.logout_method, Method::Post);
    }
}
