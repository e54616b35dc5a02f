use url::Url;

use crate::config::ClientConfig;
use crate::fetcher::{FailureMessages, FetchOutcome, SessionFetcher};
use crate::models::{Credentials, NewsItem};
use crate::transport::{Request, Transport};

/// Typed access to the news backend's endpoints.
///
/// Every call goes through the same [`SessionFetcher`], so every call carries
/// the session cookie.
#[derive(Clone, Debug)]
pub struct NewsClient<T> {
    fetcher: SessionFetcher<T>,
    config: ClientConfig,
}

impl<T: Transport> NewsClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            fetcher: SessionFetcher::new(transport),
            config,
        }
    }

    /// `GET /news-galore`: the signed-in user's recommendations.
    pub async fn news_feed(&self) -> FetchOutcome<Vec<NewsItem>> {
        let messages = FailureMessages::FEED;
        let Some(url) = self.resolve(&self.config.endpoints.feed) else {
            return FetchOutcome::transport_failure(messages);
        };
        self.fetcher.fetch_json(Request::get(url), messages).await
    }

    /// `POST /login` with a JSON credentials body. The reply must be JSON, but
    /// its content is not used.
    pub async fn login(&self, credentials: &Credentials) -> FetchOutcome<()> {
        let messages = FailureMessages::LOGIN;
        let Some(url) = self.resolve(&self.config.endpoints.login) else {
            return FetchOutcome::transport_failure(messages);
        };
        let request = match Request::post(url).json(credentials) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Failed to encode credentials: {}", e);
                return FetchOutcome::transport_failure(messages);
            }
        };
        self.fetcher
            .fetch_json::<serde_json::Value>(request, messages)
            .await
            .map(|_| ())
    }

    /// Ends the session with the configured logout method and no body.
    pub async fn logout(&self) -> FetchOutcome<()> {
        let messages = FailureMessages::LOGOUT;
        let Some(url) = self.resolve(&self.config.endpoints.logout) else {
            return FetchOutcome::transport_failure(messages);
        };
        let request = Request::new(self.config.logout_method, url);
        self.fetcher.fetch(request, messages).await.map(|_| ())
    }

    /// Where the browser goes to start the Google sign-in flow.
    pub fn google_login_url(&self) -> Result<Url, url::ParseError> {
        self.config.endpoint(&self.config.endpoints.google_auth)
    }

    fn resolve(&self, path: &str) -> Option<Url> {
        self.config
            .endpoint(path)
            .map_err(|e| tracing::warn!("Bad endpoint {}{}: {}", self.config.backend_url, path, e))
            .ok()
    }
}
