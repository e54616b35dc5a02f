//! # SessionFetcher: one credentialed request, one classified outcome
//!
//! [`SessionFetcher`] wraps a [`Transport`] and turns whatever comes back into a
//! [`FetchOutcome`]:
//!
//! | Response | Outcome |
//! |----------|---------|
//! | 2xx (and, for [`fetch_json`](SessionFetcher::fetch_json), a decodable body) | [`FetchOutcome::Ok`] |
//! | exactly 401 | [`FetchOutcome::Unauthorized`] |
//! | any other status | [`FetchOutcome::Failed`] with [`FetchError::Rejected`] |
//! | no response, an undecodable 2xx body, or a non-JSON failure body under `json_replies` | [`FetchOutcome::Failed`] with [`FetchError::Transport`] |
//!
//! Rejection messages prefer the `error` string of a JSON body and otherwise use
//! the call site's [`FailureMessages`]. A call site that expects JSON on every
//! reply ([`FailureMessages::json_replies`]) treats an unparsable failure body
//! as a transport failure too. The fetcher never navigates and never
//! retries; reacting to the outcome is the screen's business.

use serde::de::DeserializeOwned;

use serde_json::Value;

use crate::transport::{RawResponse, Request, Transport};

const UNAUTHORIZED: u16 = 401;

/// Fallback texts for one call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureMessages {
    /// Used for non-2xx responses without an `error` field.
    pub rejected: &'static str,
    /// Used when no usable response arrived.
    pub transport: &'static str,
    /// The endpoint answers every request with JSON; any other body, whatever
    /// the status, counts as no usable response.
    pub json_replies: bool,
}

impl FailureMessages {
    pub const FEED: Self = Self {
        rejected: "Failed to fetch news",
        transport: "Failed to fetch news",
        json_replies: false,
    };
    pub const LOGIN: Self = Self {
        rejected: "Login failed",
        transport: "Something went wrong",
        json_replies: true,
    };
    pub const LOGOUT: Self = Self {
        rejected: "Logout failed",
        transport: "Something went wrong",
        json_replies: false,
    };
}

/// Why a request did not succeed, phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status other than 401.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Network failure or a body that could not be decoded.
    #[error("{message}")]
    Transport { message: String },
}

/// Result of a single credentialed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Ok(T),
    /// Session absent or expired. `reason` is what a rejection would have said,
    /// for screens that display it rather than redirect.
    Unauthorized { reason: String },
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            Self::Ok(value) => FetchOutcome::Ok(f(value)),
            Self::Unauthorized { reason } => FetchOutcome::Unauthorized { reason },
            Self::Failed(err) => FetchOutcome::Failed(err),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub(crate) fn transport_failure(messages: FailureMessages) -> Self {
        Self::Failed(FetchError::Transport {
            message: messages.transport.to_string(),
        })
    }
}

/// Classify a raw response without touching its success body.
pub fn classify(response: RawResponse, messages: FailureMessages) -> FetchOutcome<String> {
    if response.is_success() {
        return FetchOutcome::Ok(response.body);
    }
    let reply = serde_json::from_str::<Value>(&response.body).ok();
    if messages.json_replies && reply.is_none() {
        return FetchOutcome::transport_failure(messages);
    }
    let message = reply
        .as_ref()
        .and_then(error_text)
        .unwrap_or_else(|| messages.rejected.to_string());
    if response.status == UNAUTHORIZED {
        FetchOutcome::Unauthorized { reason: message }
    } else {
        FetchOutcome::Failed(FetchError::Rejected {
            status: response.status,
            message,
        })
    }
}

/// The non-empty `error` string of a failure body, if it has one.
fn error_text(reply: &Value) -> Option<String> {
    reply
        .get("error")
        .and_then(Value::as_str)
        .filter(|error| !error.is_empty())
        .map(str::to_string)
}

/// Sends credentialed requests through a [`Transport`] and classifies the result.
#[derive(Clone, Debug)]
pub struct SessionFetcher<T> {
    transport: T,
}

impl<T: Transport> SessionFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send `request` once; a 2xx yields the raw body.
    pub async fn fetch(
        &self,
        request: Request,
        messages: FailureMessages,
    ) -> FetchOutcome<String> {
        tracing::debug!("{} {}", request.method, request.url);
        let url = request.url.clone();
        match self.transport.send(request).await {
            Ok(response) => {
                let outcome = classify(response, messages);
                if let FetchOutcome::Failed(err) = &outcome {
                    tracing::debug!("{} rejected: {:?}", url, err);
                }
                outcome
            }
            Err(err) => {
                tracing::warn!("Request to {} failed: {}", url, err);
                FetchOutcome::transport_failure(messages)
            }
        }
    }

    /// Send `request` once and decode a 2xx body as JSON.
    pub async fn fetch_json<D: DeserializeOwned>(
        &self,
        request: Request,
        messages: FailureMessages,
    ) -> FetchOutcome<D> {
        let url = request.url.clone();
        match self.fetch(request, messages).await {
            FetchOutcome::Ok(body) => match serde_json::from_str(&body) {
                Ok(value) => FetchOutcome::Ok(value),
                Err(err) => {
                    tracing::warn!("Undecodable body from {}: {}", url, err);
                    FetchOutcome::transport_failure(messages)
                }
            },
            FetchOutcome::Unauthorized { reason } => FetchOutcome::Unauthorized { reason },
            FetchOutcome::Failed(err) => FetchOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;
    use crate::models::NewsItem;
    use url::Url;

    fn feed_request() -> Request {
        Request::get(Url::parse("https://news.example/news-galore").unwrap())
    }

    #[test]
    fn test_classify_prefers_server_error_text() {
        let outcome = classify(
            RawResponse::new(400, r#"{"error":"bad creds"}"#),
            FailureMessages::LOGIN,
        );
        assert_eq!(
            outcome,
            FetchOutcome::Failed(FetchError::Rejected {
                status: 400,
                message: "bad creds".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_falls_back_when_body_is_not_json() {
        let outcome = classify(
            RawResponse::new(500, "<html>oops</html>"),
            FailureMessages::FEED,
        );
        assert_eq!(
            outcome,
            FetchOutcome::Failed(FetchError::Rejected {
                status: 500,
                message: "Failed to fetch news".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_json_replies_reject_unparsable_failure_body() {
        for status in [401, 500] {
            let outcome = classify(
                RawResponse::new(status, "Internal Server Error"),
                FailureMessages::LOGIN,
            );
            assert_eq!(
                outcome,
                FetchOutcome::Failed(FetchError::Transport {
                    message: "Something went wrong".to_string(),
                })
            );
        }

        let outcome = classify(
            RawResponse::new(500, r#"{"detail":"boom"}"#),
            FailureMessages::LOGIN,
        );
        assert_eq!(
            outcome,
            FetchOutcome::Failed(FetchError::Rejected {
                status: 500,
                message: "Login failed".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_empty_error_uses_fallback() {
        let outcome = classify(RawResponse::new(403, r#"{"error":""}"#), FailureMessages::LOGIN);
        assert_eq!(
            outcome,
            FetchOutcome::Failed(FetchError::Rejected {
                status: 403,
                message: "Login failed".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_401_is_unauthorized_not_failure() {
        let outcome = classify(
            RawResponse::new(401, r#"{"error":"expired"}"#),
            FailureMessages::FEED,
        );
        assert_eq!(
            outcome,
            FetchOutcome::Unauthorized {
                reason: "expired".to_string()
            }
        );

        let outcome = classify(RawResponse::new(401, ""), FailureMessages::LOGOUT);
        assert_eq!(
            outcome,
            FetchOutcome::Unauthorized {
                reason: "Logout failed".to_string()
            }
        );
    }

    #[test]
    fn test_classify_other_4xx_is_failure() {
        let outcome = classify(RawResponse::new(403, ""), FailureMessages::FEED);
        assert!(matches!(
            outcome,
            FetchOutcome::Failed(FetchError::Rejected { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_json_decodes_success() {
        let transport = MemoryTransport::new();
        transport.respond(200, r#"[{"title":"A","url":"http://a"}]"#);
        let fetcher = SessionFetcher::new(transport.clone());

        let outcome: FetchOutcome<Vec<NewsItem>> =
            fetcher.fetch_json(feed_request(), FailureMessages::FEED).await;

        assert_eq!(
            outcome,
            FetchOutcome::Ok(vec![NewsItem {
                title: "A".to_string(),
                url: "http://a".to_string(),
            }])
        );
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_json_parse_failure_is_transport_failure() {
        let transport = MemoryTransport::new();
        transport.respond(200, "not json");
        let fetcher = SessionFetcher::new(transport);

        let outcome: FetchOutcome<Vec<NewsItem>> =
            fetcher.fetch_json(feed_request(), FailureMessages::FEED).await;

        assert_eq!(
            outcome,
            FetchOutcome::Failed(FetchError::Transport {
                message: "Failed to fetch news".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_network_failure_uses_transport_fallback() {
        let transport = MemoryTransport::new();
        transport.fail("connection refused");
        let fetcher = SessionFetcher::new(transport);

        let outcome = fetcher.fetch(feed_request(), FailureMessages::LOGIN).await;

        assert_eq!(
            outcome,
            FetchOutcome::Failed(FetchError::Transport {
                message: "Something went wrong".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_no_retry_after_failure() {
        let transport = MemoryTransport::new();
        transport.respond(503, "").respond(200, "[]");
        let fetcher = SessionFetcher::new(transport.clone());

        let outcome = fetcher.fetch(feed_request(), FailureMessages::FEED).await;

        assert!(!outcome.is_ok());
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_map_preserves_failures() {
        let outcome: FetchOutcome<String> = FetchOutcome::Unauthorized {
            reason: "x".to_string(),
        };
        assert_eq!(
            outcome.map(|_| ()),
            FetchOutcome::Unauthorized {
                reason: "x".to_string()
            }
        );
        assert_eq!(
            FetchOutcome::Ok("body".to_string()).map(|b| b.len()),
            FetchOutcome::Ok(4)
        );
    }
}
