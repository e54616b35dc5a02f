//! # API crate: session-authenticated access to the news backend
//!
//! Everything the screens in the `ui` crate need to talk to the backend, with
//! no UI of its own. The backend keeps the session in an opaque cookie; this
//! crate never reads it, it only guarantees that every request carries it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`ClientConfig`]: backend URL, endpoint paths, logout method |
//! | [`transport`] | The [`Transport`] trait, [`Request`] and [`RawResponse`] |
//! | `http` | [`HttpTransport`], the credential-bearing `reqwest` transport |
//! | `memory` | [`MemoryTransport`], scripted responses for tests |
//! | [`fetcher`] | [`SessionFetcher`] and the [`FetchOutcome`] classification |
//! | [`models`] | [`NewsItem`] and [`Credentials`] |
//!
//! ## Endpoints
//!
//! [`NewsClient`] exposes one method per backend call:
//! `news_feed` (`GET /news-galore`), `login` (`POST /login`), `logout`
//! (`GET /logout` by default) and `google_login_url` (`/auth/google`, visited
//! by full-page navigation rather than fetched).

pub mod config;
pub mod fetcher;
pub mod models;
pub mod transport;

mod client;
mod http;
mod memory;

pub use client::NewsClient;
pub use config::{ClientConfig, Endpoints};
pub use fetcher::{FailureMessages, FetchError, FetchOutcome, SessionFetcher};
pub use http::HttpTransport;
pub use memory::MemoryTransport;
pub use models::{Credentials, NewsItem};
pub use transport::{Method, RawResponse, Request, Transport, TransportError};

/// The client every screen uses in a running app.
pub type AppClient = NewsClient<HttpTransport>;

/// Build an [`AppClient`] from the layered configuration.
pub fn connect() -> AppClient {
    NewsClient::new(HttpTransport::new(), ClientConfig::load_or_default())
}
