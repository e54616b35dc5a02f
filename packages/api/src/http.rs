//! `reqwest`-backed [`Transport`].
//!
//! - **Web** (WASM): `reqwest` drives the browser `fetch` API; every request is
//!   sent with `credentials: include` so the browser attaches the session cookie.
//! - **Desktop** (native): the client owns a cookie jar, so the cookie set by
//!   `/login` rides along on every later request made through this transport.

use crate::transport::{Method, RawResponse, Request, Transport, TransportError};

/// Credential-bearing HTTP transport. Cheap to clone; clones share the cookie jar.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    // A client that failed to build surfaces as a transport failure on send.
    client: Result<reqwest::Client, TransportError>,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = build_client().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            TransportError::from(e)
        });
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().cookie_store(true).build()
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().build()
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        let client = self.client.as_ref().map_err(Clone::clone)?;

        let mut builder = client.request(request.method.into(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
