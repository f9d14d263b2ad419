//! reqwest-backed [`HttpPort`] adapter.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Method, header, redirect};
use tracing::{debug, warn};

use crate::domain::entities::SessionCookie;
use crate::domain::errors::ApiError;
use crate::domain::ports::{HttpMethod, HttpPort, HttpRequest, HttpResponse};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// JSON client bound to one service root.
///
/// Carries the session cookie on every request once one is known. Redirects
/// are not followed: a signed-out call answered with `302` to the login page
/// surfaces as that status.
pub struct ReqwestHttpClient {
    client: Client,
    base_url: String,
    session: RwLock<Option<SessionCookie>>,
}

impl ReqwestHttpClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    #[must_use]
    pub fn with_session(self, session: Option<SessionCookie>) -> Self {
        *self.session.write() = session;
        self
    }

    /// Replaces the session sent with subsequent requests.
    pub fn set_session(&self, session: Option<SessionCookie>) {
        *self.session.write() = session;
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    fn map_transport_error(e: &reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::network("request timed out")
        } else if e.is_connect() {
            ApiError::network("failed to connect to the Meeting Notes server")
        } else {
            ApiError::network(e.to_string())
        }
    }
}

const fn to_reqwest(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Keeps the `name=value` part of each `Set-Cookie` header.
fn cookie_pairs(headers: &header::HeaderMap) -> Vec<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .map(str::to_string)
        .collect()
}

fn parse_body(bytes: &[u8]) -> Option<serde_json::Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(bytes).ok()
}

#[async_trait]
impl HttpPort for ReqwestHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url_for(&request.path);
        debug!(method = %request.method, %url, "Sending request");

        let mut builder = self
            .client
            .request(to_reqwest(request.method), &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(session) = self.session.read().as_ref() {
            builder = builder.header(header::COOKIE, session.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, %url, "Request failed");
            Self::map_transport_error(&e)
        })?;

        let status = response.status().as_u16();
        let cookies = cookie_pairs(response.headers());
        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, %url, "Failed to read response body");
            Self::map_transport_error(&e)
        })?;

        debug!(status, len = bytes.len(), "Received response");
        Ok(HttpResponse::new(status, parse_body(&bytes)).with_cookies(cookies))
    }
}
