//! HTTP transport port definition.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single JSON request relative to the service root.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path plus query string, e.g. `/api/meetings?search=foo&`.
    pub path: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response as seen by the helpers: status plus whatever JSON the body held.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Parsed body; `None` when the body was empty or not JSON.
    pub body: Option<Value>,
    /// `name=value` pairs from `Set-Cookie` headers.
    pub cookies: Vec<String>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: u16, body: Option<Value>) -> Self {
        Self {
            status,
            body,
            cookies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cookies(mut self, cookies: Vec<String>) -> Self {
        self.cookies = cookies;
        self
    }

    /// Mirrors `Response.ok`: any 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the `error` string of a JSON error payload.
    #[must_use]
    pub fn error_field(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
    }
}

/// Port for sending requests to the Meeting Notes service.
#[async_trait]
pub trait HttpPort: Send + Sync {
    /// Sends one request. Only transport failures are errors; any status is `Ok`.
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::collections::VecDeque;

    /// Scripted transport that replays queued outcomes and records requests.
    #[derive(Default)]
    pub struct MockHttpPort {
        responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockHttpPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: Value) -> Self {
            self.responses
                .lock()
                .push_back(Ok(HttpResponse::new(status, Some(body))));
            self
        }

        pub fn respond_with(self, response: HttpResponse) -> Self {
            self.responses.lock().push_back(Ok(response));
            self
        }

        pub fn fail(self, error: ApiError) -> Self {
            self.responses.lock().push_back(Err(error));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().clone()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.requests.lock().last().cloned()
        }
    }

    #[async_trait]
    impl HttpPort for MockHttpPort {
        async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.lock().push(request);
            self.responses
                .lock()
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse::new(200, Some(json!({})))))
        }
    }
}
