//! HTTP transport port: sends one JSON request, returns status and body.

use std::future::Future;

use backup_console_domain::error::ConsoleError;
use serde_json::Value;

/// HTTP verbs used by the backup API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Upper-case verb, as sent on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-resolved request.
///
/// Every request carries `Content-Type: application/json`; `body` is never
/// sent with [`Method::Get`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the `Authorization` header, if the call is authenticated.
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Raw response: status code and undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the network.
pub trait HttpTransport {
    /// Send `request` and wait for the full response.
    ///
    /// Only transport-level failures are errors; any HTTP status, including
    /// 4xx and 5xx, is returned as an [`ApiResponse`].
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ConsoleError>>;
}
