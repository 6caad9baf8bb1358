//! HTTP wire types and the transport seam.
//!
//! # Design
//! Requests and responses are described as plain data. `HeroClient` builds
//! `HttpRequest` values and parses `HttpResponse` values; the injected
//! [`Transport`] is the only place real I/O happens. This keeps request
//! building and response parsing deterministic and testable without a
//! network, and lets tests substitute a scripted transport.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved into
//! whatever executor the transport uses without lifetime concerns.

use std::future::Future;
use std::sync::Arc;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `HeroClient` and handed to the [`Transport`] for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the [`Transport`] after executing an `HttpRequest`, then
/// handed back to `HeroClient` for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single HTTP round-trip.
///
/// Implementations own all I/O policy: connection handling, timeouts, TLS.
/// `HeroClient` imposes none of its own — a single failed attempt ends the
/// operation. Network-level failures are reported as
/// [`ApiError::Transport`]; a non-2xx status is NOT an error at this layer
/// and must be returned as a normal `HttpResponse`.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

/// A shared transport is still a transport.
impl<T: Transport + Send + Sync> Transport for Arc<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        (**self).execute(request)
    }
}
