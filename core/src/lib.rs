//! Asynchronous API client core for the hero service.
//!
//! # Overview
//! `HeroClient` exposes list/get/create/update/delete/search operations on
//! the `api/heroes` collection. The actual I/O is delegated to an injected
//! [`Transport`]; human-readable status lines go to an injected
//! [`Notifier`]; raw errors go to a [`DiagnosticSink`].
//!
//! # Design
//! - `HeroClient` is stateless between calls — one request, one response,
//!   no cache, no retries.
//! - Failures are swallowed at the call site: every operation resolves with
//!   a value or a documented fallback (empty list / `None`), never an error.
//! - Request building and response parsing are deterministic and separate
//!   from the transport, so the wire contract is testable without a network.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod notify;
pub mod types;

pub use client::HeroClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notify::{DiagnosticSink, MessageLog, Notifier, TracingDiagnostics};
pub use types::{Hero, NewHero};
