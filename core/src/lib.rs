//! Synchronous client for the remote task-list service.
//!
//! # Overview
//! Translates command intents (list, view, add, complete, delete) into HTTP
//! requests, interprets status codes and JSON payloads into a typed
//! error/result model, and renders results as formatted text.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`; every invocation
//!   fetches fresh state and nothing is cached across calls.
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), with `transport::send` as the
//!   single I/O point between them. One request per command, 10 s timeout,
//!   no retries.
//! - Actions write exclusively to an injected `Write` sink, so tests run
//!   against in-memory buffers.
//! - `ClientError` is a closed enum; callers branch on kind, not on message
//!   text.

pub mod actions;
pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ListResponse, Task};
