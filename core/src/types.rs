//! Wire DTOs for the todo service.
//!
//! # Design
//! Field names on the wire are PascalCase (`Task`, `Done`, `CreatedAt`,
//! `CompletedAt`) and timestamps are RFC 3339, matching what the service
//! actually serves. `CompletedAt` is always present; when a task is not done
//! the server sends the zero timestamp (`0001-01-01T00:00:00Z`), so the field
//! is only meaningful alongside `done == true`.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single todo item as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    pub task: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub completed_at: OffsetDateTime,
}

/// Envelope the service wraps every read response in.
///
/// `date` and `total_results` are decoded but not interpreted by the client;
/// only `results` carries meaning here.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub results: Vec<Task>,
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub total_results: usize,
}
