//! Request building and response decoding for the todo service.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no state between calls.
//! Each operation is split into a `build_*` method producing an
//! `HttpRequest` and a `parse_*` method consuming an `HttpResponse`, so the
//! decode rules are testable with literal responses. The high-level
//! `fetch_all` / `fetch_one` / `create` / `mark_complete` / `remove` methods
//! compose the pair with `transport::send` for one round-trip each.
//!
//! Decode rules:
//! - Read path: 200 decodes the list envelope; an empty `results` is a
//!   NotFound, never an empty success. 404 maps to `NotFound` with the body
//!   text, any other non-200 to `InvalidResponse`.
//! - Write path: the caller names the one status that means success (201 for
//!   create, 204 for complete/delete); everything else follows the read
//!   path's 404/other mapping.

use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{ListResponse, Task};

#[derive(Serialize)]
struct NewTask<'a> {
    task: &'a str,
}

/// Synchronous client for the todo service.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // -- request construction ------------------------------------------------

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todo", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_view(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todo/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add(&self, task: &str) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(&NewTask { task })
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todo", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// `complete` is a bare query flag; its presence alone triggers the
    /// server-side mutation.
    pub fn build_complete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Patch,
            url: format!("{}/todo/{id}?complete", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todo/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    // -- response decoding ---------------------------------------------------

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Task>, ClientError> {
        read_items(response)
    }

    /// The service answers a single-item GET with the same list envelope;
    /// the first element is taken. The returned record is not cross-checked
    /// against the requested ID.
    pub fn parse_view(&self, response: HttpResponse) -> Result<Task, ClientError> {
        read_items(response)?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound("no results found".to_string()))
    }

    pub fn parse_add(&self, response: HttpResponse) -> Result<(), ClientError> {
        expect_status(response, 201)
    }

    pub fn parse_complete(&self, response: HttpResponse) -> Result<(), ClientError> {
        expect_status(response, 204)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ClientError> {
        expect_status(response, 204)
    }

    // -- one round-trip per call ---------------------------------------------

    pub fn fetch_all(&self) -> Result<Vec<Task>, ClientError> {
        self.parse_list(transport::send(&self.build_list())?)
    }

    pub fn fetch_one(&self, id: u64) -> Result<Task, ClientError> {
        self.parse_view(transport::send(&self.build_view(id))?)
    }

    pub fn create(&self, task: &str) -> Result<(), ClientError> {
        let req = self.build_add(task)?;
        self.parse_add(transport::send(&req)?)
    }

    pub fn mark_complete(&self, id: u64) -> Result<(), ClientError> {
        self.parse_complete(transport::send(&self.build_complete(id))?)
    }

    pub fn remove(&self, id: u64) -> Result<(), ClientError> {
        self.parse_delete(transport::send(&self.build_delete(id))?)
    }
}

/// Read-path decode: 200 with a non-empty result set, or a typed error.
fn read_items(response: HttpResponse) -> Result<Vec<Task>, ClientError> {
    if response.status != 200 {
        return Err(status_error(response));
    }

    let decoded: ListResponse =
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))?;

    if decoded.results.is_empty() {
        return Err(ClientError::NotFound("no results found".to_string()));
    }

    Ok(decoded.results)
}

/// Write-path decode: only `expected` means success; the body is the error
/// detail otherwise.
fn expect_status(response: HttpResponse, expected: u16) -> Result<(), ClientError> {
    if response.status == expected {
        return Ok(());
    }
    Err(status_error(response))
}

fn status_error(response: HttpResponse) -> ClientError {
    if response.status == 404 {
        ClientError::NotFound(response.body)
    } else {
        ClientError::InvalidResponse {
            status: response.status,
            body: response.body,
        }
    }
}
