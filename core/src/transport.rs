//! Executes `HttpRequest` values with ureq.
//!
//! # Design
//! The only module that performs network I/O. ureq's status-code-as-error
//! behavior is disabled so 4xx/5xx responses come back as data and status
//! interpretation stays in the decode paths. Any ureq-level failure means no
//! HTTP exchange completed, so it maps to `ClientError::Connection`.

use std::time::Duration;

use log::debug;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Fixed per-request timeout. Expiry surfaces as `Connection`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Execute one request and return the raw status and body.
pub fn send(req: &HttpRequest) -> Result<HttpResponse, ClientError> {
    debug!("{} {}", req.method, req.url);

    let agent: ureq::Agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .new_agent();

    let result = match (&req.method, &req.body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&req.url), &req.headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&req.url), &req.headers).call(),
        (HttpMethod::Patch, Some(body)) => {
            with_headers(agent.patch(&req.url), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => with_headers(agent.patch(&req.url), &req.headers).send_empty(),
        (HttpMethod::Post, Some(body)) => {
            with_headers(agent.post(&req.url), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&req.url), &req.headers).send_empty(),
    };

    let mut response = result.map_err(|e| ClientError::Connection(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ClientError::Connection(e.to_string()))?;

    Ok(HttpResponse { status, body })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
