//! The pluggable I/O seam between `AccountClient` and the network.
//!
//! # Design
//! `Transport` bundles the five steps every operation goes through: build a
//! request, encode a payload, send, read the response body, decode it. All
//! but `execute` have default implementations (`url` validation, `serde_json`,
//! `read_to_end`), so a test double overrides only the step it wants to
//! break. The transport is a value owned by each client rather than shared
//! global state, so independent clients never observe each other's fakes.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, ResponseBody};

pub trait Transport {
    /// Construct a request without sending it.
    fn build_request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, ApiError> {
        url::Url::parse(url).map_err(|e| ApiError::RequestBuildError(format!("{url}: {e}")))?;
        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body,
        })
    }

    fn serialize<V: Serialize + ?Sized>(&self, value: &V) -> Result<Vec<u8>, ApiError> {
        serde_json::to_vec(value).map_err(|e| ApiError::SerializationError(e.to_string()))
    }

    fn deserialize<V: DeserializeOwned>(&self, bytes: &[u8]) -> Result<V, ApiError> {
        serde_json::from_slice(bytes).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn read_body(&self, body: &mut ResponseBody) -> Result<Vec<u8>, ApiError> {
        let mut bytes = Vec::new();
        body.read_to_end(&mut bytes)
            .map_err(|e| ApiError::IoError(e.to_string()))?;
        Ok(bytes)
    }

    /// Send `request` exactly once. Every status code is returned as a
    /// response; only failures to obtain one are errors.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent.
///
/// Status-code-as-error is disabled so 4xx/5xx responses come back as data.
/// No timeouts are configured beyond ureq's own defaults.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
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

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&request.url), &request.headers).call(),
            (HttpMethod::Delete, _) => {
                with_headers(self.agent.delete(&request.url), &request.headers).call()
            }
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&request.url), &request.headers).send(body.as_slice())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(&request.url), &request.headers).send_empty()
            }
        };
        let response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;

        let (parts, body) = response.into_parts();
        let headers = parts
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let status = parts.status.as_u16();
        debug!(status, "received response");

        Ok(HttpResponse {
            status,
            headers,
            body: ResponseBody::new(body.into_reader()),
        })
    }
}
