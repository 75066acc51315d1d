//! Scripted `Transport` double shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, ResponseBody};
use crate::transport::Transport;

/// Uses every default step; the fake delegates to it for the steps it is not
/// told to break.
struct Defaults;

impl Transport for Defaults {
    fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        unreachable!("Defaults never sends")
    }
}

#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<(u16, String), ApiError>>>,
    sent: RefCell<Vec<HttpRequest>>,
    pub fail_build: bool,
    pub fail_serialize: bool,
    pub fail_deserialize: bool,
    pub fail_read: bool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next `execute` call.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok((status, body.into())));
        self
    }

    /// Queue a transport failure for the next `execute` call.
    pub fn fail_send(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::TransportError(message.to_string())));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for FakeTransport {
    fn build_request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, ApiError> {
        if self.fail_build {
            return Err(ApiError::RequestBuildError("request builder failure".to_string()));
        }
        Defaults.build_request(method, url, body)
    }

    fn serialize<V: Serialize + ?Sized>(&self, value: &V) -> Result<Vec<u8>, ApiError> {
        if self.fail_serialize {
            return Err(ApiError::SerializationError("serializer failure".to_string()));
        }
        Defaults.serialize(value)
    }

    fn deserialize<V: DeserializeOwned>(&self, bytes: &[u8]) -> Result<V, ApiError> {
        if self.fail_deserialize {
            return Err(ApiError::DeserializationError("deserializer failure".to_string()));
        }
        Defaults.deserialize(bytes)
    }

    fn read_body(&self, body: &mut ResponseBody) -> Result<Vec<u8>, ApiError> {
        if self.fail_read {
            return Err(ApiError::IoError("body reader failure".to_string()));
        }
        Defaults.read_body(body)
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::TransportError("no scripted response".to_string())));
        next.map(|(status, body)| HttpResponse::new(status, ResponseBody::from_bytes(body)))
    }
}

/// A List page body holding `count` accounts whose ids end in `first..first+count`.
pub(crate) fn list_page(first: usize, count: usize) -> String {
    let items: Vec<serde_json::Value> = (first..first + count)
        .map(|n| {
            serde_json::json!({
                "type": "accounts",
                "id": format!("00000000-0000-0000-0000-{n:012}"),
                "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
                "version": 0,
                "attributes": { "country": "GB", "base_currency": "GBP" }
            })
        })
        .collect();
    serde_json::json!({ "data": items }).to_string()
}
