//! Request builders, operations and response helpers for the accounts API.
//!
//! # Design
//! `AccountClient` holds a host and a `Transport` and carries no other state.
//! Each operation is split three ways:
//! - `build_*` produces an `HttpRequest` through the transport's encode and
//!   build steps without any I/O,
//! - the operation itself (`create_account`, ...) builds and sends exactly
//!   once, returning the raw `HttpResponse` whatever its status,
//! - `parse_*` reads and decodes a response the caller chose to unwrap.
//!
//! Status codes are never turned into errors here.

use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Account, AccountList, DeleteOutcome, FetchedAccount};

pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Synchronous client for the accounts API.
#[derive(Debug, Clone)]
pub struct AccountClient<T = UreqTransport> {
    host: String,
    page_size: u64,
    transport: T,
}

impl AccountClient<UreqTransport> {
    /// Client for `host` over a default `ureq` transport.
    pub fn new(host: &str) -> Self {
        Self::with_transport(host, UreqTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.host).with_page_size(config.page_size)
    }
}

impl<T: Transport> AccountClient<T> {
    pub fn with_transport(host: &str, transport: T) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            page_size: ClientConfig::default().page_size,
            transport,
        }
    }

    /// Page size used by `gather_all_accounts`.
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_create_account(&self, account: &Account) -> Result<HttpRequest, ApiError> {
        let body = self.transport.serialize(account)?;
        let mut request = self.transport.build_request(
            HttpMethod::Post,
            &format!("{}{ACCOUNTS_PATH}", self.host),
            Some(body),
        )?;
        request
            .headers
            .push(("content-type".to_string(), JSON_API_CONTENT_TYPE.to_string()));
        Ok(request)
    }

    pub fn build_fetch_account(&self, account_id: Uuid) -> Result<HttpRequest, ApiError> {
        self.transport.build_request(
            HttpMethod::Get,
            &format!("{}{ACCOUNTS_PATH}/{account_id}", self.host),
            None,
        )
    }

    pub fn build_list_accounts(&self, page_number: u64, page_size: u64) -> Result<HttpRequest, ApiError> {
        self.transport.build_request(
            HttpMethod::Get,
            &format!(
                "{}{ACCOUNTS_PATH}?page[number]={page_number}&page[size]={page_size}",
                self.host
            ),
            None,
        )
    }

    pub fn build_delete_account(&self, account_id: Uuid, version: u64) -> Result<HttpRequest, ApiError> {
        self.transport.build_request(
            HttpMethod::Delete,
            &format!("{}{ACCOUNTS_PATH}/{account_id}?version={version}", self.host),
            None,
        )
    }

    /// POST `account`. Nothing is sent if encoding or building fails.
    pub fn create_account(&self, account: &Account) -> Result<HttpResponse, ApiError> {
        debug!(account_id = %account.data.id, "creating account");
        let request = self.build_create_account(account)?;
        self.transport.execute(request)
    }

    pub fn fetch_account(&self, account_id: Uuid) -> Result<HttpResponse, ApiError> {
        debug!(%account_id, "fetching account");
        let request = self.build_fetch_account(account_id)?;
        self.transport.execute(request)
    }

    /// GET one page of accounts. Page numbers start at 0.
    pub fn list_accounts(&self, page_number: u64, page_size: u64) -> Result<HttpResponse, ApiError> {
        debug!(page_number, page_size, "listing accounts");
        let request = self.build_list_accounts(page_number, page_size)?;
        self.transport.execute(request)
    }

    /// DELETE with the optimistic-concurrency `version`. A 404 or 409 is a
    /// response, not an error.
    pub fn delete_account(&self, account_id: Uuid, version: u64) -> Result<HttpResponse, ApiError> {
        debug!(%account_id, version, "deleting account");
        let request = self.build_delete_account(account_id, version)?;
        self.transport.execute(request)
    }

    pub fn parse_create_account(&self, response: HttpResponse) -> Result<Account, ApiError> {
        self.decode(response)
    }

    pub fn parse_fetch_account(&self, response: HttpResponse) -> Result<FetchedAccount, ApiError> {
        self.decode(response)
    }

    pub fn parse_list_accounts(&self, response: HttpResponse) -> Result<AccountList, ApiError> {
        self.decode(response)
    }

    /// Drain the body and classify the status.
    pub fn parse_delete_account(&self, mut response: HttpResponse) -> Result<DeleteOutcome, ApiError> {
        self.transport.read_body(&mut response.body)?;
        Ok(DeleteOutcome::from_status(response.status))
    }

    fn decode<V: serde::de::DeserializeOwned>(&self, mut response: HttpResponse) -> Result<V, ApiError> {
        let bytes = self.transport.read_body(&mut response.body)?;
        self.transport.deserialize(&bytes)
    }
}
