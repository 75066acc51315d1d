//! Synchronous client for the accounts REST API.
//!
//! # Overview
//! Creates, fetches, lists and deletes accounts on a JSON:API-style service
//! and gathers the full collection from its paged listing. Every network
//! interaction goes through a `Transport`, so operations can be exercised
//! against a scripted double instead of a socket.
//!
//! # Design
//! - `AccountClient` holds only a host, a default page size and its transport.
//! - Operations return the raw `HttpResponse` for any status code; `parse_*`
//!   helpers decode the body separately.
//! - `gather_accounts` walks pages sequentially and is best effort: it stops
//!   quietly on the first failure.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod pagination;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::AccountClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ResponseBody};
pub use pagination::PageCursor;
pub use transport::{Transport, UreqTransport};
pub use types::{
    Account, AccountAttributes, AccountData, AccountList, AccountListItem, DeleteOutcome,
    FetchedAccount, Links,
};
