//! Wire records for the accounts API (JSON:API envelopes).
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch drift between the two crates. Attributes are
//! opaque pass-through data: nothing here validates country codes, currencies
//! or bank identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JSON:API resource type of every account record.
pub const ACCOUNT_TYPE: &str = "accounts";

/// Create request and response envelope: `{ "data": AccountData }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub data: AccountData,
}

impl Account {
    pub fn new(id: Uuid, organisation_id: Uuid, attributes: AccountAttributes) -> Self {
        Self {
            data: AccountData {
                kind: ACCOUNT_TYPE.to_string(),
                id,
                organisation_id,
                attributes,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountData {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub attributes: AccountAttributes,
}

/// Account attributes. The first five are what a create request carries; the
/// rest only show up on records read back from the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountAttributes {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub base_currency: String,
    #[serde(default)]
    pub bank_id: String,
    #[serde(default)]
    pub bank_id_code: String,
    #[serde(default)]
    pub bic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switched: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_bank_account_names: Option<serde_json::Value>,
}

/// Read model returned by Get and List. `version` must be echoed back on
/// Delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountListItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(default)]
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: AccountAttributes,
}

/// List envelope: `{ "data": [...], "links": {...} }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountList {
    #[serde(default)]
    pub data: Vec<AccountListItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Get envelope: `{ "data": {...}, "links": { "self": ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchedAccount {
    pub data: AccountListItem,
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Outcome of a Delete call, read from the response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 204: the account was removed.
    Deleted,
    /// 404: no account with that id.
    NotFound,
    /// 409: the supplied version does not match the stored one.
    VersionConflict,
    Unexpected(u16),
}

impl DeleteOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            204 => DeleteOutcome::Deleted,
            404 => DeleteOutcome::NotFound,
            409 => DeleteOutcome::VersionConflict,
            other => DeleteOutcome::Unexpected(other),
        }
    }
}
