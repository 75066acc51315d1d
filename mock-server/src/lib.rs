use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub version: u64,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    pub attributes: serde_json::Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub links: Links,
}

#[derive(Deserialize)]
pub struct CreateAccount {
    pub data: NewAccount,
}

#[derive(Deserialize)]
pub struct NewAccount {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(default)]
    pub attributes: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
}

#[derive(Deserialize)]
pub struct PageParams {
    #[serde(rename = "page[number]")]
    pub number: Option<usize>,
    #[serde(rename = "page[size]")]
    pub size: Option<usize>,
}

#[derive(Deserialize)]
pub struct VersionParam {
    pub version: Option<u64>,
}

/// Accounts in insertion order, which is also listing order.
pub type Db = Arc<RwLock<Vec<AccountRecord>>>;

type Failure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, message: impl Into<String>) -> Failure {
    (
        status,
        Json(ErrorBody {
            error_message: message.into(),
        }),
    )
}

fn self_link(id: Uuid) -> Links {
    Links {
        self_link: format!("{ACCOUNTS_PATH}/{id}"),
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route(ACCOUNTS_PATH, get(list_accounts).post(create_account))
        .route(
            &format!("{ACCOUNTS_PATH}/{{id}}"),
            get(fetch_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_account(
    State(db): State<Db>,
    Json(input): Json<CreateAccount>,
) -> Result<(StatusCode, Json<Envelope<AccountRecord>>), Failure> {
    let new = input.data;
    if new.kind != "accounts" {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            format!("unsupported resource type {:?}", new.kind),
        ));
    }

    let mut accounts = db.write().await;
    if accounts.iter().any(|a| a.id == new.id) {
        return Err(failure(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        ));
    }

    let now = Utc::now();
    let record = AccountRecord {
        kind: new.kind,
        id: new.id,
        organisation_id: new.organisation_id,
        version: 0,
        created_on: now,
        modified_on: now,
        attributes: new.attributes,
    };
    accounts.push(record.clone());
    info!(id = %record.id, "account created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope {
            links: self_link(record.id),
            data: record,
        }),
    ))
}

async fn fetch_account(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<AccountRecord>>, Failure> {
    let accounts = db.read().await;
    let record = accounts
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, format!("record {id} does not exist")))?;
    Ok(Json(Envelope {
        data: record,
        links: self_link(id),
    }))
}

async fn list_accounts(
    State(db): State<Db>,
    Query(page): Query<PageParams>,
) -> Json<Envelope<Vec<AccountRecord>>> {
    let number = page.number.unwrap_or(0);
    let size = page.size.unwrap_or(DEFAULT_PAGE_SIZE);
    let accounts = db.read().await;
    let data = accounts
        .iter()
        .skip(number.saturating_mul(size))
        .take(size)
        .cloned()
        .collect();
    Json(Envelope {
        data,
        links: Links {
            self_link: format!("{ACCOUNTS_PATH}?page[number]={number}&page[size]={size}"),
        },
    })
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Query(param): Query<VersionParam>,
) -> Result<StatusCode, Failure> {
    let version = param
        .version
        .ok_or_else(|| failure(StatusCode::BAD_REQUEST, "version is required"))?;

    let mut accounts = db.write().await;
    let index = accounts
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, format!("record {id} does not exist")))?;
    if accounts[index].version != version {
        return Err(failure(StatusCode::CONFLICT, "invalid version"));
    }
    accounts.remove(index);
    info!(%id, version, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
