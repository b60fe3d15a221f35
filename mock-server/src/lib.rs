//! In-memory implementation of the task-list service wire contract, used by
//! the client's integration tests and runnable standalone.
//!
//! Contract highlights the client depends on:
//! - every read answers with the `{results, date, total_results}` envelope,
//!   including `results: []` with status 200 when the store is empty;
//! - missing IDs answer 404 with a plain-text body;
//! - `PATCH /todo/{id}` mutates only when the bare `complete` query flag is
//!   present;
//! - a task that is not done carries the zero `CompletedAt` timestamp.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use time::macros::datetime;
use time::OffsetDateTime;
use tokio::{net::TcpListener, sync::RwLock};

const ZERO_TIME: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

/// A stored task, serialized with the wire's PascalCase field names.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub task: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub completed_at: OffsetDateTime,
}

/// Read-response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub results: Vec<Item>,
    pub date: i64,
    pub total_results: usize,
}

#[derive(Deserialize)]
pub struct NewItem {
    pub task: String,
}

/// Task store keyed by server ID. IDs start at 1 and are never reused.
pub struct Store {
    items: BTreeMap<u64, Item>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db = Db::default();
    Router::new()
        .route("/todo", get(list_items).post(create_item))
        .route(
            "/todo/{id}",
            get(get_item).patch(complete_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn envelope(results: Vec<Item>) -> ListResponse {
    ListResponse {
        date: OffsetDateTime::now_utc().unix_timestamp(),
        total_results: results.len(),
        results,
    }
}

async fn list_items(State(db): State<Db>) -> Json<ListResponse> {
    let store = db.read().await;
    Json(envelope(store.items.values().cloned().collect()))
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<ListResponse>, (StatusCode, String)> {
    let store = db.read().await;
    match store.items.get(&id) {
        Some(item) => Ok(Json(envelope(vec![item.clone()]))),
        None => Err((StatusCode::NOT_FOUND, format!("item {id} not found"))),
    }
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<NewItem>,
) -> Result<StatusCode, (StatusCode, String)> {
    if input.task.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "task cannot be empty".to_string()));
    }

    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    store.items.insert(
        id,
        Item {
            task: input.task,
            done: false,
            created_at: OffsetDateTime::now_utc(),
            completed_at: ZERO_TIME,
        },
    );

    Ok(StatusCode::CREATED)
}

async fn complete_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    RawQuery(query): RawQuery,
) -> Result<StatusCode, (StatusCode, String)> {
    let flagged = query
        .as_deref()
        .is_some_and(|q| q.split('&').any(|p| p == "complete" || p.starts_with("complete=")));
    if !flagged {
        return Err((
            StatusCode::BAD_REQUEST,
            "missing complete query flag".to_string(),
        ));
    }

    let mut store = db.write().await;
    match store.items.get_mut(&id) {
        Some(item) => {
            item.done = true;
            item.completed_at = OffsetDateTime::now_utc();
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err((StatusCode::NOT_FOUND, format!("item {id} not found"))),
    }
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut store = db.write().await;
    match store.items.remove(&id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err((StatusCode::NOT_FOUND, format!("item {id} not found"))),
    }
}
