use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

/// In-memory item storage. Insertion order is list order; ids are never
/// reused, even after a delete.
#[derive(Debug)]
pub struct Store {
    next_id: i64,
    items: Vec<Item>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
        }
    }
}

impl Store {
    pub fn insert(&mut self, name: String, description: String) -> Item {
        let item = Item {
            id: self.next_id,
            name,
            description,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    pub fn remove(&mut self, id: i64) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Item not found")]
    NotFound,

    #[error("name must not be empty")]
    EmptyName,

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = match &self {
            BackendError::NotFound => StatusCode::NOT_FOUND,
            BackendError::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
            BackendError::InvalidBody(rejection) => rejection.status(),
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/health", get(health))
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/{id}", delete(delete_item))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "service": "backend" }))
}

async fn list_items(State(db): State<Db>) -> Json<ItemList> {
    let store = db.read().await;
    Json(ItemList {
        items: store.items().to_vec(),
    })
}

async fn create_item(
    State(db): State<Db>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), BackendError> {
    let Json(input) = payload?;
    if input.name.trim().is_empty() {
        return Err(BackendError::EmptyName);
    }
    let item = db
        .write()
        .await
        .insert(input.name, input.description.unwrap_or_default());
    tracing::info!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, BackendError> {
    db.write().await.remove(id).ok_or(BackendError::NotFound)?;
    tracing::info!(id, "item deleted");
    Ok(Json(json!({ "message": "Item deleted" })))
}
