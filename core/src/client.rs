//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The round-trip helpers at the bottom glue the two halves around any
//! [`Transport`].

use crate::error::{ApiError, ClientError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{Item, ItemId, ItemList, NewItem};

/// Synchronous, stateless client for the items API.
///
/// `base_url` includes the API prefix, e.g. `http://localhost:5000/api`.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    base_url: String,
}

impl ItemsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/health", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/items", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/items", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/items/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Any 2xx counts as healthy; the payload is not inspected.
    pub fn parse_health(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        let list: ItemList =
            serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(list.items)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn health<T: Transport + ?Sized>(&self, transport: &T) -> Result<(), ClientError> {
        let response = transport.execute(&self.build_health())?;
        Ok(self.parse_health(response)?)
    }

    pub fn list_items<T: Transport + ?Sized>(&self, transport: &T) -> Result<Vec<Item>, ClientError> {
        let response = transport.execute(&self.build_list_items())?;
        Ok(self.parse_list_items(response)?)
    }

    pub fn create_item<T: Transport + ?Sized>(&self, transport: &T, input: &NewItem) -> Result<(), ClientError> {
        let request = self.build_create_item(input)?;
        let response = transport.execute(&request)?;
        Ok(self.parse_create_item(response)?)
    }

    pub fn delete_item<T: Transport + ?Sized>(&self, transport: &T, id: ItemId) -> Result<(), ClientError> {
        let response = transport.execute(&self.build_delete_item(id))?;
        Ok(self.parse_delete_item(response)?)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::TransportError;

    fn client() -> ItemsClient {
        ItemsClient::new("http://localhost:5000/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_health_produces_correct_request() {
        let req = client().build_health();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/api/health");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let input = NewItem::new("Buy milk", "  two liters ").unwrap();
        let req = client().build_create_item(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/api/items");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Buy milk");
        assert_eq!(body["description"], "two liters");
    }

    #[test]
    fn build_delete_item_targets_the_id() {
        let req = client().build_delete_item(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:5000/api/items/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ItemsClient::new("http://localhost:5000/api/");
        assert_eq!(client.build_list_items().path, "http://localhost:5000/api/items");
    }

    #[test]
    fn parse_health_ignores_payload() {
        assert!(client().parse_health(response(200, "not json at all")).is_ok());
        assert!(client().parse_health(response(204, "")).is_ok());
    }

    #[test]
    fn parse_health_fails_on_server_error() {
        let err = client().parse_health(response(503, "{}")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
    }

    #[test]
    fn parse_list_items_keeps_server_order() {
        let body = r#"{"items":[{"id":3,"name":"c"},{"id":1,"name":"a","description":"first"}]}"#;
        let items = client().parse_list_items(response(200, body)).unwrap();
        let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(items[1].description(), Some("first"));
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client().parse_list_items(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_item_surfaces_server_message() {
        let err = client()
            .parse_create_item(response(422, r#"{"error":"name must not be empty"}"#))
            .unwrap_err();
        assert_eq!(err.server_message().as_deref(), Some("name must not be empty"));
    }

    #[test]
    fn parse_delete_item_not_found() {
        let err = client().parse_delete_item(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    struct Scripted {
        reply: Result<HttpResponse, &'static str>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Transport for Scripted {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.borrow_mut().push(request.clone());
            self.reply.clone().map_err(|reason| TransportError {
                method: request.method.as_str(),
                url: request.path.clone(),
                reason: reason.to_string(),
            })
        }
    }

    #[test]
    fn round_trip_separates_transport_from_api_failures() {
        let down = Scripted {
            reply: Err("connection refused"),
            seen: RefCell::new(Vec::new()),
        };
        assert!(matches!(client().list_items(&down), Err(ClientError::Transport(_))));

        let broken = Scripted {
            reply: Ok(response(500, "boom")),
            seen: RefCell::new(Vec::new()),
        };
        assert!(matches!(client().list_items(&broken), Err(ClientError::Api(_))));
        assert_eq!(broken.seen.borrow()[0].path, "http://localhost:5000/api/items");
    }
}
