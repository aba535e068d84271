//! Synchronous API client core for the items service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), validates user input, and
//! renders item lists into a sanitized display tree. Everything here is
//! deterministic; the front-end crate supplies the I/O and the event loop.
//!
//! # Design
//! - `ItemsClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit. [`Transport`] is the seam a host plugs into.
//! - `render` is a pure function from items to a [`View`]; user text only
//!   enters a view through the sanitizer.
//! - DTOs are defined independently from the backend crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod connectivity;
pub mod error;
pub mod http;
pub mod render;
pub mod types;

pub use client::ItemsClient;
pub use connectivity::Connectivity;
pub use error::{ApiError, ClientError, TransportError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use render::{render, Card, SafeText, View};
pub use types::{Item, ItemId, ItemList, NewItem};
