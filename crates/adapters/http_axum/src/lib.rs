//! # mockfleet-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON device API** (`/iot_objects`, `/iot_objects/{id}`,
//!   `/iot_objects/{id}/history`, `/iot_objects/by_client/{client}`)
//! - Serve the welcome message at `/` and a liveness probe at `/health`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `mockfleet-app` (for port traits and services) and
//! `mockfleet-domain` (for the types serialized in responses). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
