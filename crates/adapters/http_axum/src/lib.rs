//! # devhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the device CRUD API (`/devices`, `/devices/{id}`)
//! - Hand raw request bodies to application services, which own decoding
//! - Map application results into HTTP responses: JSON on success,
//!   plain text on failure
//!
//! ## Dependency rule
//! Depends on `devhub-app` (for port traits and services) and `devhub-domain`
//! (for domain types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
