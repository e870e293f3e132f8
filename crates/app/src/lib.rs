//! # devhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `DeviceRepository` port that storage adapters implement
//! - Provide `DeviceService`: create, get, list, update, delete, each taking
//!   raw request bodies where the use-case has one and returning domain errors
//! - Orchestrate domain objects without knowing *how* storage or IO works
//!
//! ## Dependency rule
//! Depends on `devhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
