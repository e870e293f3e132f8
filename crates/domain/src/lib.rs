//! # devhub-domain
//!
//! Pure domain model for the devhub device registry.
//!
//! ## Responsibilities
//! - Define the **Device** record (`id`, `name`, `description`, `status`)
//! - Define the **DevicePatch** — a decoded request body whose present
//!   fields overwrite the matching fields of a stored device
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod device;
pub mod error;
