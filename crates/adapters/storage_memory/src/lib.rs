//! # devhub-adapter-storage-memory
//!
//! Process-lifetime storage adapter.
//!
//! ## Responsibilities
//! - Implement the `DeviceRepository` port defined in `devhub-app::ports::storage`
//! - Serialise every store operation through one mutex, including the
//!   read-modify-write of an update
//!
//! Nothing is persisted: the contents are exactly the cumulative effect of
//! the puts, updates and deletes since the process started.
//!
//! ## Dependency rule
//! Depends on `devhub-app` (for port traits) and `devhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;

pub use device_repo::InMemoryDeviceRepository;
