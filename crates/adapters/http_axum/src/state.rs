//! Shared application state for axum handlers.

use std::sync::Arc;

use devhub_app::ports::DeviceRepository;
use devhub_app::services::device_service::DeviceService;

/// Largest request body read when none is configured (2 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<DR> {
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Maximum number of body bytes a handler reads.
    pub body_limit: usize,
}

impl<DR> Clone for AppState<DR> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            body_limit: self.body_limit,
        }
    }
}

impl<DR> AppState<DR>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_service: DeviceService<DR>) -> Self {
        Self::from_arc(Arc::new(device_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(device_service: Arc<DeviceService<DR>>) -> Self {
        Self {
            device_service,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Override the request body limit.
    #[must_use]
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}
