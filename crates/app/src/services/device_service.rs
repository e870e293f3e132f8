//! Device service — use-cases for managing devices.

use std::collections::BTreeMap;

use devhub_domain::device::{Device, DevicePatch};
use devhub_domain::error::{DeviceHubError, NotFoundError};

use crate::ports::DeviceRepository;

/// Application service for device CRUD operations.
pub struct DeviceService<R> {
    repo: R,
}

fn not_found(id: &str) -> DeviceHubError {
    NotFoundError {
        entity: "Device",
        id: id.to_string(),
    }
    .into()
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Decode `body` into a new device and store it under its own `id`.
    ///
    /// Any record already stored under that `id` is replaced. The `id` is not
    /// checked, so an empty one is stored under the empty key.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Decode`] when `body` is not a device (nothing
    /// is stored), or an error propagated from the repository.
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn create_device(&self, body: &[u8]) -> Result<Device, DeviceHubError> {
        let patch = DevicePatch::from_json(body)?;
        let device = Device::from_patch(patch);
        self.repo.put(device.clone()).await?;
        tracing::debug!(id = %device.id, "device stored");
        Ok(device)
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists,
    /// or an error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: &str) -> Result<Device, DeviceHubError> {
        self.repo.get(id).await?.ok_or_else(|| not_found(id))
    }

    /// Check that a device is stored under `id` without fetching it.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists,
    /// or an error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn ensure_device_exists(&self, id: &str) -> Result<(), DeviceHubError> {
        if self.repo.contains(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// List all devices keyed by store key.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn list_devices(&self) -> Result<BTreeMap<String, Device>, DeviceHubError> {
        self.repo.all().await
    }

    /// Decode `body` over the device stored under `id`.
    ///
    /// Fields the body omits keep their stored value. The result stays under
    /// `id` even if the body sets a different `id` field.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Decode`] when `body` is not a device,
    /// [`DeviceHubError::NotFound`] when no device with `id` exists (in both
    /// cases nothing is written), or an error from the repository.
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn update_device(&self, id: &str, body: &[u8]) -> Result<Device, DeviceHubError> {
        let patch = DevicePatch::from_json(body)?;
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a device by id. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: &str) -> Result<(), DeviceHubError> {
        self.repo.delete(id).await
    }
}
