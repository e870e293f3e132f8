//! Storage port — the device store contract.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use devhub_domain::device::{Device, DevicePatch};
use devhub_domain::error::DeviceHubError;

/// Keyed store of [`Device`]s.
///
/// Implementations must make each method atomic with respect to the others;
/// in particular [`update`](Self::update) is a single read-modify-write.
pub trait DeviceRepository {
    /// Insert `device` under `device.id`, replacing any existing record.
    fn put(&self, device: Device) -> impl Future<Output = Result<(), DeviceHubError>> + Send;

    /// Get the device stored under `id`.
    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send;

    /// Whether a device is stored under `id`.
    fn contains(&self, id: &str) -> impl Future<Output = Result<bool, DeviceHubError>> + Send;

    /// Snapshot of every stored device, keyed by store key.
    fn all(&self) -> impl Future<Output = Result<BTreeMap<String, Device>, DeviceHubError>> + Send;

    /// Apply `patch` onto the device stored under `id` and store the result
    /// under the same key.
    ///
    /// The key never changes, even when `patch` carries a different `id`.
    /// Returns `None` without writing anything when `id` is absent.
    fn update(
        &self,
        id: &str,
        patch: DevicePatch,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send;

    /// Remove the device stored under `id`. Absent keys are not an error.
    fn delete(&self, id: &str) -> impl Future<Output = Result<(), DeviceHubError>> + Send;
}

impl<T: DeviceRepository + Send + Sync> DeviceRepository for Arc<T> {
    fn put(&self, device: Device) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        (**self).put(device)
    }

    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
        (**self).get(id)
    }

    fn contains(&self, id: &str) -> impl Future<Output = Result<bool, DeviceHubError>> + Send {
        (**self).contains(id)
    }

    fn all(&self) -> impl Future<Output = Result<BTreeMap<String, Device>, DeviceHubError>> + Send {
        (**self).all()
    }

    fn update(
        &self,
        id: &str,
        patch: DevicePatch,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
        (**self).update(id, patch)
    }

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        (**self).delete(id)
    }
}
