//! In-memory implementation of [`DeviceRepository`].

use std::collections::{BTreeMap, HashMap};
use std::future::Future;

use parking_lot::Mutex;

use devhub_app::ports::DeviceRepository;
use devhub_domain::device::{Device, DevicePatch};
use devhub_domain::error::DeviceHubError;

/// Device store held in process memory.
///
/// The lock is taken and released inside each call and never held across an
/// `.await`, so the returned futures are already resolved.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    devices: Mutex<HashMap<String, Device>>,
}

impl InMemoryDeviceRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceRepository for InMemoryDeviceRepository {
    fn put(&self, device: Device) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        let replaced = self
            .devices
            .lock()
            .insert(device.id.clone(), device)
            .is_some();
        if replaced {
            tracing::debug!("existing device replaced");
        }
        async { Ok(()) }
    }

    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
        let result = self.devices.lock().get(id).cloned();
        async { Ok(result) }
    }

    fn contains(&self, id: &str) -> impl Future<Output = Result<bool, DeviceHubError>> + Send {
        let result = self.devices.lock().contains_key(id);
        async move { Ok(result) }
    }

    fn all(&self) -> impl Future<Output = Result<BTreeMap<String, Device>, DeviceHubError>> + Send {
        let result: BTreeMap<String, Device> = self
            .devices
            .lock()
            .iter()
            .map(|(key, device)| (key.clone(), device.clone()))
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: &str,
        patch: DevicePatch,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
        let result = self.devices.lock().get_mut(id).map(|device| {
            device.apply(patch);
            device.clone()
        });
        async { Ok(result) }
    }

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        self.devices.lock().remove(id);
        async { Ok(()) }
    }
}
