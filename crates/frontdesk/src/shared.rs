//! Shared access to the registry behind a single lock.

use std::sync::Arc;

use frontdesk_registry::{Registry, RegistryConfig, RegistryError, Room, RoomNumber, RoomStatus};
use tokio::sync::Mutex;

/// A cloneable handle to one [`Registry`].
///
/// Every method takes the lock once for the whole operation, so callers
/// on different tasks see each operation as atomic. Query results are
/// owned copies; no lock guard leaves this type.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Creates a handle to a fresh registry built from `config`.
    pub fn from_config(config: RegistryConfig) -> Self {
        Self::new(Registry::new(config))
    }

    /// Discards all rooms and creates `count` fresh ones.
    pub async fn initialize(&self, count: u32) {
        self.inner.lock().await.initialize(count);
    }

    pub async fn room(&self, number: RoomNumber) -> Option<Room> {
        self.inner.lock().await.room(number).cloned()
    }

    pub async fn list_all(&self) -> Vec<Room> {
        owned(self.inner.lock().await.list_all())
    }

    pub async fn list_by_status(&self, status: RoomStatus) -> Vec<Room> {
        owned(self.inner.lock().await.list_by_status(status))
    }

    pub async fn list_available(&self) -> Vec<Room> {
        self.list_by_status(RoomStatus::Available).await
    }

    pub async fn search_guest(&self, text: &str) -> Vec<Room> {
        owned(self.inner.lock().await.search_guest(text))
    }

    /// See [`Registry::ensure_bookable`].
    pub async fn ensure_bookable(&self, number: RoomNumber) -> Result<(), RegistryError> {
        self.inner.lock().await.ensure_bookable(number)
    }

    pub async fn book(
        &self,
        number: RoomNumber,
        guest_name: &str,
        guest_phone: &str,
    ) -> Result<(), RegistryError> {
        self.inner.lock().await.book(number, guest_name, guest_phone)
    }

    pub async fn check_in(&self, number: RoomNumber) -> Result<(), RegistryError> {
        self.inner.lock().await.check_in(number)
    }

    pub async fn check_out(&self, number: RoomNumber) -> Result<(), RegistryError> {
        self.inner.lock().await.check_out(number)
    }
}

fn owned(rooms: Vec<&Room>) -> Vec<Room> {
    rooms.into_iter().cloned().collect()
}
