use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::store::SegmentRegistry;
use super::types::{RegistryError, Segment};

/// Thread-safe handle around one [`SegmentRegistry`].
///
/// A single mutex guards both maps; each method takes it exactly once, so every operation
/// is applied atomically with respect to other callers. Share it with `Arc`.
#[derive(Debug, Default)]
pub struct SharedSegmentRegistry {
    inner: Mutex<SegmentRegistry>,
}

impl SharedSegmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registry(registry: SegmentRegistry) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }

    // Registry operations never panic midway, so a poisoned lock still guards consistent maps.
    fn lock(&self) -> MutexGuard<'_, SegmentRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_segment(&self, name: &str, length_km: f64) -> Result<(), RegistryError> {
        self.lock().add_segment(name, length_km)
    }

    pub fn update_status(&self, name: &str, new_status: &str) -> Result<(), RegistryError> {
        self.lock().update_status(name, new_status)
    }

    #[deprecated(note = "use `update_status` instead")]
    pub fn change_status(&self, name: &str, status: &str) -> Result<(), RegistryError> {
        self.update_status(name, status)
    }

    /// Owned copy of the status; the lock is released before returning.
    pub fn get_status(&self, name: &str) -> Result<String, RegistryError> {
        self.lock().get_status(name).map(str::to_string)
    }

    pub fn total_length(&self) -> f64 {
        self.lock().total_length()
    }

    pub fn list_segments(&self) -> BTreeMap<String, f64> {
        self.lock().list_segments()
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.lock().segments()
    }

    pub fn generate_report(&self) -> String {
        self.lock().generate_report()
    }

    /// Consumes the handle and returns the wrapped registry.
    pub fn into_inner(self) -> SegmentRegistry {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
