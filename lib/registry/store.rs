use std::collections::BTreeMap;

use tracing::debug;

use super::report::render_report;
use super::types::{RegistryError, Segment, SEGMENT_DEFAULT_STATUS};

/// In-memory table of bike-lane segments keyed by name.
///
/// Lengths and statuses live in two maps over the same key set. `add_segment` is the only
/// operation that creates keys and it always writes both maps, so a name present in one is
/// present in the other.
#[derive(Debug, Clone, Default)]
pub struct SegmentRegistry {
    lengths: BTreeMap<String, f64>,
    statuses: BTreeMap<String, String>,
}

impl SegmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with `length_km`, resetting its status to [`SEGMENT_DEFAULT_STATUS`].
    ///
    /// Re-adding an existing name overwrites its length and discards any status set since.
    /// Nothing is written when validation fails.
    pub fn add_segment(&mut self, name: &str, length_km: f64) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidArgument(
                "segment name must not be blank".to_string(),
            ));
        }
        if !length_km.is_finite() || length_km <= 0.0 {
            return Err(RegistryError::InvalidArgument(format!(
                "segment length must be a finite number > 0, got {length_km}"
            )));
        }

        let replaced = self.lengths.insert(name.to_string(), length_km).is_some();
        self.statuses
            .insert(name.to_string(), SEGMENT_DEFAULT_STATUS.to_string());

        debug!(
            event = "segment_added",
            segment = name,
            length_km,
            replaced,
            "registered segment"
        );
        Ok(())
    }

    /// Overwrites the status of an already registered segment.
    ///
    /// The status is free text and is stored as given, empty strings included.
    pub fn update_status(&mut self, name: &str, new_status: &str) -> Result<(), RegistryError> {
        if !self.lengths.contains_key(name) {
            return Err(RegistryError::NotFound(name.to_string()));
        }

        self.statuses
            .insert(name.to_string(), new_status.to_string());
        debug!(
            event = "segment_status_updated",
            segment = name,
            status = new_status,
            "updated segment status"
        );
        Ok(())
    }

    #[deprecated(note = "use `update_status` instead")]
    pub fn change_status(&mut self, name: &str, status: &str) -> Result<(), RegistryError> {
        self.update_status(name, status)
    }

    pub fn get_status(&self, name: &str) -> Result<&str, RegistryError> {
        self.statuses
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Sum of all segment lengths in km; `+0.0` for an empty registry.
    pub fn total_length(&self) -> f64 {
        // `Sum for f64` starts at -0.0, which would print as "-0.0".
        self.lengths.values().fold(0.0, |total, km| total + km)
    }

    /// Copy of the name -> length table, ordered by name.
    pub fn list_segments(&self) -> BTreeMap<String, f64> {
        self.lengths.clone()
    }

    /// Ordered snapshot of every segment with its status.
    pub fn segments(&self) -> Vec<Segment> {
        debug_assert_eq!(self.lengths.len(), self.statuses.len());

        // Both maps hold the same key set, so their ordered iterators line up pairwise.
        self.lengths
            .iter()
            .zip(&self.statuses)
            .map(|((name, &length_km), (status_name, status))| {
                debug_assert_eq!(name, status_name);
                Segment {
                    name: name.clone(),
                    length_km,
                    status: status.clone(),
                }
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lengths.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Renders the plain-text summary, one line per segment in name order.
    pub fn generate_report(&self) -> String {
        render_report(&self.segments(), self.total_length())
    }
}
