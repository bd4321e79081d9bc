use serde::Serialize;
use thiserror::Error;

/// Status assigned to every segment when it is (re)registered.
pub const SEGMENT_DEFAULT_STATUS: &str = "En servicio";

/// Error type for registry operations.
///
/// Only two kinds exist: rejected input on registration and lookups of names that were never
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("segment not found: {0}")]
    NotFound(String),
}

/// Owned snapshot of one registered segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub name: String,
    pub length_km: f64,
    pub status: String,
}
