//! In-memory registry of bike-lane segments (tramos) around the Bahía de Cádiz.
//!
//! A segment is a name with a length in km and a free-text status. The registry is a plain
//! owned value: callers create one, mutate it through `&mut`, and drop it when done. Nothing
//! is persisted.
//!
//! For callers on several threads, [`SharedSegmentRegistry`] puts the whole registry behind
//! one mutex.
//!
//! Errors are returned, never logged here; callers decide how to surface them.

mod report;
mod shared;
mod store;
mod types;

pub use report::{format_km, REPORT_TITLE, REPORT_UNDERLINE};
pub use shared::SharedSegmentRegistry;
pub use store::SegmentRegistry;
pub use types::{RegistryError, Segment, SEGMENT_DEFAULT_STATUS};
