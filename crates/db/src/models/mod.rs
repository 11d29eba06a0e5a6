//! Row models, submission DTOs and view models.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` struct matching the table row
//! - A `Deserialize` form DTO used for both create and edit submissions
//! - Enriched view structs assembled by the repository layer

pub mod artist;
pub mod listing;
pub mod show;
pub mod venue;

use fyyur_core::schedule::format_start_time;
use fyyur_core::types::Timestamp;
use serde::Serializer;

/// Serialize a show start time in the listing layout (`2023-05-01 20:00:00`).
pub(crate) fn serialize_start_time<S>(
    start_time: &Timestamp,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_start_time(*start_time))
}
