//! Projection « durées absolues » des entrées du motif, pour le transport JSON.

use crate::model::{LocationId, RotationTemplateEntry, WorkerId};
use crate::rotation::{self, RotaError, TemplateOffsets};
use chrono::Duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationTemplateView {
    pub location_id: String,
    /// Secondes entre le début du cycle et le début du créneau.
    pub from_cycle_start_seconds: i64,
    pub span_seconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_worker: Option<String>,
}

/// Précision à la seconde : les fractions de seconde sont tronquées.
pub fn to_view(
    entry: &RotationTemplateEntry,
    rotation_length: u32,
) -> Result<RotationTemplateView, RotaError> {
    let offsets = rotation::template_offsets(entry, rotation_length)?;
    Ok(RotationTemplateView {
        location_id: entry.location_id.as_str().to_string(),
        from_cycle_start_seconds: offsets.from_cycle_start.num_seconds(),
        span_seconds: offsets.span.num_seconds(),
        default_worker: entry.default_worker.as_ref().map(|w| w.as_str().to_string()),
    })
}

pub fn from_view(
    view: &RotationTemplateView,
    rotation_length: u32,
) -> Result<RotationTemplateEntry, RotaError> {
    if view.location_id.trim().is_empty() {
        return Err(RotaError::InvalidTemplate(
            "location id cannot be empty".to_string(),
        ));
    }
    let offsets = TemplateOffsets {
        from_cycle_start: seconds(view.from_cycle_start_seconds)?,
        span: seconds(view.span_seconds)?,
    };
    rotation::from_offsets(
        offsets,
        rotation_length,
        LocationId::new(&view.location_id),
        view.default_worker.as_deref().map(WorkerId::new),
    )
}

fn seconds(secs: i64) -> Result<Duration, RotaError> {
    Duration::try_seconds(secs)
        .ok_or_else(|| RotaError::InvalidTemplate(format!("duration of {secs}s out of range")))
}
