use chrono::{DateTime, NaiveTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifiant opaque du poste couvert par un créneau.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationId(String);

impl LocationId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant opaque d'une personne affectée par défaut.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Entrée du motif de rotation, exprimée relativement au jour zéro du cycle.
///
/// `end_day_offset < start_day_offset` est légal : le créneau déborde sur le
/// cycle suivant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationTemplateEntry {
    pub location_id: LocationId,
    pub start_day_offset: u32,
    pub start_time: NaiveTime,
    pub end_day_offset: u32,
    pub end_time: NaiveTime,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_worker: Option<WorkerId>,
}

impl RotationTemplateEntry {
    pub fn new(
        location_id: LocationId,
        start_day_offset: u32,
        start_time: NaiveTime,
        end_day_offset: u32,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            location_id,
            start_day_offset,
            start_time,
            end_day_offset,
            end_time,
            default_worker: None,
        }
    }

    pub fn with_default_worker(mut self, worker: WorkerId) -> Self {
        self.default_worker = Some(worker);
        self
    }
}

/// Créneau daté produit par le déroulement du motif (UTC).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratedShift {
    pub location_id: LocationId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Offset du cycle dont le créneau est issu.
    pub rotation_offset: u32,
    pub assigned_worker: Option<WorkerId>,
}

impl GeneratedShift {
    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
