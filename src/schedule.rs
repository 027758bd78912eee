//! Document de planning persisté et transactions autour du moteur.
//!
//! Chaque transaction lit un instantané, déroule le motif sur une copie puis
//! réécrit le document seulement si sa version n'a pas bougé entre-temps.

use crate::model::{GeneratedShift, RotationTemplateEntry};
use crate::rotation::{self, Expansion, RosterState, RotaError};
use crate::storage::Storage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifiant fort pour Schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error(transparent)]
    Rota(#[from] RotaError),
    #[error("version conflict: expected {expected}, found {found}")]
    VersionConflict { expected: u64, found: u64 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Planning complet : état, motif et créneaux déjà générés.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    #[serde(default)]
    pub version: u64,
    pub state: RosterState,
    #[serde(default)]
    pub templates: Vec<RotationTemplateEntry>,
    #[serde(default)]
    pub shifts: Vec<GeneratedShift>,
}

impl Schedule {
    pub fn new(rotation_length: u32, start: NaiveDate) -> Result<Self, RotaError> {
        Ok(Self {
            id: ScheduleId::random(),
            version: 0,
            state: RosterState::initial(rotation_length, start)?,
            templates: Vec::new(),
            shifts: Vec::new(),
        })
    }

    /// Ajoute une entrée au motif après validation de ses offsets.
    pub fn add_template(&mut self, entry: RotationTemplateEntry) -> Result<(), RotaError> {
        rotation::template_offsets(&entry, self.state.rotation_length)?;
        self.templates.push(entry);
        Ok(())
    }

    /// Copie du planning déroulée de `length_in_days` jours.
    pub fn extended(&self, length_in_days: i64) -> Result<Self, RotaError> {
        let expansion = rotation::expand(&self.state, &self.templates, length_in_days)?;
        Ok(self.applied(expansion))
    }

    /// Copie du planning après publication.
    pub fn published(&self) -> Result<Self, RotaError> {
        let expansion = rotation::publish(&self.state, &self.templates)?;
        Ok(self.applied(expansion))
    }

    fn applied(&self, expansion: Expansion) -> Self {
        let mut next = self.clone();
        next.version += 1;
        next.state = expansion.state;
        next.shifts.extend(expansion.shifts);
        next
    }

    /// Créneaux commençant strictement après `date`.
    pub fn shifts_after(&self, date: NaiveDate) -> impl Iterator<Item = &GeneratedShift> {
        self.shifts.iter().filter(move |s| s.start.date_naive() > date)
    }

    /// Créneaux dont le début tombe dans la fenêtre de brouillon.
    pub fn draft_shifts(&self) -> impl Iterator<Item = &GeneratedShift> {
        let first = self.state.first_draft_date;
        self.shifts
            .iter()
            .filter(move |s| s.start.date_naive() >= first)
    }
}

/// Écrit `updated` si la version stockée vaut toujours `base_version`.
pub fn commit<S: Storage + ?Sized>(
    storage: &S,
    base_version: u64,
    updated: &Schedule,
) -> Result<(), ScheduleError> {
    let found = storage.load()?.version;
    if found != base_version {
        return Err(ScheduleError::VersionConflict {
            expected: base_version,
            found,
        });
    }
    storage.save(updated)?;
    Ok(())
}

/// Transaction « déroule N jours de plus ».
pub fn extend<S: Storage + ?Sized>(
    storage: &S,
    length_in_days: i64,
) -> Result<Schedule, ScheduleError> {
    let current = storage.load()?;
    let updated = current.extended(length_in_days)?;
    commit(storage, current.version, &updated)?;

    #[cfg(feature = "logging")]
    tracing::info!(
        schedule = updated.id.as_str(),
        version = updated.version,
        new_shifts = updated.shifts.len() - current.shifts.len(),
        "schedule extended"
    );

    Ok(updated)
}

/// Transaction de publication.
pub fn publish<S: Storage + ?Sized>(storage: &S) -> Result<Schedule, ScheduleError> {
    let current = storage.load()?;
    let updated = current.published()?;
    commit(storage, current.version, &updated)?;

    #[cfg(feature = "logging")]
    tracing::info!(
        schedule = updated.id.as_str(),
        version = updated.version,
        first_draft_date = %updated.state.first_draft_date,
        "schedule published"
    );

    Ok(updated)
}
