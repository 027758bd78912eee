use super::{util, RotaError};
use chrono::{Days, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nombre de jours publiés par défaut à chaque publication.
pub const DEFAULT_PUBLISH_LENGTH: u32 = 7;

/// Horizon de brouillon d'un planning tournant.
///
/// Seul le moteur de déroulement produit un nouvel état ; il ne modifie
/// jamais la valeur reçue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RosterState {
    pub rotation_length: u32,
    /// Premier jour encore en brouillon (les jours précédents sont publiés).
    pub first_draft_date: NaiveDate,
    /// Dernier jour déjà déroulé.
    pub last_draft_date: NaiveDate,
    /// Offset de cycle du lendemain de `last_draft_date`.
    pub unplanned_rotation_offset: u32,
    /// Nombre cumulé de jours déroulés.
    pub draft_length: u64,
    #[cfg_attr(feature = "serde", serde(default = "default_publish_length"))]
    pub publish_length: u32,
}

#[cfg(feature = "serde")]
fn default_publish_length() -> u32 {
    DEFAULT_PUBLISH_LENGTH
}

impl RosterState {
    /// État initial : rien n'est déroulé, `start` sera le jour d'offset 0.
    pub fn initial(rotation_length: u32, start: NaiveDate) -> Result<Self, RotaError> {
        util::ensure_rotation_length(rotation_length)?;
        let last_draft_date = start
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| RotaError::DateOutOfRange(format!("no day before {start}")))?;
        Ok(Self {
            rotation_length,
            first_draft_date: start,
            last_draft_date,
            unplanned_rotation_offset: 0,
            draft_length: 0,
            publish_length: DEFAULT_PUBLISH_LENGTH,
        })
    }

    pub fn with_publish_length(mut self, publish_length: u32) -> Self {
        self.publish_length = publish_length;
        self
    }

    /// Vérifie la cohérence structurelle de l'état.
    pub fn validate(&self) -> Result<(), RotaError> {
        util::ensure_rotation_length(self.rotation_length)?;
        if self.unplanned_rotation_offset >= self.rotation_length {
            return Err(RotaError::InvalidArgument(format!(
                "unplanned rotation offset {} outside [0, {})",
                self.unplanned_rotation_offset, self.rotation_length
            )));
        }
        Ok(())
    }

    /// Premier jour non encore déroulé.
    pub fn next_unplanned_date(&self) -> Option<NaiveDate> {
        self.last_draft_date.succ_opt()
    }
}
