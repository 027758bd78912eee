use super::state::RosterState;
use crate::model::GeneratedShift;
use chrono::Duration;
use thiserror::Error;

/// Forme « durées absolues » d'une entrée du motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOffsets {
    /// Durée entre le début du cycle et le début du créneau.
    pub from_cycle_start: Duration,
    /// Longueur totale du créneau.
    pub span: Duration,
}

/// Résultat d'un déroulement : nouvel état + créneaux émis, dans l'ordre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub state: RosterState,
    pub shifts: Vec<GeneratedShift>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotaError {
    #[error("invalid template: {0}")]
    InvalidTemplate(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("date out of range: {0}")]
    DateOutOfRange(String),
}
