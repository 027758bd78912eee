#![forbid(unsafe_code)]
//! Roulement — déroulement d'un planning de rotation cyclique.
//!
//! - Motif cyclique d'entrées (offsets de jour + heures) sur `rotation_length` jours.
//! - Horizon de brouillon glissant, avancé jour par jour.
//! - Cœur pur (`rotation`) : aucune E/S, aucun état partagé.
//! - Stockage fichiers (JSON/CSV) en bordure, sauvegarde atomique versionnée.
//! - Tout en UTC.

pub mod model;
pub mod rotation;

#[cfg(feature = "serde")]
pub mod io;
#[cfg(feature = "serde")]
pub mod schedule;
#[cfg(feature = "serde")]
pub mod storage;
#[cfg(feature = "serde")]
pub mod view;

pub use model::{GeneratedShift, LocationId, RotationTemplateEntry, WorkerId};
pub use rotation::{
    expand, from_offsets, publish, template_offsets, Expansion, RosterState, RotaError,
    TemplateOffsets,
};
#[cfg(feature = "serde")]
pub use schedule::{Schedule, ScheduleError, ScheduleId};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
#[cfg(feature = "serde")]
pub use view::{from_view, to_view, RotationTemplateView};
