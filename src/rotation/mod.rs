mod expand;
mod offsets;
mod state;
mod types;
mod util;

pub use offsets::{from_offsets, template_offsets, wraps_cycle};
pub use state::{RosterState, DEFAULT_PUBLISH_LENGTH};
pub use types::{Expansion, RotaError, TemplateOffsets};

use crate::model::RotationTemplateEntry;

/// Déroule `length_in_days` jours supplémentaires du motif.
///
/// Parcourt les jours `last_draft_date + 1 ..= last_draft_date + length_in_days`
/// et émet un créneau par entrée du motif dont `start_day_offset` correspond à
/// l'offset du jour, dans l'ordre d'insertion. Fonction pure : `state` n'est pas
/// modifié, le nouvel état est renvoyé dans l'[`Expansion`].
pub fn expand(
    state: &RosterState,
    templates: &[RotationTemplateEntry],
    length_in_days: i64,
) -> Result<Expansion, RotaError> {
    expand::expand(state, templates, length_in_days)
}

/// Publie `publish_length` jours : la fenêtre de brouillon avance d'autant et
/// l'horizon est déroulé du même nombre de jours.
pub fn publish(
    state: &RosterState,
    templates: &[RotationTemplateEntry],
) -> Result<Expansion, RotaError> {
    expand::publish(state, templates)
}
