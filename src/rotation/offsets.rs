//! Conversion entre la forme « offsets de cycle » d'une entrée du motif et sa
//! forme « durées absolues » (début depuis le jour zéro, longueur).

use super::{util, RotaError, TemplateOffsets};
use crate::model::{LocationId, RotationTemplateEntry, WorkerId};
use chrono::{Duration, NaiveTime};

/// Vrai si le créneau se termine dans le cycle suivant celui où il commence.
///
/// Un créneau qui finit le même jour de cycle mais plus tôt dans la journée
/// boucle sur un cycle complet.
pub fn wraps_cycle(entry: &RotationTemplateEntry) -> bool {
    entry.end_day_offset < entry.start_day_offset
        || (entry.end_day_offset == entry.start_day_offset && entry.end_time < entry.start_time)
}

/// Calcule (durée depuis le début du cycle, longueur du créneau).
pub fn template_offsets(
    entry: &RotationTemplateEntry,
    rotation_length: u32,
) -> Result<TemplateOffsets, RotaError> {
    util::ensure_rotation_length(rotation_length)?;
    util::ensure_day_offset("start_day_offset", entry.start_day_offset, rotation_length)?;
    util::ensure_day_offset("end_day_offset", entry.end_day_offset, rotation_length)?;
    util::ensure_plain_time("start_time", entry.start_time)?;
    util::ensure_plain_time("end_time", entry.end_time)?;

    let start_day = i64::from(entry.start_day_offset);
    let end_day = i64::from(entry.end_day_offset);
    let span_days = if wraps_cycle(entry) {
        i64::from(rotation_length) - start_day + end_day
    } else {
        end_day - start_day
    };

    // signé : négatif pour un créneau de nuit
    let time_delta = entry.end_time.signed_duration_since(entry.start_time);

    Ok(TemplateOffsets {
        from_cycle_start: Duration::days(start_day) + util::since_midnight(entry.start_time),
        span: Duration::days(span_days) + time_delta,
    })
}

/// Opération inverse de [`template_offsets`].
pub fn from_offsets(
    offsets: TemplateOffsets,
    rotation_length: u32,
    location_id: LocationId,
    default_worker: Option<WorkerId>,
) -> Result<RotationTemplateEntry, RotaError> {
    util::ensure_rotation_length(rotation_length)?;
    let cycle = Duration::days(i64::from(rotation_length));

    if offsets.from_cycle_start < Duration::zero() || offsets.from_cycle_start >= cycle {
        return Err(RotaError::InvalidTemplate(format!(
            "duration from cycle start ({}s) outside [0, {rotation_length} days)",
            offsets.from_cycle_start.num_seconds()
        )));
    }
    if offsets.span < Duration::zero() || offsets.span >= cycle {
        return Err(RotaError::InvalidTemplate(format!(
            "span ({}s) outside [0, {rotation_length} days)",
            offsets.span.num_seconds()
        )));
    }

    let (start_days, start_time) = split_days(offsets.from_cycle_start);
    let (end_days, end_time) = split_days(offsets.from_cycle_start + offsets.span);

    Ok(RotationTemplateEntry {
        location_id,
        start_day_offset: to_offset(start_days, rotation_length)?,
        start_time,
        end_day_offset: to_offset(end_days, rotation_length)?,
        end_time,
        default_worker,
    })
}

fn split_days(duration: Duration) -> (i64, NaiveTime) {
    let days = duration.num_days();
    let (time, _) = util::midnight().overflowing_add_signed(duration - Duration::days(days));
    (days, time)
}

fn to_offset(days: i64, rotation_length: u32) -> Result<u32, RotaError> {
    let offset = days.rem_euclid(i64::from(rotation_length));
    u32::try_from(offset)
        .map_err(|_| RotaError::InvalidTemplate(format!("day offset {offset} does not fit")))
}
