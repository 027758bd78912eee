use super::{offsets, Expansion, RosterState, RotaError, TemplateOffsets};
use crate::model::{GeneratedShift, RotationTemplateEntry};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub(super) fn expand(
    state: &RosterState,
    templates: &[RotationTemplateEntry],
    length_in_days: i64,
) -> Result<Expansion, RotaError> {
    if length_in_days < 0 {
        return Err(RotaError::InvalidArgument(format!(
            "length in days must be >= 0, got {length_in_days}"
        )));
    }
    state.validate()?;

    // tout est validé avant d'émettre quoi que ce soit
    let prepared: Vec<(&RotationTemplateEntry, TemplateOffsets)> = templates
        .iter()
        .map(|t| offsets::template_offsets(t, state.rotation_length).map(|o| (t, o)))
        .collect::<Result<_, _>>()?;

    // length_in_days >= 0 vérifié plus haut
    let days = length_in_days as u64;
    let draft_length = state.draft_length.checked_add(days).ok_or_else(|| {
        RotaError::InvalidArgument(format!(
            "draft length {} cannot grow by {days} days",
            state.draft_length
        ))
    })?;
    let horizon = state
        .last_draft_date
        .checked_add_days(Days::new(days))
        .ok_or_else(|| {
            RotaError::DateOutOfRange(format!(
                "cannot draft {days} days after {}",
                state.last_draft_date
            ))
        })?;

    let mut next = state.clone();
    let mut shifts = Vec::new();

    while next.last_draft_date < horizon {
        let day = next.next_unplanned_date().ok_or_else(|| {
            RotaError::DateOutOfRange(format!("no day after {}", next.last_draft_date))
        })?;
        let offset = next.unplanned_rotation_offset;

        for (entry, template_offsets) in prepared
            .iter()
            .filter(|(entry, _)| entry.start_day_offset == offset)
        {
            shifts.push(build_shift(day, offset, entry, template_offsets)?);
        }

        next.unplanned_rotation_offset = (offset + 1) % next.rotation_length;
        next.last_draft_date = day;
    }

    next.draft_length = draft_length;

    #[cfg(feature = "logging")]
    tracing::debug!(
        days = length_in_days,
        shifts = shifts.len(),
        last_draft_date = %next.last_draft_date,
        unplanned_rotation_offset = next.unplanned_rotation_offset,
        "draft horizon extended"
    );

    Ok(Expansion {
        state: next,
        shifts,
    })
}

pub(super) fn publish(
    state: &RosterState,
    templates: &[RotationTemplateEntry],
) -> Result<Expansion, RotaError> {
    let days = state.publish_length;
    let mut expansion = expand(state, templates, i64::from(days))?;
    expansion.state.first_draft_date = state
        .first_draft_date
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| {
            RotaError::DateOutOfRange(format!(
                "cannot publish {days} days after {}",
                state.first_draft_date
            ))
        })?;

    #[cfg(feature = "logging")]
    tracing::info!(
        days,
        first_draft_date = %expansion.state.first_draft_date,
        "draft window published"
    );

    Ok(expansion)
}

fn build_shift(
    day: NaiveDate,
    offset: u32,
    entry: &RotationTemplateEntry,
    template_offsets: &TemplateOffsets,
) -> Result<GeneratedShift, RotaError> {
    let start: DateTime<Utc> = Utc.from_utc_datetime(&NaiveDateTime::new(day, entry.start_time));
    let end = start
        .checked_add_signed(template_offsets.span)
        .ok_or_else(|| RotaError::DateOutOfRange(format!("shift starting {start} ends too late")))?;
    Ok(GeneratedShift {
        location_id: entry.location_id.clone(),
        start,
        end,
        rotation_offset: offset,
        assigned_worker: entry.default_worker.clone(),
    })
}
