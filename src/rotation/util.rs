use super::RotaError;
use chrono::{Duration, NaiveTime, Timelike};

pub(super) fn midnight() -> NaiveTime {
    NaiveTime::MIN
}

/// Durée écoulée depuis minuit.
pub(super) fn since_midnight(time: NaiveTime) -> Duration {
    time.signed_duration_since(midnight())
}

pub(super) fn ensure_rotation_length(rotation_length: u32) -> Result<(), RotaError> {
    if rotation_length == 0 {
        return Err(RotaError::InvalidTemplate(
            "rotation length must be > 0, got 0".to_string(),
        ));
    }
    Ok(())
}

pub(super) fn ensure_day_offset(
    field: &str,
    offset: u32,
    rotation_length: u32,
) -> Result<(), RotaError> {
    if offset >= rotation_length {
        return Err(RotaError::InvalidTemplate(format!(
            "{field} {offset} outside [0, {rotation_length})"
        )));
    }
    Ok(())
}

/// Refuse les secondes intercalaires (`23:59:60`) : elles débordent sur le
/// jour suivant.
pub(super) fn ensure_plain_time(field: &str, time: NaiveTime) -> Result<(), RotaError> {
    if time.nanosecond() >= 1_000_000_000 {
        return Err(RotaError::InvalidTemplate(format!(
            "{field} {time} is a leap second"
        )));
    }
    Ok(())
}
