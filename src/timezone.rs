//! Resolves canonical timezone names into UTC offsets.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the current UTC offset of the timezone named `canonical_timezone`,
/// e.g. "Europe/Skopje", or `None` if there is no such timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Get today's date in the timezone named `canonical_timezone`.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the timezone does not exist.
pub fn local_today(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {canonical_timezone}");
        Error::InvalidTimezoneError(canonical_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}
