use anyhow::{anyhow, Context, Result};
use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};
use log::debug;

/// Naive local layouts accepted on the command line, most specific first
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Render an instant as a UTC timestamp with millisecond precision,
/// e.g. `2024-03-07T01:05:00.000Z`.
///
/// Years outside 0..=9999 use the signed six-digit extended form
/// (`+010000-01-02T03:04:00.000Z`).
pub fn to_iso_string<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let utc = at.with_timezone(&Utc);
    let year = utc.year();
    if (0..=9999).contains(&year) {
        return utc.to_rfc3339_opts(SecondsFormat::Millis, true);
    }

    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:06}-{}",
        sign,
        year.unsigned_abs(),
        utc.format("%m-%dT%H:%M:%S%.3fZ")
    )
}

/// Get the current local time
pub fn current_timestamp() -> DateTime<Local> {
    Local::now()
}

/// Parse a timestamp argument into local time.
///
/// Accepts RFC 3339, naive local date-times, a bare local date (midnight)
/// or integer Unix milliseconds.
pub fn parse_instant(input: &str) -> Result<DateTime<Local>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty timestamp"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        debug!("Parsed '{}' as RFC 3339", input);
        return Ok(dt.with_timezone(&Local));
    }

    if let Ok(millis) = input.parse::<i64>() {
        debug!("Parsed '{}' as Unix milliseconds", input);
        return DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.with_timezone(&Local))
            .ok_or_else(|| anyhow!("Unix milliseconds out of range: {}", millis));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            debug!("Parsed '{}' as local time with layout '{}'", input, format);
            return local_from_naive(&Local, &naive, input);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .with_context(|| format!("Invalid midnight for date: {}", input))?;
        return local_from_naive(&Local, &midnight, input);
    }

    Err(anyhow!(
        "Unrecognized timestamp '{}'. Use RFC 3339, 'YYYY-MM-DD HH:MM[:SS]', 'YYYY-MM-DD' or Unix milliseconds",
        input
    ))
}

fn local_from_naive<Tz: TimeZone>(
    tz: &Tz,
    naive: &NaiveDateTime,
    input: &str,
) -> Result<DateTime<Tz>> {
    earliest_or_gap(tz.from_local_datetime(naive), input)
}

/// Ambiguous wall-clock times (DST fall-back) take the earlier instant;
/// times skipped by a DST jump are an error.
fn earliest_or_gap<Tz: TimeZone>(
    result: LocalResult<DateTime<Tz>>,
    input: &str,
) -> Result<DateTime<Tz>> {
    result
        .earliest()
        .ok_or_else(|| anyhow!("Local time '{}' does not exist in the current timezone", input))
}
