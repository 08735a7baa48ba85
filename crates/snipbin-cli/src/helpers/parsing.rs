//! Parsing helpers for datetime, duration, and output format.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date value: {}", value))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    Err(anyhow::anyhow!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
}

/// Parse a duration string (e.g., "7d", "24h").
pub fn parse_duration(value: &str) -> anyhow::Result<Duration> {
    let invalid = || anyhow::anyhow!("Invalid duration: {} (expected <number><unit>)", value);

    let (split, unit) = value.char_indices().last().ok_or_else(invalid)?;
    let num_str = &value[..split];
    if num_str.is_empty() {
        return Err(invalid());
    }

    let amount: i64 = num_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", value))?;
    if amount <= 0 {
        return Err(anyhow::anyhow!("Duration must be positive: {}", value));
    }

    let duration = match unit {
        'd' => Duration::try_days(amount),
        'h' => Duration::try_hours(amount),
        'm' => Duration::try_minutes(amount),
        's' => Duration::try_seconds(amount),
        _ => {
            return Err(anyhow::anyhow!(
                "Invalid duration unit: {} (use d/h/m/s)",
                unit
            ))
        }
    };
    duration.ok_or_else(|| anyhow::anyhow!("Duration too large: {}", value))
}

/// Work out the burn time for `create`.
///
/// An explicit --burn-at wins, then --burn-in, then the config default.
pub fn resolve_burn_at(
    burn_at: Option<&str>,
    burn_in: Option<&str>,
    default_burn_in: Option<&str>,
    now: DateTime<Utc>,
) -> anyhow::Result<Option<DateTime<Utc>>> {
    if let Some(value) = burn_at {
        return parse_datetime(value).map(Some);
    }
    match burn_in.or(default_burn_in) {
        Some(value) => {
            let burn_at = now
                .checked_add_signed(parse_duration(value)?)
                .ok_or_else(|| anyhow::anyhow!("Burn time out of range: {}", value))?;
            Ok(Some(burn_at))
        }
        None => Ok(None),
    }
}

/// Output format for list output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_forms() {
        let expected = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_datetime("2026-05-01").unwrap(), expected);
        assert_eq!(parse_datetime("2026-05-01T02:00:00+02:00").unwrap(), expected);
        assert!(parse_datetime("next tuesday").is_err());
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("7d").unwrap(), Duration::days(7));
        assert_eq!(parse_duration("10m").unwrap(), Duration::minutes(10));
        assert!(parse_duration("0h").is_err());
        assert!(parse_duration("5w").is_err());
        assert!(parse_duration("d").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_multibyte_unit() {
        assert!(parse_duration("5é").is_err());
        assert!(parse_duration("é").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_out_of_range_amounts() {
        assert!(parse_duration("99999999999999d").is_err());
        assert!(parse_duration("9223372036854775807s").is_err());
        assert!(parse_duration("99999999999999999999d").is_err());
    }

    #[test]
    fn test_resolve_burn_at_rejects_overflowing_offset() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        assert!(resolve_burn_at(None, Some("100000000d"), None, now).is_err());
        assert!(resolve_burn_at(None, None, Some("100000000d"), now).is_err());
    }

    #[test]
    fn test_resolve_burn_at_precedence() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(resolve_burn_at(None, None, None, now).unwrap(), None);
        assert_eq!(
            resolve_burn_at(None, None, Some("1d"), now).unwrap(),
            Some(now + Duration::days(1))
        );
        assert_eq!(
            resolve_burn_at(None, Some("1h"), Some("1d"), now).unwrap(),
            Some(now + Duration::hours(1))
        );
        assert_eq!(
            resolve_burn_at(Some("2026-02-01"), Some("1h"), None, now).unwrap(),
            Some(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
