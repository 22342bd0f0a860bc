//! Time bound parsing for the `--since` and `--before` flags.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// An instant used as an inclusive bound on note creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    threshold: DateTime<Utc>,
}

impl DateFilter {
    /// Parses a time bound relative to the current time.
    ///
    /// Accepts:
    /// - Relative: "7d", "12h", "2w" (that long before now)
    /// - Absolute: "2024-01-15" (midnight UTC of that day)
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::parse_at(s, Utc::now())
    }

    /// Parses a time bound with relative forms measured back from `now`.
    pub fn parse_at(s: &str, now: DateTime<Utc>) -> Result<Self, String> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let threshold = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| format!("invalid date: {s}"))?
                .and_utc();
            return Ok(Self { threshold });
        }

        let unit = s
            .chars()
            .last()
            .ok_or_else(|| "empty time bound".to_string())?;
        let amount = &s[..s.len() - unit.len_utf8()];
        let amount: i64 = amount.parse().map_err(|_| {
            format!("invalid time bound (expected YYYY-MM-DD or a number followed by h, d or w): {s}")
        })?;
        if amount < 0 {
            return Err(format!("relative time must be non-negative: {s}"));
        }

        let span = match unit {
            'h' => TimeDelta::try_hours(amount),
            'd' => TimeDelta::try_days(amount),
            'w' => TimeDelta::try_weeks(amount),
            _ => return Err(format!("unknown time unit '{unit}' in {s} (use h, d or w)")),
        };
        let threshold = span
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| format!("relative time is out of range: {s}"))?;

        Ok(Self { threshold })
    }

    /// Returns the threshold datetime.
    pub fn threshold(&self) -> DateTime<Utc> {
        self.threshold
    }
}

/// Parses an optional flag value, naming the flag in the error.
pub fn parse_bound(flag: &str, value: Option<&str>) -> anyhow::Result<Option<DateTime<Utc>>> {
    value
        .map(|v| {
            DateFilter::parse(v)
                .map(|f| f.threshold())
                .map_err(|e| anyhow::anyhow!("invalid --{flag} value: {e}"))
        })
        .transpose()
}
