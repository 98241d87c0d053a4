use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::ValidationError;

/// RFC3339 timestamp guaranteed to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::parse(input, &Rfc3339).map_err(|_| {
            ValidationError::TimestampNotUtc {
                value: input.to_owned(),
            }
        })?;

        Self::from_offset_datetime(parsed).map_err(|_| ValidationError::TimestampNotUtc {
            value: input.to_owned(),
        })
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Result<Self, ValidationError> {
        if value.offset() != UtcOffset::UTC {
            return Err(ValidationError::TimestampNotUtc {
                value: value
                    .format(&Rfc3339)
                    .unwrap_or_else(|_| String::from("<unformattable>")),
            });
        }

        Ok(Self(value))
    }

    /// Builds a timestamp from UNIX seconds, the unit used by chart datasets.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(Self)
            .map_err(|_| ValidationError::TimestampOutOfRange { value: seconds })
    }

    /// Builds a timestamp from fractional UNIX seconds, as produced by inverting
    /// a time scale. Returns `None` for non-finite or unrepresentable input.
    pub fn from_unix_seconds_f64(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let nanos = (seconds * 1e9).round();
        if nanos.abs() >= i128::MAX as f64 {
            return None;
        }
        OffsetDateTime::from_unix_timestamp_nanos(nanos as i128)
            .ok()
            .map(Self)
    }

    /// Midnight UTC at the start of `date`.
    pub fn start_of_day(date: Date) -> Self {
        Self(date.midnight().assume_utc())
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn date(self) -> Date {
        self.0.date()
    }

    pub fn unix_seconds_f64(self) -> f64 {
        self.0.unix_timestamp_nanos() as f64 / 1e9
    }

    /// Absolute distance between two timestamps.
    pub fn distance(self, other: Self) -> Duration {
        (self.0 - other.0).abs()
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.0.unix_timestamp().to_string())
    }

    /// Calendar date in US short form, e.g. `3/1/2018`.
    pub fn format_calendar_date(self) -> String {
        let format = format_description!("[month padding:none]/[day padding:none]/[year]");
        self.0
            .format(&format)
            .unwrap_or_else(|_| self.date().to_string())
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input.trim(), &format).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_utc_timestamp() {
        let parsed = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn rejects_non_utc_timestamp() {
        let err = UtcDateTime::parse("2024-01-01T01:00:00+01:00").expect_err("must fail");
        assert!(matches!(err, ValidationError::TimestampNotUtc { .. }));
    }

    #[test]
    fn unix_seconds_map_to_utc() {
        let ts = UtcDateTime::from_unix_seconds(1_519_914_600).expect("in range");
        assert_eq!(ts.format_rfc3339(), "2018-03-01T14:30:00Z");
        assert_eq!(ts.unix_seconds_f64(), 1_519_914_600.0);
    }

    #[test]
    fn fractional_seconds_round_trip_through_f64() {
        let ts = UtcDateTime::from_unix_seconds_f64(1_519_914_600.5).expect("representable");
        assert_eq!(ts.into_inner().unix_timestamp(), 1_519_914_600);
        assert!(UtcDateTime::from_unix_seconds_f64(f64::NAN).is_none());
        assert!(UtcDateTime::from_unix_seconds_f64(f64::MAX).is_none());
    }

    #[test]
    fn calendar_date_has_no_padding() {
        let ts = UtcDateTime::start_of_day(date!(2018 - 03 - 01));
        assert_eq!(ts.format_calendar_date(), "3/1/2018");
    }

    #[test]
    fn parses_and_rejects_calendar_dates() {
        assert_eq!(parse_date("2018-01-01").expect("valid"), date!(2018 - 01 - 01));
        let err = parse_date("01/02/2018").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }
}
