//! Calendar-day value used to key daily results
//!
//! A `DayDate` is stored exactly as given: no check is made that the day
//! exists in the calendar. Use [`DayDate::to_naive_date`] when a real date is
//! needed.

use super::CoreError;
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single calendar day
///
/// Ordering is chronological: lexicographic over `(year, month, day)`, which
/// is the field declaration order used by the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DayDate {
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today's date in UTC
    ///
    /// Only the binary calls this; library code takes the date as a parameter.
    #[must_use]
    pub fn today() -> Self {
        Utc::now().date_naive().into()
    }

    /// Convert to a real calendar date, or `None` if the day does not exist
    ///
    /// # Examples
    /// ```
    /// use wordle_scores::core::DayDate;
    ///
    /// assert!(DayDate::new(2022, 3, 10).to_naive_date().is_some());
    /// assert!(DayDate::new(2022, 4, 31).to_naive_date().is_none());
    /// ```
    #[must_use]
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DayDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

/// `YYYY-MM-DD`
///
/// Only non-negative years read back through [`FromStr`]: a leading `-` leaves
/// an empty first component, which the parser skips.
impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DayDate {
    type Err = CoreError;

    /// Parse `YYYY-MM-DD`
    ///
    /// Components that are not integers are skipped; the parse succeeds only
    /// when exactly three numeric components remain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<i64> = s.split('-').filter_map(|c| c.parse().ok()).collect();

        let [year, month, day] = components[..] else {
            return Err(CoreError::InvalidDateFormat(s.to_string()));
        };

        let invalid = || CoreError::InvalidDateFormat(s.to_string());
        Ok(Self {
            year: i32::try_from(year).map_err(|_| invalid())?,
            month: u32::try_from(month).map_err(|_| invalid())?,
            day: u32::try_from(day).map_err(|_| invalid())?,
        })
    }
}

impl Serialize for DayDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_string_is_zero_padded() {
        assert_eq!(DayDate::new(2022, 3, 1).to_string(), "2022-03-01");
        assert_eq!(DayDate::new(987, 12, 31).to_string(), "0987-12-31");
    }

    #[test]
    fn parse_valid() {
        let date: DayDate = "2022-03-10".parse().unwrap();
        assert_eq!(date, DayDate::new(2022, 3, 10));
    }

    #[test]
    fn parse_does_not_validate_bounds() {
        let date: DayDate = "2022-11-31".parse().unwrap();
        assert_eq!(date, DayDate::new(2022, 11, 31));
        assert!(date.to_naive_date().is_none());
    }

    #[test]
    fn parse_invalid_carries_input() {
        for input in ["", "2022-03", "2022/03/01", "2022-03-01-05", "a-b-c"] {
            assert_eq!(
                input.parse::<DayDate>(),
                Err(CoreError::InvalidDateFormat(input.to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_skips_non_numeric_components() {
        let date: DayDate = "2022-x-03-01".parse().unwrap();
        assert_eq!(date, DayDate::new(2022, 3, 1));
    }

    #[test]
    fn round_trip_through_string() {
        for date in [
            DayDate::new(2021, 6, 19),
            DayDate::new(2022, 12, 31),
            DayDate::new(1, 1, 1),
            DayDate::new(0, 1, 1),
            DayDate::new(9999, 12, 31),
        ] {
            assert_eq!(date.to_string().parse::<DayDate>(), Ok(date));
        }
    }

    #[test]
    fn negative_year_does_not_read_back() {
        let date = DayDate::new(-1, 1, 1);
        assert_eq!(date.to_string(), "-001-01-01");
        assert_eq!(date.to_string().parse::<DayDate>(), Ok(DayDate::new(1, 1, 1)));
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(DayDate::new(2021, 12, 31) < DayDate::new(2022, 1, 1));
        assert!(DayDate::new(2022, 11, 31) < DayDate::new(2022, 12, 1));
        assert!(DayDate::new(2022, 12, 30) < DayDate::new(2022, 12, 31));

        let date = DayDate::new(2022, 3, 1);
        assert!(!(date < date));
    }

    #[test]
    fn ordering_across_year_boundary_ignores_month() {
        // A later year wins even when its month and day are smaller
        assert!(DayDate::new(2023, 1, 1) > DayDate::new(2022, 12, 31));
        assert!(!(DayDate::new(2023, 1, 1) < DayDate::new(2022, 12, 31)));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&DayDate::new(2022, 3, 1)).unwrap();
        assert_eq!(json, "\"2022-03-01\"");

        let date: DayDate = serde_json::from_str("\"2022-03-09\"").unwrap();
        assert_eq!(date, DayDate::new(2022, 3, 9));
    }

    #[test]
    fn deserialize_rejects_bad_format() {
        let err = serde_json::from_str::<DayDate>("\"March 9\"").unwrap_err();
        assert!(err.to_string().contains("Invalid date format"));
    }

    #[test]
    fn from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2022, 3, 10).unwrap();
        assert_eq!(DayDate::from(naive), DayDate::new(2022, 3, 10));
    }
}
