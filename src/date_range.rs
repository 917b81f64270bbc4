//! # Date-Range Filter
//!
//! The one inclusive calendar-day filter used by the admin order listing, the
//! delivery schedule and order history.
//!
//! Everything is compared as a [`NaiveDate`]. Timestamps are reduced to their
//! calendar day in an offset the caller picks ([`calendar_day`]) before they
//! get here, so a record stamped late in the evening never slides into the
//! next day because of the host's timezone.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use meat_order::date_range::DateRange;
//!
//! let dates = [15, 20, 25].map(|d| NaiveDate::from_ymd_opt(2023, 12, d).unwrap());
//! let range = DateRange::from_strs(Some("2023-12-16"), Some("2023-12-24")).unwrap();
//! assert_eq!(range.filter(dates), vec![dates[1]]);
//! ```

use chrono::{DateTime, NaiveDate, TimeZone};
use thiserror::Error;

/// Anything that falls on a calendar day.
pub trait Dated {
    fn day(&self) -> NaiveDate;
}

impl Dated for NaiveDate {
    fn day(&self) -> NaiveDate {
        *self
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn day(&self) -> NaiveDate {
        (**self).day()
    }
}

/// Reduces an instant to its calendar day in the instant's own offset.
///
/// Convert first (`instant.with_timezone(&offset)`) to pick a different day boundary.
pub fn calendar_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Inclusive range of calendar days. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range, swapping the bounds when `end` precedes `start`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) if e < s => Self {
                start: Some(e),
                end: Some(s),
            },
            _ => Self { start, end },
        }
    }

    /// Matches every day.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Parses `YYYY-MM-DD` bounds. `None` and blank strings mean unbounded.
    pub fn from_strs(start: Option<&str>, end: Option<&str>) -> Result<Self, FilterError> {
        Ok(Self::new(parse_bound(start)?, parse_bound(end)?))
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// `start <= day <= end`.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.is_none_or(|start| start <= day) && self.end.is_none_or(|end| day <= end)
    }

    /// Keeps the records whose day lies in the range, preserving their order.
    pub fn filter<T, I>(&self, records: I) -> Vec<T>
    where
        T: Dated,
        I: IntoIterator<Item = T>,
    {
        records
            .into_iter()
            .filter(|record| self.contains(record.day()))
            .collect()
    }
}

fn parse_bound(input: Option<&str>) -> Result<Option<NaiveDate>, FilterError> {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|source| FilterError::InvalidDate {
            input: input.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, d).unwrap()
    }

    fn december() -> Vec<NaiveDate> {
        (1..=31).map(day).collect()
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DateRange::between(day(15), day(25));
        assert!(range.contains(day(15)));
        assert!(range.contains(day(25)));
        assert!(!range.contains(day(14)));
        assert!(!range.contains(day(26)));
    }

    #[test]
    fn schedule_between_16th_and_24th_keeps_only_20th() {
        let schedule = [day(15), day(20), day(25)];
        let range = DateRange::from_strs(Some("2023-12-16"), Some("2023-12-24")).unwrap();
        assert_eq!(range.filter(schedule), vec![day(20)]);
    }

    #[test]
    fn missing_bounds_are_open() {
        assert_eq!(DateRange::unbounded().filter(december()).len(), 31);
        assert_eq!(DateRange::new(Some(day(30)), None).filter(december()), vec![day(30), day(31)]);
        assert_eq!(DateRange::new(None, Some(day(2))).filter(december()), vec![day(1), day(2)]);
        assert!(DateRange::from_strs(Some(""), None).unwrap().is_unbounded());
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        assert_eq!(
            DateRange::between(day(24), day(16)),
            DateRange::between(day(16), day(24))
        );
    }

    #[test]
    fn widening_never_drops_records() {
        for start in 1..=15 {
            for end in 15..=31 {
                let narrow = DateRange::between(day(start), day(end)).filter(december());
                let wide_start = start.saturating_sub(3).max(1);
                let wide = DateRange::between(day(wide_start), day(end)).filter(december());
                assert!(narrow.iter().all(|d| wide.contains(d)));
            }
        }
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let range = DateRange::between(day(10), day(20));
        let once = range.filter(december());
        let twice = range.filter(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_bound_is_a_filter_error() {
        let err = DateRange::from_strs(Some("16/12/2023"), None).unwrap_err();
        assert!(matches!(err, FilterError::InvalidDate { ref input, .. } if input == "16/12/2023"));
    }

    #[test]
    fn instants_compare_by_calendar_day_in_chosen_offset() {
        // 23:30 UTC on the 24th is already the 25th in UTC+2.
        let instant = Utc.with_ymd_and_hms(2023, 12, 24, 23, 30, 0).unwrap();
        let range = DateRange::between(day(16), day(24));
        assert!(range.contains(calendar_day(&instant)));

        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        assert!(!range.contains(calendar_day(&instant.with_timezone(&east))));
    }
}
