//! Stay range and room selection for a prospective booking

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Check-in and check-out dates of a stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    #[must_use]
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Build a range from timestamps, keeping only their calendar dates.
    ///
    /// A 23:00 check-in and a 01:00 check-out on the next day is one night.
    #[must_use]
    pub fn from_datetimes<Tz: TimeZone>(check_in: &DateTime<Tz>, check_out: &DateTime<Tz>) -> Self {
        Self::new(check_in.date_naive(), check_out.date_naive())
    }

    /// Same as [`StayRange::from_datetimes`] for zone-less timestamps
    #[must_use]
    pub fn from_naive_datetimes(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Self {
        Self::new(check_in.date(), check_out.date())
    }

    /// True when check-out is strictly after check-in
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check_out > self.check_in
    }

    /// Number of billable nights, 0 for an invalid range
    #[must_use]
    pub fn nights(&self) -> u32 {
        if !self.is_valid() {
            return 0;
        }
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

/// Room rate and number of rooms picked in the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSelection {
    pub nightly_rate: Decimal,
    /// Signed so that negative form input reaches validation instead of wrapping
    pub room_count: i32,
}

impl RoomSelection {
    #[must_use]
    pub fn new(nightly_rate: Decimal, room_count: i32) -> Self {
        Self {
            nightly_rate,
            room_count,
        }
    }

    #[must_use]
    pub fn has_valid_count(&self) -> bool {
        self.room_count >= 1
    }

    #[must_use]
    pub fn has_valid_rate(&self) -> bool {
        self.nightly_rate >= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2025, 1, 10), date(2025, 1, 13), 3)]
    #[case(date(2025, 1, 10), date(2025, 1, 11), 1)]
    #[case(date(2024, 2, 28), date(2024, 3, 1), 2)]
    #[case(date(2024, 12, 31), date(2025, 1, 1), 1)]
    #[case(date(2025, 1, 10), date(2025, 1, 10), 0)]
    #[case(date(2025, 1, 13), date(2025, 1, 10), 0)]
    fn test_nights(#[case] check_in: NaiveDate, #[case] check_out: NaiveDate, #[case] expected: u32) {
        assert_eq!(StayRange::new(check_in, check_out).nights(), expected);
    }

    #[test]
    fn test_same_day_is_invalid() {
        let stay = StayRange::new(date(2025, 1, 10), date(2025, 1, 10));
        assert!(!stay.is_valid());
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let check_in = date(2025, 1, 10).and_time(NaiveTime::from_hms_opt(23, 0, 0).unwrap());
        let check_out = date(2025, 1, 11).and_time(NaiveTime::from_hms_opt(1, 0, 0).unwrap());
        let stay = StayRange::from_naive_datetimes(check_in, check_out);
        assert_eq!(stay.nights(), 1);

        let tz = FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap();
        let check_in = tz.with_ymd_and_hms(2025, 1, 10, 6, 30, 0).unwrap();
        let check_out = tz.with_ymd_and_hms(2025, 1, 13, 21, 0, 0).unwrap();
        assert_eq!(StayRange::from_datetimes(&check_in, &check_out).nights(), 3);
    }

    #[test]
    fn test_room_selection_validity() {
        assert!(RoomSelection::new(dec!(1000), 2).has_valid_count());
        assert!(!RoomSelection::new(dec!(1000), 0).has_valid_count());
        assert!(!RoomSelection::new(dec!(1000), -1).has_valid_count());
        assert!(RoomSelection::new(dec!(0), 1).has_valid_rate());
        assert!(!RoomSelection::new(dec!(-0.01), 1).has_valid_rate());
    }
}
