//! The Pax calendar (James A. Colligan, 1930), a leap-week calendar.
//!
//! A common year has thirteen months of 28 days, i.e. exactly 52 weeks, and
//! every year starts on a Sunday. To keep in step with the seasons, a leap
//! year inserts a whole week, the month of Pax, between the twelfth month
//! and the last one, which is then numbered 14.
//!
//! A year is a leap year when its last two digits are 99, or are divisible
//! by 6, except in years divisible by 400.

use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS};
use crate::{
    consts::{CENTURY_CYCLE, DAYS_IN_WEEK, GREGORIAN_CYCLE},
    error::{CalendarError, Component, check_range},
    range::Range,
};

const DAYS_IN_MONTH: i32 = 28;
const DAYS_IN_COMMON_YEAR: i32 = 13 * DAYS_IN_MONTH;
/// Zero-based day of a leap year at which the month of Pax starts.
const PAX_START: i32 = 12 * DAYS_IN_MONTH;
/// Weeks in a common year.
const WEEKS_IN_COMMON_YEAR: i32 = 52;

/// Number of leap years in `[1, year)`, shifted by a constant.
///
/// Per century there are 18 leap years (the 17 multiples of 6 from 0 to
/// 96, and 99), one less in centuries divisible by 4 (year 00 is not leap).
const fn leap_years_before(year: i64) -> i64 {
    let century = year.div_euclid(CENTURY_CYCLE as i64);
    let rest = year - CENTURY_CYCLE as i64 * century;
    let mut count = 18 * century - (century + 3).div_euclid(4) + (rest + 5) / 6;
    if rest > 0 && century.rem_euclid(4) == 0 {
        count -= 1;
    }
    count
}

/// The Pax calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaxSchema;

impl PaxSchema {
    pub const fn new() -> Self {
        Self
    }

    pub const fn is_leap(year: i32) -> bool {
        let rest = year.rem_euclid(CENTURY_CYCLE);
        rest == 99 || (rest % 6 == 0 && year.rem_euclid(GREGORIAN_CYCLE) != 0)
    }

    const fn start_of_year(year: i64) -> i64 {
        DAYS_IN_COMMON_YEAR as i64 * (year - 1) + DAYS_IN_WEEK as i64 * (leap_years_before(year) - leap_years_before(1))
    }

    const fn months_before_year(year: i64) -> i64 {
        13 * (year - 1) + leap_years_before(year) - leap_years_before(1)
    }

    /// Number of weeks in `year`: 52, or 53 in leap years.
    pub const fn count_weeks_in_year(year: i32) -> i32 {
        WEEKS_IN_COMMON_YEAR + Self::is_leap(year) as i32
    }

    /// True for the week of Pax; `week_of_year` must be valid.
    pub const fn is_intercalary_week(year: i32, week_of_year: i32) -> bool {
        week_of_year == PAX_START / DAYS_IN_WEEK + 1 && Self::is_leap(year)
    }

    /// Days since the epoch of `(year, week_of_year, day_of_week)`, with
    /// `day_of_week` running from 1 (Sunday) to 7 (Saturday).
    pub fn count_days_since_epoch_from_week(&self, year: i32, week_of_year: i32, day_of_week: i32) -> i32 {
        self.get_start_of_year(year) + DAYS_IN_WEEK * (week_of_year - 1) + day_of_week - 1
    }

    /// Inverse of [`count_days_since_epoch_from_week`], as
    /// `(year, week_of_year, day_of_week)`.
    ///
    /// [`count_days_since_epoch_from_week`]: PaxSchema::count_days_since_epoch_from_week
    pub fn get_week_parts(&self, days_since_epoch: i32) -> (i32, i32, i32) {
        let (year, day_of_year) = self.get_year(days_since_epoch);
        let d0 = day_of_year - 1;
        (year, d0 / DAYS_IN_WEEK + 1, d0 % DAYS_IN_WEEK + 1)
    }

    /// Fails with a range error unless `(week_of_year, day_of_week)` exists
    /// in `year`.
    ///
    /// # Errors
    /// Returns a range error naming [`Component::Week`] or
    /// [`Component::DayOfWeek`].
    pub fn validate_week_date(&self, year: i32, week_of_year: i32, day_of_week: i32) -> Result<(), CalendarError> {
        check_range(Component::Week, week_of_year, 1, Self::count_weeks_in_year(year))?;
        check_range(Component::DayOfWeek, day_of_week, 1, DAYS_IN_WEEK)
    }
}

impl CalendricalKernel for PaxSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn is_regular(&self) -> Option<i32> {
        None
    }

    fn is_leap_year(&self, year: i32) -> bool {
        Self::is_leap(year)
    }

    fn is_intercalary_month(&self, year: i32, month: i32) -> bool {
        month == 13 && Self::is_leap(year)
    }

    fn is_intercalary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, year: i32) -> i32 {
        13 + i32::from(Self::is_leap(year))
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        DAYS_IN_COMMON_YEAR + DAYS_IN_WEEK * i32::from(Self::is_leap(year))
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 13 && Self::is_leap(year) { DAYS_IN_WEEK } else { DAYS_IN_MONTH }
    }
}

impl CalendricalSchema for PaxSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        DAYS_IN_WEEK
    }

    fn min_months_in_year(&self) -> i32 {
        13
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        if month == 14 && Self::is_leap(year) {
            PAX_START + DAYS_IN_WEEK
        } else {
            DAYS_IN_MONTH * (month - 1)
        }
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        Self::months_before_year(i64::from(year)) as i32 + month - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
        let months = i64::from(months_since_epoch);
        // 5271 months every 400 years.
        let mut year = (400 * months).div_euclid(5271) + 1;
        if months < Self::months_before_year(year) {
            year -= 1;
        } else if months >= Self::months_before_year(year + 1) {
            year += 1;
        }
        (year as i32, (months - Self::months_before_year(year)) as i32 + 1)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let days = i64::from(days_since_epoch);
        // 146_097 days every 400 years, as in the Gregorian calendar.
        let mut year = (400 * days).div_euclid(146_097) + 1;
        if days < Self::start_of_year(year) {
            year -= 1;
        } else if days >= Self::start_of_year(year + 1) {
            year += 1;
        }
        (year as i32, (days - Self::start_of_year(year)) as i32 + 1)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let d0 = day_of_year - 1;
        if d0 >= PAX_START && Self::is_leap(year) {
            return if d0 < PAX_START + DAYS_IN_WEEK {
                (13, d0 - PAX_START + 1)
            } else {
                (14, d0 - PAX_START - DAYS_IN_WEEK + 1)
            };
        }
        (d0 / DAYS_IN_MONTH + 1, d0 % DAYS_IN_MONTH + 1)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        Self::start_of_year(i64::from(year)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: PaxSchema = PaxSchema::new();

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 1999, is_leap: true, description: "ends in 99" },
            TestCase { year: 2004, is_leap: false, description: "not divisible by 6" },
            TestCase { year: 2006, is_leap: true, description: "divisible by 6" },
            TestCase { year: 1900, is_leap: true, description: "century, 00 is divisible by 6" },
            TestCase { year: 2000, is_leap: false, description: "divisible by 400" },
            TestCase { year: 2099, is_leap: true, description: "ends in 99" },
            TestCase { year: -1, is_leap: true, description: "ends in 99 after floor division" },
            TestCase { year: 0, is_leap: false, description: "year zero is divisible by 400" },
        ];

        for case in &cases {
            assert_eq!(SCHEMA.is_leap_year(case.year), case.is_leap, "Year {} ({})", case.year, case.description);
        }
    }

    #[test]
    fn test_leap_year_structure() {
        assert_eq!(SCHEMA.count_months_in_year(2006), 14);
        assert_eq!(SCHEMA.count_days_in_year(2006), 371);
        assert_eq!(SCHEMA.count_days_in_month(2006, 13), 7);
        assert_eq!(SCHEMA.count_days_in_month(2006, 14), 28);
        assert!(SCHEMA.is_intercalary_month(2006, 13));
        assert!(!SCHEMA.is_intercalary_month(2005, 13));
        assert_eq!(SCHEMA.get_month(2006, 337), (13, 1));
        assert_eq!(SCHEMA.get_month(2006, 344), (14, 1));
        assert_eq!(SCHEMA.get_month(2006, 371), (14, 28));
        assert_eq!(SCHEMA.get_month(2005, 364), (13, 28));
    }

    #[test]
    fn test_years_are_whole_weeks() {
        for year in -1000..=1000 {
            assert_eq!(SCHEMA.get_start_of_year(year).rem_euclid(DAYS_IN_WEEK), 0, "year {year}");
        }
        assert_eq!(SCHEMA.get_start_of_year(1), 0);
    }

    #[test]
    fn test_round_trip_over_many_years() {
        let mut days_since_epoch = SCHEMA.get_start_of_year(-801);
        let mut months_since_epoch = SCHEMA.get_start_of_year_in_months(-801);
        for year in -801..=801 {
            assert_eq!(SCHEMA.get_start_of_year(year), days_since_epoch, "start of year {year}");
            for month in 1..=SCHEMA.count_months_in_year(year) {
                assert_eq!(SCHEMA.get_month_parts(months_since_epoch), (year, month));
                months_since_epoch += 1;
                for day in 1..=SCHEMA.count_days_in_month(year, month) {
                    assert_eq!(SCHEMA.count_days_since_epoch(year, month, day), days_since_epoch);
                    assert_eq!(SCHEMA.get_date_parts(days_since_epoch), (year, month, day));
                    days_since_epoch += 1;
                }
            }
        }
    }

    #[test]
    fn test_week_family_agrees_with_dates() {
        for days_since_epoch in (-20_000..20_000).step_by(13) {
            let (year, week, day_of_week) = SCHEMA.get_week_parts(days_since_epoch);
            assert!(SCHEMA.validate_week_date(year, week, day_of_week).is_ok());
            assert_eq!(SCHEMA.count_days_since_epoch_from_week(year, week, day_of_week), days_since_epoch);

            let (y, month, day) = SCHEMA.get_date_parts(days_since_epoch);
            assert_eq!(y, year);
            // Months are made of whole weeks.
            assert_eq!((day - 1) % DAYS_IN_WEEK + 1, day_of_week, "{y}-{month}-{day}");
        }
    }

    #[test]
    fn test_week_validation() {
        assert_eq!(PaxSchema::count_weeks_in_year(2006), 53);
        assert_eq!(PaxSchema::count_weeks_in_year(2005), 52);
        assert!(PaxSchema::is_intercalary_week(2006, 49));
        assert!(!PaxSchema::is_intercalary_week(2005, 49));

        let err = SCHEMA.validate_week_date(2005, 53, 1).unwrap_err();
        assert_eq!(err.component(), Some(Component::Week));
        let err = SCHEMA.validate_week_date(2006, 53, 8).unwrap_err();
        assert_eq!(err.component(), Some(Component::DayOfWeek));
    }

    #[test]
    fn test_extreme_supported_years() {
        let range = SCHEMA.supported_years();
        for year in [range.min(), range.max()] {
            assert_eq!(SCHEMA.get_year(SCHEMA.get_start_of_year(year)), (year, 1));
            assert_eq!(SCHEMA.get_year(SCHEMA.get_end_of_year(year)), (year, SCHEMA.count_days_in_year(year)));
            let start = SCHEMA.get_start_of_year_in_months(year);
            assert_eq!(SCHEMA.get_month_parts(start), (year, 1));
        }
    }
}
