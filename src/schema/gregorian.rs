use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS, solar};
use crate::{
    consts::{CENTURY_CYCLE, DAYS_IN_400_YEAR_CYCLE, DAYS_IN_4_YEAR_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE},
    range::Range,
};

/// Days from March 1st of year 0 to January 1st of year 1.
const DAYS_FROM_MARCH_TO_JANUARY: i64 = 306;

/// The proleptic Gregorian calendar.
///
/// Conversions use the March-based arithmetic of the civil calendar: once
/// the year starts on March 1st, the leap day falls at the very end of a
/// year and month lengths follow the `153 / 5` pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianSchema;

impl GregorianSchema {
    pub const fn new() -> Self {
        Self
    }

    pub const fn is_leap(year: i32) -> bool {
        (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
    }

    pub const fn days_in_month(year: i32, month: i32) -> i32 {
        solar::days_in_month(Self::is_leap(year), month)
    }

    /// Closed form of [`CalendricalSchema::count_days_since_epoch`].
    pub const fn days_since_epoch(year: i32, month: i32, day: i32) -> i32 {
        let (mut y, mut m) = (year as i64, month as i64);
        if m < 3 {
            y -= 1;
            m += 9;
        } else {
            m -= 3;
        }
        let century = y.div_euclid(CENTURY_CYCLE as i64);
        let year_of_century = y - CENTURY_CYCLE as i64 * century;
        let days = ((DAYS_IN_400_YEAR_CYCLE as i64 * century) >> 2)
            + ((DAYS_IN_4_YEAR_CYCLE as i64 * year_of_century) >> 2)
            + (153 * m + 2) / 5
            + day as i64
            - 1
            - DAYS_FROM_MARCH_TO_JANUARY;
        days as i32
    }

    /// Closed form of [`CalendricalSchema::get_date_parts`].
    pub const fn date_parts(days_since_epoch: i32) -> (i32, i32, i32) {
        let days = days_since_epoch as i64 + DAYS_FROM_MARCH_TO_JANUARY;
        let century = (4 * days + 3).div_euclid(DAYS_IN_400_YEAR_CYCLE as i64);
        let mut d = days - ((DAYS_IN_400_YEAR_CYCLE as i64 * century) >> 2);
        let mut year = (4 * d + 3) / DAYS_IN_4_YEAR_CYCLE as i64;
        d -= (DAYS_IN_4_YEAR_CYCLE as i64 * year) >> 2;
        let mut month = (5 * d + 2) / 153;
        let day = 1 + d - (153 * month + 2) / 5;
        if month > 9 {
            year += 1;
            month -= 9;
        } else {
            month += 3;
        }
        ((CENTURY_CYCLE as i64 * century + year) as i32, month as i32, day as i32)
    }

    /// Closed form of [`CalendricalSchema::get_start_of_year`].
    pub const fn start_of_year(year: i32) -> i32 {
        let y = year as i64 - 1;
        let days = 365 * y + y.div_euclid(LEAP_YEAR_CYCLE as i64) - y.div_euclid(CENTURY_CYCLE as i64)
            + y.div_euclid(GREGORIAN_CYCLE as i64);
        days as i32
    }
}

impl CalendricalKernel for GregorianSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn is_regular(&self) -> Option<i32> {
        Some(12)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        Self::is_leap(year)
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 2 && day == 29
    }

    fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        365 + i32::from(Self::is_leap(year))
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        Self::days_in_month(year, month)
    }
}

impl CalendricalSchema for GregorianSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        365
    }

    fn min_days_in_month(&self) -> i32 {
        28
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        solar::days_before_month(Self::is_leap(year), month)
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        12 * (year - 1) + month - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
        (1 + months_since_epoch.div_euclid(12), 1 + months_since_epoch.rem_euclid(12))
    }

    fn count_days_since_epoch(&self, year: i32, month: i32, day: i32) -> i32 {
        Self::days_since_epoch(year, month, day)
    }

    fn get_date_parts(&self, days_since_epoch: i32) -> (i32, i32, i32) {
        Self::date_parts(days_since_epoch)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let (year, _, _) = Self::date_parts(days_since_epoch);
        (year, days_since_epoch - Self::start_of_year(year) + 1)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        solar::month_day(Self::is_leap(year), day_of_year)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        Self::start_of_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: GregorianSchema = GregorianSchema::new();

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2020, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2024, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2023, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2100, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
            TestCase { year: 0, is_leap: true, description: "year zero" },
            TestCase { year: -4, is_leap: true, description: "negative, divisible by 4" },
            TestCase { year: -100, is_leap: false, description: "negative century" },
            TestCase { year: -400, is_leap: true, description: "negative, divisible by 400" },
            TestCase { year: -1, is_leap: false, description: "negative, not divisible by 4" },
        ];

        for case in &cases {
            assert_eq!(
                SCHEMA.is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
            let expected_days = if case.is_leap { 366 } else { 365 };
            assert_eq!(SCHEMA.count_days_in_year(case.year), expected_days);
        }
    }

    #[test]
    fn test_well_known_day_counts() {
        assert_eq!(SCHEMA.count_days_since_epoch(1, 1, 1), 0);
        assert_eq!(SCHEMA.count_days_since_epoch(1, 3, 1), 59);
        assert_eq!(SCHEMA.count_days_since_epoch(2, 1, 1), 365);
        assert_eq!(SCHEMA.count_days_since_epoch(2000, 1, 1), 730_119);
        assert_eq!(SCHEMA.count_days_since_epoch(0, 12, 31), -1);
        assert_eq!(SCHEMA.count_days_since_epoch(0, 1, 1), -366);

        assert_eq!(SCHEMA.get_date_parts(0), (1, 1, 1));
        assert_eq!(SCHEMA.get_date_parts(365), (2, 1, 1));
        assert_eq!(SCHEMA.get_date_parts(-1), (0, 12, 31));
        assert_eq!(SCHEMA.get_date_parts(730_119), (2000, 1, 1));
    }

    #[test]
    fn test_round_trip_over_many_years() {
        let mut days_since_epoch = SCHEMA.get_start_of_year(-2001);
        for year in -2001..=2401 {
            assert_eq!(SCHEMA.get_start_of_year(year), days_since_epoch, "start of year {year}");
            for month in 1..=12 {
                for day in 1..=SCHEMA.count_days_in_month(year, month) {
                    assert_eq!(SCHEMA.count_days_since_epoch(year, month, day), days_since_epoch);
                    assert_eq!(SCHEMA.get_date_parts(days_since_epoch), (year, month, day));
                    days_since_epoch += 1;
                }
            }
        }
    }

    #[test]
    fn test_get_year_and_month() {
        assert_eq!(SCHEMA.get_year(59), (1, 60));
        assert_eq!(SCHEMA.get_month(1, 60), (3, 1));
        assert_eq!(SCHEMA.get_month(2024, 60), (2, 29));
        assert_eq!(SCHEMA.get_month(2024, 366), (12, 31));
        assert_eq!(SCHEMA.get_year(SCHEMA.get_end_of_year(2024)), (2024, 366));
    }

    #[test]
    fn test_extreme_supported_years() {
        let range = SCHEMA.supported_years();
        for year in [range.min(), range.max()] {
            let start = SCHEMA.get_start_of_year(year);
            let end = SCHEMA.get_end_of_year(year);
            assert_eq!(SCHEMA.get_date_parts(start), (year, 1, 1));
            assert_eq!(SCHEMA.get_date_parts(end), (year, 12, 31));
        }
    }

    #[test]
    fn test_months_since_epoch() {
        assert_eq!(SCHEMA.count_months_since_epoch(1, 1), 0);
        assert_eq!(SCHEMA.count_months_since_epoch(0, 12), -1);
        assert_eq!(SCHEMA.get_month_parts(-1), (0, 12));
        assert_eq!(SCHEMA.get_month_parts(24_287), (2024, 12));
    }
}
