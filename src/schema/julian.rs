use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS, solar};
use crate::{
    consts::{DAYS_IN_4_YEAR_CYCLE, DAYS_IN_COMMON_YEAR, LEAP_YEAR_CYCLE},
    range::Range,
};

/// The proleptic Julian calendar: Gregorian months, a leap year every
/// fourth year without exception.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JulianSchema;

impl JulianSchema {
    pub const fn new() -> Self {
        Self
    }

    pub const fn is_leap(year: i32) -> bool {
        year.rem_euclid(LEAP_YEAR_CYCLE) == 0
    }

    pub const fn start_of_year(year: i32) -> i32 {
        let y = year as i64 - 1;
        (DAYS_IN_COMMON_YEAR as i64 * y + y.div_euclid(LEAP_YEAR_CYCLE as i64)) as i32
    }

    pub const fn year_of(days_since_epoch: i32) -> i32 {
        (4 * days_since_epoch as i64 + 1464).div_euclid(DAYS_IN_4_YEAR_CYCLE as i64) as i32
    }
}

impl CalendricalKernel for JulianSchema {
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
        DAYS_IN_COMMON_YEAR + i32::from(Self::is_leap(year))
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        solar::days_in_month(Self::is_leap(year), month)
    }
}

impl CalendricalSchema for JulianSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_COMMON_YEAR
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

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let year = Self::year_of(days_since_epoch);
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

    const SCHEMA: JulianSchema = JulianSchema::new();

    #[test]
    fn test_is_leap_year() {
        for (year, expected) in [(4, true), (1900, true), (2000, true), (2023, false), (0, true), (-1, false), (-4, true)] {
            assert_eq!(SCHEMA.is_leap_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn test_well_known_day_counts() {
        assert_eq!(SCHEMA.count_days_since_epoch(1, 1, 1), 0);
        assert_eq!(SCHEMA.count_days_since_epoch(0, 12, 31), -1);
        assert_eq!(SCHEMA.count_days_since_epoch(5, 1, 1), 4 * 365 + 1);
        assert_eq!(SCHEMA.get_date_parts(-366), (0, 1, 1));
        assert_eq!(SCHEMA.get_date_parts(4 * 365 + 1), (5, 1, 1));
    }

    #[test]
    fn test_round_trip_over_many_years() {
        let mut days_since_epoch = SCHEMA.get_start_of_year(-1001);
        for year in -1001..=1001 {
            assert_eq!(SCHEMA.get_start_of_year(year), days_since_epoch, "start of year {year}");
            for month in 1..=12 {
                for day in 1..=SCHEMA.count_days_in_month(year, month) {
                    assert_eq!(SCHEMA.get_date_parts(days_since_epoch), (year, month, day));
                    days_since_epoch += 1;
                }
            }
        }
    }

    #[test]
    fn test_extreme_supported_years() {
        let range = SCHEMA.supported_years();
        for year in [range.min(), range.max()] {
            assert_eq!(SCHEMA.get_date_parts(SCHEMA.get_start_of_year(year)), (year, 1, 1));
            assert_eq!(SCHEMA.get_date_parts(SCHEMA.get_end_of_year(year)), (year, 12, 31));
        }
    }
}
