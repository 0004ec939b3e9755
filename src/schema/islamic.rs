use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS};
use crate::range::Range;

/// Days in a 30-year cycle, which holds 11 leap years.
const DAYS_IN_CYCLE: i64 = 10_631;
const DAYS_IN_COMMON_YEAR: i32 = 354;

/// The tabular (arithmetical) Islamic calendar.
///
/// Months alternate between 30 and 29 days, the last month gaining a day in
/// leap years. Leap years are years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26
/// and 29 of each 30-year cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularIslamicSchema;

impl TabularIslamicSchema {
    pub const fn new() -> Self {
        Self
    }

    pub const fn is_leap(year: i32) -> bool {
        (14 + 11 * year as i64).rem_euclid(30) < 11
    }

    const fn start_of_year(year: i32) -> i32 {
        let y = year as i64;
        (DAYS_IN_COMMON_YEAR as i64 * (y - 1) + (3 + 11 * y).div_euclid(30)) as i32
    }

    const fn year_of(days_since_epoch: i32) -> i32 {
        (30 * days_since_epoch as i64 + 10_646).div_euclid(DAYS_IN_CYCLE) as i32
    }
}

impl CalendricalKernel for TabularIslamicSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Lunar
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
        month == 12 && day == 30
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
        if month == 12 {
            29 + i32::from(Self::is_leap(year))
        } else {
            29 + month.rem_euclid(2)
        }
    }
}

impl CalendricalSchema for TabularIslamicSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        29
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: i32) -> i32 {
        29 * (month - 1) + month / 2
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
        let month = (2 * (day_of_year - 1) / 59 + 1).min(12);
        (month, day_of_year - self.count_days_in_year_before_month(year, month))
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        Self::start_of_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: TabularIslamicSchema = TabularIslamicSchema::new();

    #[test]
    fn test_leap_years_of_the_cycle() {
        let leap_years: Vec<i32> = (1..=30).filter(|&y| SCHEMA.is_leap_year(y)).collect();
        assert_eq!(leap_years, [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
        assert_eq!(SCHEMA.get_start_of_year(31), 10_631);
        assert!(SCHEMA.is_leap_year(-1));
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(SCHEMA.count_days_in_month(1, 1), 30);
        assert_eq!(SCHEMA.count_days_in_month(1, 2), 29);
        assert_eq!(SCHEMA.count_days_in_month(1, 12), 29);
        assert_eq!(SCHEMA.count_days_in_month(2, 12), 30);
        assert!(SCHEMA.is_intercalary_day(2, 12, 30));
    }

    #[test]
    fn test_round_trip_over_many_years() {
        let mut days_since_epoch = SCHEMA.get_start_of_year(-600);
        for year in -600..=600 {
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
            let last_day = SCHEMA.count_days_in_month(year, 12);
            assert_eq!(SCHEMA.get_date_parts(SCHEMA.get_end_of_year(year)), (year, 12, last_day));
        }
    }
}
