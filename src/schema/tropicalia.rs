//! The Tropicalia calendars: a 128-year cycle of 31 leap years, which
//! tracks the mean tropical year far better than the Gregorian 400-year
//! cycle. Leap years are the multiples of 4 that are not multiples of 128.
//!
//! Three month layouts are provided. [`TropicaliaSchema`] keeps the
//! Gregorian months; the two others alternate 30 and 31 days, and put the
//! leap day at the end of the year.

use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS, solar};
use crate::{
    consts::{DAYS_IN_4_YEAR_CYCLE, DAYS_IN_COMMON_YEAR, LEAP_YEAR_CYCLE},
    range::Range,
};

const CYCLE_YEARS: i32 = 128;
/// Days in the 128-year cycle.
const DAYS_IN_CYCLE: i32 = CYCLE_YEARS * DAYS_IN_COMMON_YEAR + CYCLE_YEARS / LEAP_YEAR_CYCLE - 1;

/// Days in two consecutive months of the alternating layouts.
const DAYS_IN_MONTH_PAIR: i32 = 61;

const fn is_leap(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CYCLE_YEARS) != 0
}

const fn start_of_year(year: i32) -> i32 {
    let y = year as i64 - 1;
    (DAYS_IN_COMMON_YEAR as i64 * y + y.div_euclid(LEAP_YEAR_CYCLE as i64) - y.div_euclid(CYCLE_YEARS as i64)) as i32
}

const fn year_of(days_since_epoch: i32) -> i32 {
    let cycle = days_since_epoch.div_euclid(DAYS_IN_CYCLE);
    let d = days_since_epoch.rem_euclid(DAYS_IN_CYCLE);
    let y4 = d / DAYS_IN_4_YEAR_CYCLE;
    // The last day of a leap year would otherwise land in the next year.
    let y1 = d % DAYS_IN_4_YEAR_CYCLE / DAYS_IN_COMMON_YEAR;
    CYCLE_YEARS * cycle + LEAP_YEAR_CYCLE * y4 + if y1 > 3 { 3 } else { y1 } + 1
}

const fn days_in_year(year: i32) -> i32 {
    DAYS_IN_COMMON_YEAR + is_leap(year) as i32
}

/// Splits a 1-based day of the year into `(month, day)` for a layout whose
/// odd months have `first` days and even months `61 - first`.
const fn alternating_month_day(first: i32, day_of_year: i32) -> (i32, i32) {
    let d0 = day_of_year - 1;
    let pair = d0.div_euclid(DAYS_IN_MONTH_PAIR);
    let rest = d0.rem_euclid(DAYS_IN_MONTH_PAIR);
    if rest < first {
        (2 * pair + 1, rest + 1)
    } else {
        (2 * pair + 2, rest - first + 1)
    }
}

const fn alternating_days_before_month(first: i32, month: i32) -> i32 {
    let m0 = month - 1;
    DAYS_IN_MONTH_PAIR * m0.div_euclid(2) + first * m0.rem_euclid(2)
}

/// Leaf kernel methods shared by the three layouts.
macro_rules! tropicalia_kernel {
    () => {
        fn family(&self) -> CalendricalFamily {
            CalendricalFamily::Solar
        }

        fn is_regular(&self) -> Option<i32> {
            Some(12)
        }

        fn is_leap_year(&self, year: i32) -> bool {
            is_leap(year)
        }

        fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
            false
        }

        fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
            false
        }

        fn count_months_in_year(&self, _year: i32) -> i32 {
            12
        }

        fn count_days_in_year(&self, year: i32) -> i32 {
            days_in_year(year)
        }
    };
}

/// Year-level schema methods shared by the three layouts.
macro_rules! tropicalia_schema {
    () => {
        fn supported_years(&self) -> Range<i32> {
            DEFAULT_SUPPORTED_YEARS
        }

        fn min_days_in_year(&self) -> i32 {
            DAYS_IN_COMMON_YEAR
        }

        fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
            12 * (year - 1) + month - 1
        }

        fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
            (1 + months_since_epoch.div_euclid(12), 1 + months_since_epoch.rem_euclid(12))
        }

        fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
            let year = year_of(days_since_epoch);
            (year, days_since_epoch - start_of_year(year) + 1)
        }

        fn get_start_of_year(&self, year: i32) -> i32 {
            start_of_year(year)
        }
    };
}

/// Tropicalia with the Gregorian months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TropicaliaSchema;

impl TropicaliaSchema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for TropicaliaSchema {
    tropicalia_kernel!();

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 2 && day == 29
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        solar::days_in_month(is_leap(year), month)
    }
}

impl CalendricalSchema for TropicaliaSchema {
    tropicalia_schema!();

    fn min_days_in_month(&self) -> i32 {
        28
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        solar::days_before_month(is_leap(year), month)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        solar::month_day(is_leap(year), day_of_year)
    }
}

/// Tropicalia with months of 30, 31, 30, 31, ... days; the leap day is
/// December 31st.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tropicalia3031Schema;

impl Tropicalia3031Schema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for Tropicalia3031Schema {
    tropicalia_kernel!();

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day == 31
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 12 {
            30 + i32::from(is_leap(year))
        } else {
            31 - month.rem_euclid(2)
        }
    }
}

impl CalendricalSchema for Tropicalia3031Schema {
    tropicalia_schema!();

    fn min_days_in_month(&self) -> i32 {
        30
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: i32) -> i32 {
        alternating_days_before_month(30, month)
    }

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        alternating_month_day(30, day_of_year)
    }
}

/// Tropicalia with months of 31, 30, 31, 30, ... days, December holding
/// 29 days, 30 in leap years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tropicalia3130Schema;

impl Tropicalia3130Schema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for Tropicalia3130Schema {
    tropicalia_kernel!();

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day == 30
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 12 {
            29 + i32::from(is_leap(year))
        } else {
            30 + month.rem_euclid(2)
        }
    }
}

impl CalendricalSchema for Tropicalia3130Schema {
    tropicalia_schema!();

    fn min_days_in_month(&self) -> i32 {
        29
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: i32) -> i32 {
        alternating_days_before_month(31, month)
    }

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        alternating_month_day(31, day_of_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers_years(schema: &dyn CalendricalSchema, years: std::ops::RangeInclusive<i32>) {
        let mut days_since_epoch = schema.get_start_of_year(*years.start());
        for year in years {
            assert_eq!(schema.get_start_of_year(year), days_since_epoch, "start of year {year}");
            let mut day_of_year = 0;
            for month in 1..=12 {
                assert_eq!(schema.count_days_in_year_before_month(year, month), day_of_year);
                for day in 1..=schema.count_days_in_month(year, month) {
                    day_of_year += 1;
                    assert_eq!(schema.count_days_since_epoch(year, month, day), days_since_epoch);
                    assert_eq!(schema.get_date_parts(days_since_epoch), (year, month, day));
                    days_since_epoch += 1;
                }
            }
            assert_eq!(day_of_year, schema.count_days_in_year(year), "length of year {year}");
        }
    }

    #[test]
    fn test_leap_years() {
        let schema = TropicaliaSchema::new();
        for (year, expected) in [(4, true), (128, false), (256, false), (132, true), (2000, true), (0, false), (-4, true), (-128, false)] {
            assert_eq!(schema.is_leap_year(year), expected, "year {year}");
        }
        assert_eq!(DAYS_IN_CYCLE, 46_751);
        assert_eq!(start_of_year(129), DAYS_IN_CYCLE);
    }

    #[test]
    fn test_gregorian_months() {
        assert_covers_years(&TropicaliaSchema::new(), -300..=300);
    }

    #[test]
    fn test_alternating_3031_months() {
        let schema = Tropicalia3031Schema::new();
        assert_eq!(schema.count_days_in_month(1, 1), 30);
        assert_eq!(schema.count_days_in_month(1, 2), 31);
        assert_eq!(schema.count_days_in_month(1, 12), 30);
        assert_eq!(schema.count_days_in_month(4, 12), 31);
        assert!(schema.is_intercalary_day(4, 12, 31));
        assert_covers_years(&schema, -300..=300);
    }

    #[test]
    fn test_alternating_3130_months() {
        let schema = Tropicalia3130Schema::new();
        assert_eq!(schema.count_days_in_month(1, 1), 31);
        assert_eq!(schema.count_days_in_month(1, 2), 30);
        assert_eq!(schema.count_days_in_month(1, 12), 29);
        assert_eq!(schema.count_days_in_month(4, 12), 30);
        assert_covers_years(&schema, -300..=300);
    }

    #[test]
    fn test_extreme_supported_years() {
        let schema = TropicaliaSchema::new();
        let range = schema.supported_years();
        for year in [range.min(), range.max()] {
            assert_eq!(schema.get_year(schema.get_start_of_year(year)), (year, 1));
            assert_eq!(schema.get_year(schema.get_end_of_year(year)), (year, schema.count_days_in_year(year)));
        }
    }
}
