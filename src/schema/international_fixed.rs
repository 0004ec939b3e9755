use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS, GregorianSchema};
use crate::range::Range;

const DAYS_IN_MONTH: i32 = 28;
/// Zero-based day of a leap year holding the leap day, June 29th.
const LEAP_DAY_INDEX: i32 = 6 * DAYS_IN_MONTH;
/// Zero-based day of a common year holding the year day, December 29th.
const YEAR_DAY_INDEX: i32 = 13 * DAYS_IN_MONTH;

/// The International Fixed calendar (Cotsworth plan).
///
/// Thirteen months of 28 days, every month starting on a Sunday. The year
/// day (13/29) closes every year and the leap day (6/29) follows June in
/// Gregorian leap years; both are blank days, outside any week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternationalFixedSchema;

impl InternationalFixedSchema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for InternationalFixedSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn is_regular(&self) -> Option<i32> {
        Some(13)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        GregorianSchema::is_leap(year)
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 6 && day == 29
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        day == 29 && (month == 6 || month == 13)
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        13
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        365 + i32::from(GregorianSchema::is_leap(year))
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        match month {
            13 => DAYS_IN_MONTH + 1,
            6 if GregorianSchema::is_leap(year) => DAYS_IN_MONTH + 1,
            _ => DAYS_IN_MONTH,
        }
    }
}

impl CalendricalSchema for InternationalFixedSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        365
    }

    fn min_days_in_month(&self) -> i32 {
        DAYS_IN_MONTH
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        DAYS_IN_MONTH * (month - 1) + i32::from(month > 6 && GregorianSchema::is_leap(year))
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        13 * (year - 1) + month - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
        (1 + months_since_epoch.div_euclid(13), 1 + months_since_epoch.rem_euclid(13))
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let (year, _, _) = GregorianSchema::date_parts(days_since_epoch);
        (year, days_since_epoch - GregorianSchema::start_of_year(year) + 1)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let mut d0 = day_of_year - 1;
        if GregorianSchema::is_leap(year) {
            if d0 == LEAP_DAY_INDEX {
                return (6, 29);
            }
            if d0 > LEAP_DAY_INDEX {
                d0 -= 1;
            }
        }
        if d0 == YEAR_DAY_INDEX {
            return (13, 29);
        }
        (d0 / DAYS_IN_MONTH + 1, d0 % DAYS_IN_MONTH + 1)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        GregorianSchema::start_of_year(year)
    }
}
