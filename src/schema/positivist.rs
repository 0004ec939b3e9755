use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS, GregorianSchema};
use crate::range::Range;

const DAYS_IN_MONTH: i32 = 28;

/// Auguste Comte's Positivist calendar.
///
/// Thirteen months of 28 days. The last month is followed by the festival
/// of all the dead (13/29) and, in Gregorian leap years, the festival of
/// holy women (13/30); both days stand outside the weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositivistSchema;

impl PositivistSchema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for PositivistSchema {
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
        month == 13 && day == 30
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 13 && day > DAYS_IN_MONTH
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        13
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        365 + i32::from(GregorianSchema::is_leap(year))
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 13 {
            DAYS_IN_MONTH + 1 + i32::from(GregorianSchema::is_leap(year))
        } else {
            DAYS_IN_MONTH
        }
    }
}

impl CalendricalSchema for PositivistSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        365
    }

    fn min_days_in_month(&self) -> i32 {
        DAYS_IN_MONTH
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: i32) -> i32 {
        DAYS_IN_MONTH * (month - 1)
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

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let d0 = day_of_year - 1;
        let month = (d0 / DAYS_IN_MONTH + 1).min(13);
        (month, d0 - DAYS_IN_MONTH * (month - 1) + 1)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        GregorianSchema::start_of_year(year)
    }
}
