//! The ancient Egyptian civil calendar: a vague year of exactly 365 days,
//! twelve months of 30 days and five epagomenal days, never any leap year.

use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS};
use crate::{consts::DAYS_IN_COMMON_YEAR, range::Range};

const DAYS_IN_MONTH: i32 = 30;
const EPAGOMENAL_START: i32 = 12 * DAYS_IN_MONTH;

const fn start_of_year(year: i32) -> i32 {
    DAYS_IN_COMMON_YEAR * (year - 1)
}

const fn get_year(days_since_epoch: i32) -> (i32, i32) {
    (
        1 + days_since_epoch.div_euclid(DAYS_IN_COMMON_YEAR),
        1 + days_since_epoch.rem_euclid(DAYS_IN_COMMON_YEAR),
    )
}

/// Egyptian calendar whose epagomenal days form a thirteenth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Egyptian13Schema;

impl Egyptian13Schema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for Egyptian13Schema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn is_regular(&self) -> Option<i32> {
        Some(13)
    }

    fn is_leap_year(&self, _year: i32) -> bool {
        false
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, _day: i32) -> bool {
        month == 13
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        13
    }

    fn count_days_in_year(&self, _year: i32) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn count_days_in_month(&self, _year: i32, month: i32) -> i32 {
        if month == 13 { 5 } else { DAYS_IN_MONTH }
    }
}

impl CalendricalSchema for Egyptian13Schema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        5
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
        get_year(days_since_epoch)
    }

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let d0 = day_of_year - 1;
        (d0 / DAYS_IN_MONTH + 1, d0 % DAYS_IN_MONTH + 1)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        start_of_year(year)
    }
}

/// Egyptian calendar whose epagomenal days extend the twelfth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Egyptian12Schema;

impl Egyptian12Schema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for Egyptian12Schema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn is_regular(&self) -> Option<i32> {
        Some(12)
    }

    fn is_leap_year(&self, _year: i32) -> bool {
        false
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day > DAYS_IN_MONTH
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn count_days_in_year(&self, _year: i32) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn count_days_in_month(&self, _year: i32, month: i32) -> i32 {
        if month == 12 { 35 } else { DAYS_IN_MONTH }
    }
}

impl CalendricalSchema for Egyptian12Schema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        DAYS_IN_MONTH
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: i32) -> i32 {
        DAYS_IN_MONTH * (month - 1)
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        12 * (year - 1) + month - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
        (1 + months_since_epoch.div_euclid(12), 1 + months_since_epoch.rem_euclid(12))
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        get_year(days_since_epoch)
    }

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        if day_of_year > EPAGOMENAL_START {
            return (12, day_of_year - 11 * DAYS_IN_MONTH);
        }
        let d0 = day_of_year - 1;
        (d0 / DAYS_IN_MONTH + 1, d0 % DAYS_IN_MONTH + 1)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        start_of_year(year)
    }
}
