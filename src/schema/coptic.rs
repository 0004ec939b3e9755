//! The Coptic calendar: twelve months of 30 days followed by five
//! epagomenal days, six in leap years. Years `y` with `y mod 4 = 3` are leap
//! years.
//!
//! The epagomenal days can be numbered as a short thirteenth month
//! ([`Coptic13Schema`]) or as days 31 to 36 of the twelfth month
//! ([`Coptic12Schema`]).

use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS};
use crate::{
    consts::{DAYS_IN_4_YEAR_CYCLE, DAYS_IN_COMMON_YEAR, LEAP_YEAR_CYCLE},
    range::Range,
};

const DAYS_IN_MONTH: i32 = 30;
/// Day of the twelve-month year at which the epagomenal days start.
const EPAGOMENAL_START: i32 = 12 * DAYS_IN_MONTH;

const fn is_leap(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 3
}

const fn start_of_year(year: i32) -> i32 {
    let y = year as i64;
    (DAYS_IN_COMMON_YEAR as i64 * (y - 1) + y.div_euclid(LEAP_YEAR_CYCLE as i64)) as i32
}

const fn year_of(days_since_epoch: i32) -> i32 {
    (4 * days_since_epoch as i64 + 1463).div_euclid(DAYS_IN_4_YEAR_CYCLE as i64) as i32
}

const fn days_in_year(year: i32) -> i32 {
    DAYS_IN_COMMON_YEAR + is_leap(year) as i32
}

/// Coptic calendar whose epagomenal days form a thirteenth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coptic13Schema;

impl Coptic13Schema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for Coptic13Schema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn is_regular(&self) -> Option<i32> {
        Some(13)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year)
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 13 && day == 6
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, _day: i32) -> bool {
        month == 13
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        13
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        days_in_year(year)
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 13 { 5 + i32::from(is_leap(year)) } else { DAYS_IN_MONTH }
    }
}

impl CalendricalSchema for Coptic13Schema {
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
        let year = year_of(days_since_epoch);
        (year, days_since_epoch - start_of_year(year) + 1)
    }

    fn get_month(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let d0 = day_of_year - 1;
        (d0 / DAYS_IN_MONTH + 1, d0 % DAYS_IN_MONTH + 1)
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        start_of_year(year)
    }
}

/// Coptic calendar whose epagomenal days extend the twelfth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coptic12Schema;

impl Coptic12Schema {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendricalKernel for Coptic12Schema {
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

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day == 36
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day > DAYS_IN_MONTH
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        days_in_year(year)
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 12 { 35 + i32::from(is_leap(year)) } else { DAYS_IN_MONTH }
    }
}

impl CalendricalSchema for Coptic12Schema {
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
        let year = year_of(days_since_epoch);
        (year, days_since_epoch - start_of_year(year) + 1)
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
