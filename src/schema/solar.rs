//! Month layout shared by the calendars that keep the Gregorian months
//! (31, 28/29, 31, 30, ...) with the leap day at the end of February.

use crate::consts::{DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP};

/// Days in the first two months of a common year.
const DAYS_IN_JANUARY_AND_FEBRUARY: i32 = 59;

/// Days in `month`; `month` must be in `1..=12`.
pub(super) const fn days_in_month(leap: bool, month: i32) -> i32 {
    if month == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else if month >= 1 && month <= 12 {
        DAYS_IN_MONTH[month as usize]
    } else {
        // Same alternation as the actual months, so that the kernel answers
        // for any input.
        30 + ((month ^ (month >> 3)) & 1)
    }
}

/// Number of days in the year before `month` starts.
///
/// Inspired by Neri-Schneider <https://onlinelibrary.wiley.com/doi/10.1002/spe.3172>
pub(super) const fn days_before_month(leap: bool, month: i32) -> i32 {
    if month < 3 {
        if month == 1 { 0 } else { 31 }
    } else {
        DAYS_IN_JANUARY_AND_FEBRUARY + leap as i32 + ((979 * month - 2919) >> 5)
    }
}

/// Splits a 1-based day of the year into `(month, day)`.
pub(super) const fn month_day(leap: bool, day_of_year: i32) -> (i32, i32) {
    let correction = if day_of_year < DAYS_IN_JANUARY_AND_FEBRUARY + leap as i32 {
        -1
    } else {
        (!leap) as i32
    };
    let month = (12 * (day_of_year + correction) + 373) / 367;
    (month, day_of_year - days_before_month(leap, month))
}
