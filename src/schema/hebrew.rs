//! The arithmetic Hebrew calendar.
//!
//! New year is computed from the mean lunar conjunction (molad) of Tishri,
//! counted in parts of an hour (1080 parts per hour), then postponed by the
//! rules of dehiyyah so that a year never starts on Sunday, Wednesday or
//! Friday and its length is one of 353, 354, 355, 383, 384 or 385 days.
//!
//! Months are numbered civilly, Tishri being month 1. In leap years Adar I
//! (month 6) is inserted before Adar II, and is the intercalary month.
//!
//! Reference: Reingold & Dershowitz, *Calendrical Calculations*.

use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS};
use crate::range::Range;

const PARTS_PER_DAY: i64 = 25_920;
/// Parts elapsed from the molad of Tishri of year 1 to the first day, plus
/// the offset placing that molad on the calendar.
const MOLAD_OFFSET: i64 = 12_084;
/// Length of a mean lunar month, in parts beyond 29 days.
const MONTH_PARTS: i64 = 13_753;

/// Days in the fixed part of the year: Tishri.
const TISHRI: i32 = 30;
/// Regular lengths of Heshvan and Kislev.
const HESHVAN: i32 = 29;
const KISLEV: i32 = 30;
/// Days in two consecutive months alternating 29 and 30 days.
const DAYS_IN_MONTH_PAIR: i32 = 59;

/// The Hebrew calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HebrewSchema;

impl HebrewSchema {
    pub const fn new() -> Self {
        Self
    }

    pub const fn is_leap(year: i32) -> bool {
        (7 * year as i64 + 1).rem_euclid(19) < 7
    }

    /// Months elapsed before the start of `year`.
    const fn months_before_year(year: i64) -> i64 {
        (235 * year - 234).div_euclid(19)
    }

    /// Days before the molad-based new year of `year`, with the first
    /// postponement applied.
    const fn elapsed_days(year: i64) -> i64 {
        let months = Self::months_before_year(year);
        let parts = MOLAD_OFFSET + MONTH_PARTS * months;
        let days = 29 * months + parts.div_euclid(PARTS_PER_DAY);
        if (3 * (days + 1)).rem_euclid(7) < 3 { days + 1 } else { days }
    }

    /// The second postponement, preventing years of 356 or 382 days.
    const fn year_length_correction(year: i64) -> i64 {
        let ny0 = Self::elapsed_days(year - 1);
        let ny1 = Self::elapsed_days(year);
        let ny2 = Self::elapsed_days(year + 1);
        if ny2 - ny1 == 356 {
            2
        } else if ny1 - ny0 == 382 {
            1
        } else {
            0
        }
    }

    const fn start_of_year(year: i64) -> i64 {
        Self::elapsed_days(year) + Self::year_length_correction(year)
    }

    pub const fn days_in_year(year: i32) -> i32 {
        let year = year as i64;
        (Self::start_of_year(year + 1) - Self::start_of_year(year)) as i32
    }

    /// Lengths of Heshvan and Kislev, which absorb the postponements.
    const fn variable_months(year: i32) -> (i32, i32) {
        let length = Self::days_in_year(year);
        let heshvan = if length % 10 == 5 { HESHVAN + 1 } else { HESHVAN };
        let kislev = if length % 10 == 3 { KISLEV - 1 } else { KISLEV };
        (heshvan, kislev)
    }

    const fn alternating_days_before(months: i32) -> i32 {
        DAYS_IN_MONTH_PAIR * months.div_euclid(2) + 29 * months.rem_euclid(2)
    }
}

impl CalendricalKernel for HebrewSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Lunisolar
    }

    fn is_regular(&self) -> Option<i32> {
        None
    }

    fn is_leap_year(&self, year: i32) -> bool {
        Self::is_leap(year)
    }

    fn is_intercalary_month(&self, year: i32, month: i32) -> bool {
        month == 6 && Self::is_leap(year)
    }

    fn is_intercalary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, year: i32) -> i32 {
        if Self::is_leap(year) { 13 } else { 12 }
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        Self::days_in_year(year)
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        match month {
            1 => TISHRI,
            2 => Self::variable_months(year).0,
            3 => Self::variable_months(year).1,
            6 if Self::is_leap(year) => 30,
            // Parity terms, so that any month number is accepted.
            _ if Self::is_leap(year) && month > 6 => 29 + (month + 1).rem_euclid(2),
            _ => 29 + month.rem_euclid(2),
        }
    }
}

impl CalendricalSchema for HebrewSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        353
    }

    fn min_days_in_month(&self) -> i32 {
        29
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        if month <= 2 {
            return if month == 1 { 0 } else { TISHRI };
        }
        let (heshvan, kislev) = Self::variable_months(year);
        if month == 3 {
            return TISHRI + heshvan;
        }
        let tevet = TISHRI + heshvan + kislev;
        if Self::is_leap(year) && month > 6 {
            // Adar I holds 30 days and breaks the alternation.
            tevet + 2 * DAYS_IN_MONTH_PAIR - 29 + Self::alternating_days_before(month - 7)
        } else {
            tevet + Self::alternating_days_before(month - 4)
        }
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        Self::months_before_year(year as i64) as i32 + month - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
        let year = (19 * months_since_epoch as i64 + 252).div_euclid(235);
        let month = months_since_epoch as i64 - Self::months_before_year(year) + 1;
        (year as i32, month as i32)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let days = days_since_epoch as i64;
        // Mean year length is 35_975_351 / 98_496 days.
        let mut year = (days * 98_496).div_euclid(35_975_351) + 1;
        if days < Self::start_of_year(year) {
            year -= 1;
        } else if days >= Self::start_of_year(year + 1) {
            year += 1;
        }
        (year as i32, (days - Self::start_of_year(year)) as i32 + 1)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let mut d0 = day_of_year - 1;
        if d0 < TISHRI {
            return (1, d0 + 1);
        }
        d0 -= TISHRI;
        let (heshvan, kislev) = Self::variable_months(year);
        if d0 < heshvan {
            return (2, d0 + 1);
        }
        d0 -= heshvan;
        if d0 < kislev {
            return (3, d0 + 1);
        }
        d0 -= kislev;

        let mut shift = 0;
        if Self::is_leap(year) && d0 >= DAYS_IN_MONTH_PAIR {
            if d0 < DAYS_IN_MONTH_PAIR + 30 {
                return (6, d0 - DAYS_IN_MONTH_PAIR + 1);
            }
            d0 -= 30;
            shift = 1;
        }
        let pair = d0.div_euclid(DAYS_IN_MONTH_PAIR);
        let rest = d0.rem_euclid(DAYS_IN_MONTH_PAIR);
        if rest < 29 {
            (4 + 2 * pair + shift, rest + 1)
        } else {
            (5 + 2 * pair + shift, rest - 28)
        }
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        Self::start_of_year(i64::from(year)) as i32
    }
}
