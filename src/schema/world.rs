use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS, GregorianSchema};
use crate::range::Range;

/// Days in a quarter of 31, 30 and 30 days.
const DAYS_IN_QUARTER: i32 = 91;
/// Zero-based day of a leap year holding the leap day, June 31st.
const LEAP_DAY_INDEX: i32 = 2 * DAYS_IN_QUARTER;
/// Zero-based day of a common year holding worldsday, December 31st.
const WORLDSDAY_INDEX: i32 = 4 * DAYS_IN_QUARTER;

/// The World calendar (Elisabeth Achelis).
///
/// Four identical quarters of 31, 30 and 30 days, each starting on a
/// Sunday. Worldsday (12/31) closes the year and the leap day (6/31)
/// closes June in Gregorian leap years; both are blank days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldSchema;

impl WorldSchema {
    pub const fn new() -> Self {
        Self
    }

    const fn days_before_month_in_quarter(month: i32) -> i32 {
        match (month - 1).rem_euclid(3) {
            0 => 0,
            1 => 31,
            _ => 61,
        }
    }
}

impl CalendricalKernel for WorldSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn is_regular(&self) -> Option<i32> {
        Some(12)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        GregorianSchema::is_leap(year)
    }

    fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 6 && day == 31
    }

    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        day == 31 && (month == 6 || month == 12)
    }

    fn count_months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        365 + i32::from(GregorianSchema::is_leap(year))
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        match month {
            12 => 31,
            6 if GregorianSchema::is_leap(year) => 31,
            _ if month.rem_euclid(3) == 1 => 31,
            _ => 30,
        }
    }
}

impl CalendricalSchema for WorldSchema {
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    fn min_days_in_year(&self) -> i32 {
        365
    }

    fn min_days_in_month(&self) -> i32 {
        30
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        DAYS_IN_QUARTER * (month - 1).div_euclid(3)
            + Self::days_before_month_in_quarter(month)
            + i32::from(month > 6 && GregorianSchema::is_leap(year))
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        12 * (year - 1) + month - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
        (1 + months_since_epoch.div_euclid(12), 1 + months_since_epoch.rem_euclid(12))
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let (year, _, _) = GregorianSchema::date_parts(days_since_epoch);
        (year, days_since_epoch - GregorianSchema::start_of_year(year) + 1)
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let mut d0 = day_of_year - 1;
        if GregorianSchema::is_leap(year) {
            if d0 == LEAP_DAY_INDEX {
                return (6, 31);
            }
            if d0 > LEAP_DAY_INDEX {
                d0 -= 1;
            }
        }
        if d0 == WORLDSDAY_INDEX {
            return (12, 31);
        }
        let quarter = d0 / DAYS_IN_QUARTER;
        let rest = d0 % DAYS_IN_QUARTER;
        if rest < 31 {
            (3 * quarter + 1, rest + 1)
        } else if rest < 61 {
            (3 * quarter + 2, rest - 30)
        } else {
            (3 * quarter + 3, rest - 60)
        }
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        GregorianSchema::start_of_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: WorldSchema = WorldSchema::new();

    #[test]
    fn test_month_lengths() {
        let expected = [31, 30, 30, 31, 30, 30, 31, 30, 30, 31, 30, 31];
        for (month, &days) in (1..=12).zip(expected.iter()) {
            assert_eq!(SCHEMA.count_days_in_month(2023, month), days, "month {month}");
        }
        assert_eq!(SCHEMA.count_days_in_month(2024, 6), 31);
    }

    #[test]
    fn test_blank_days() {
        assert_eq!(SCHEMA.get_month(2023, 365), (12, 31));
        assert_eq!(SCHEMA.get_month(2024, 183), (6, 31));
        assert_eq!(SCHEMA.get_month(2024, 184), (7, 1));
        assert_eq!(SCHEMA.get_month(2023, 183), (7, 1));
        assert!(SCHEMA.is_supplementary_day(2024, 6, 31));
        assert!(SCHEMA.is_supplementary_day(2023, 12, 31));
        assert!(SCHEMA.is_intercalary_day(2024, 6, 31));
        assert!(!SCHEMA.is_intercalary_day(2023, 12, 31));
    }

    #[test]
    fn test_round_trip_over_many_years() {
        let mut days_since_epoch = SCHEMA.get_start_of_year(-401);
        for year in -401..=401 {
            let mut day_of_year = 0;
            for month in 1..=12 {
                assert_eq!(SCHEMA.count_days_in_year_before_month(year, month), day_of_year);
                for day in 1..=SCHEMA.count_days_in_month(year, month) {
                    day_of_year += 1;
                    assert_eq!(SCHEMA.get_date_parts(days_since_epoch), (year, month, day));
                    days_since_epoch += 1;
                }
            }
        }
    }
}
