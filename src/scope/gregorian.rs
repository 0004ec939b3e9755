//! Gregorian scopes validating dates without going through the schema.

use std::sync::Arc;

use super::{AnchoredSegment, CalendarScope, ProlepticScope, StandardScope, anchored_scope_accessors};
use crate::{
    consts::{DAYS_IN_COMMON_YEAR, DECEMBER},
    day_number::DayNumber,
    error::{CalendarError, Component, check_range},
    range::Range,
    schema::GregorianSchema,
    segment::CalendricalSegment,
};

/// Smallest number of days in a Gregorian month.
const MIN_DAYS_IN_MONTH: i32 = 28;

fn validate_year(year: i32, years: Range<i32>) -> Result<(), CalendarError> {
    let (min, max) = years.endpoints();
    check_range(Component::Year, year, min, max)
}

fn validate_month(month: i32) -> Result<(), CalendarError> {
    check_range(Component::Month, month, 1, DECEMBER)
}

fn validate_month_day(year: i32, month: i32, day: i32) -> Result<(), CalendarError> {
    validate_month(month)?;
    if (1..=MIN_DAYS_IN_MONTH).contains(&day) {
        return Ok(());
    }
    check_range(Component::Day, day, 1, GregorianSchema::days_in_month(year, month))
}

fn validate_day_of_year(year: i32, day_of_year: i32) -> Result<(), CalendarError> {
    if (1..=DAYS_IN_COMMON_YEAR).contains(&day_of_year) {
        return Ok(());
    }
    check_range(Component::DayOfYear, day_of_year, 1, DAYS_IN_COMMON_YEAR + i32::from(GregorianSchema::is_leap(year)))
}

macro_rules! gregorian_scope {
    ($(#[$attr:meta])* $name:ident, $years:expr) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: AnchoredSegment,
        }

        impl $name {
            pub const SUPPORTED_YEARS: Range<i32> = $years;

            /// # Errors
            /// Returns an overflow error if the years cannot be anchored at
            /// `epoch`.
            pub fn new(epoch: DayNumber) -> Result<Self, CalendarError> {
                let segment = CalendricalSegment::create(Arc::new(GregorianSchema::new()), Self::SUPPORTED_YEARS)?;
                debug!("creating a {} at epoch {epoch}", stringify!($name));
                Ok(Self {
                    inner: AnchoredSegment::new(epoch, segment)?,
                })
            }
        }

        impl CalendarScope for $name {
            anchored_scope_accessors!();

            fn validate_year(&self, year: i32) -> Result<(), CalendarError> {
                validate_year(year, Self::SUPPORTED_YEARS)
            }

            fn validate_year_month(&self, year: i32, month: i32) -> Result<(), CalendarError> {
                validate_year(year, Self::SUPPORTED_YEARS)?;
                validate_month(month)
            }

            fn validate_year_month_day(&self, year: i32, month: i32, day: i32) -> Result<(), CalendarError> {
                validate_year(year, Self::SUPPORTED_YEARS)?;
                validate_month_day(year, month, day)
            }

            fn validate_ordinal(&self, year: i32, day_of_year: i32) -> Result<(), CalendarError> {
                validate_year(year, Self::SUPPORTED_YEARS)?;
                validate_day_of_year(year, day_of_year)
            }
        }
    };
}

gregorian_scope!(
    /// [`StandardScope`] specialized for the Gregorian calendar.
    GregorianStandardScope,
    StandardScope::SUPPORTED_YEARS
);

gregorian_scope!(
    /// [`ProlepticScope`] specialized for the Gregorian calendar.
    GregorianProlepticScope,
    ProlepticScope::SUPPORTED_YEARS
);
