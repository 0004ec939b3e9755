//! Calendrical schemas.
//!
//! A schema is the rule set of one calendar: how many months a year has,
//! how many days a month has, which years are leap years. It converts
//! between day counts and date parts, counting days from its own epoch
//! (day 0 is the first day of year 1), independently of where that epoch
//! falls on the shared day-number timeline.
//!
//! The contract is split in two traits. [`CalendricalKernel`] holds the
//! primitive facts, which must be answered for any integer input without
//! panicking. [`CalendricalSchema`] holds the conversions derived from
//! them. Built-in schemas implement both with closed-form arithmetic;
//! [`PrototypalSchema`] derives the conversions from any kernel by search.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    consts::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR},
    error::{CalendarError, Component, check_range},
    prelude::*,
    range::Range,
};

mod cache;
mod coptic;
mod egyptian;
mod gregorian;
mod hebrew;
mod international_fixed;
mod islamic;
mod julian;
mod pax;
mod positivist;
mod prototype;
mod registry;
mod solar;
mod tropicalia;
mod world;

pub use cache::StartOfYearCache;
pub use coptic::{Coptic12Schema, Coptic13Schema};
pub use egyptian::{Egyptian12Schema, Egyptian13Schema};
pub use gregorian::GregorianSchema;
pub use hebrew::HebrewSchema;
pub use international_fixed::InternationalFixedSchema;
pub use islamic::TabularIslamicSchema;
pub use julian::JulianSchema;
pub use pax::PaxSchema;
pub use positivist::PositivistSchema;
pub use prototype::PrototypalSchema;
pub use registry::{SchemaId, UnknownSchemaError};
pub use tropicalia::{Tropicalia3031Schema, Tropicalia3130Schema, TropicaliaSchema};
pub use world::WorldSchema;

/// The years every built-in schema supports.
pub(crate) const DEFAULT_SUPPORTED_YEARS: Range<i32> = Range::of(MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR);

/// Broad classification of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendricalFamily {
    /// Tracks the tropical year only.
    #[display(fmt = "solar")]
    Solar,
    /// Tracks the synodic month only.
    #[display(fmt = "lunar")]
    Lunar,
    /// Tracks both, inserting whole months.
    #[display(fmt = "lunisolar")]
    Lunisolar,
}

/// Primitive facts about a calendar.
///
/// Every method must return a value, without panicking, for any integer
/// input, even one that does not denote an actual year, month or day. Only
/// inputs inside [`CalendricalSchema::supported_years`] need to give
/// meaningful answers.
pub trait CalendricalKernel: fmt::Debug + Send + Sync {
    fn family(&self) -> CalendricalFamily;

    /// Returns `Some(months)` when every year has the same number of months.
    fn is_regular(&self) -> Option<i32>;

    fn is_leap_year(&self, year: i32) -> bool;

    fn is_intercalary_month(&self, year: i32, month: i32) -> bool;

    /// True for a day inserted in leap years.
    fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool;

    /// True for a day that is counted by the calendar but stands outside
    /// its regular month (or week) structure: epagomenal days, blank days.
    fn is_supplementary_day(&self, year: i32, month: i32, day: i32) -> bool;

    fn count_months_in_year(&self, year: i32) -> i32;

    fn count_days_in_year(&self, year: i32) -> i32;

    fn count_days_in_month(&self, year: i32, month: i32) -> i32;
}

/// Conversions between day counts and date parts.
///
/// Day counts are relative to the schema's epoch: day 0 is the first day of
/// year 1, earlier days are negative. Conversions are exact mutual inverses
/// for every date whose year lies in [`supported_years`], and are
/// unspecified outside of it.
///
/// [`supported_years`]: CalendricalSchema::supported_years
pub trait CalendricalSchema: CalendricalKernel {
    /// The years this schema converts exactly.
    fn supported_years(&self) -> Range<i32>;

    /// Length of the shortest year.
    fn min_days_in_year(&self) -> i32;

    /// Length of the shortest month.
    fn min_days_in_month(&self) -> i32;

    /// Smallest number of months in a year.
    fn min_months_in_year(&self) -> i32 {
        self.is_regular().unwrap_or(12)
    }

    /// Number of days in `year` before the first day of `month`.
    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32;

    /// Number of months from the start of year 1 to the start of
    /// `(year, month)`.
    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32;

    /// Inverse of [`count_months_since_epoch`], as `(year, month)`.
    ///
    /// [`count_months_since_epoch`]: CalendricalSchema::count_months_since_epoch
    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32);

    /// Number of days from the start of year 1 to `(year, month, day)`.
    fn count_days_since_epoch(&self, year: i32, month: i32, day: i32) -> i32 {
        self.get_start_of_year(year) + self.count_days_in_year_before_month(year, month) + day - 1
    }

    /// Number of days from the start of year 1 to `(year, day_of_year)`.
    fn count_days_since_epoch_ordinal(&self, year: i32, day_of_year: i32) -> i32 {
        self.get_start_of_year(year) + day_of_year - 1
    }

    /// Inverse of [`count_days_since_epoch`], as `(year, month, day)`.
    ///
    /// [`count_days_since_epoch`]: CalendricalSchema::count_days_since_epoch
    fn get_date_parts(&self, days_since_epoch: i32) -> (i32, i32, i32) {
        let (year, day_of_year) = self.get_year(days_since_epoch);
        let (month, day) = self.get_month(year, day_of_year);
        (year, month, day)
    }

    /// Returns `(year, day_of_year)` for a day count.
    fn get_year(&self, days_since_epoch: i32) -> (i32, i32);

    /// Returns `(month, day)` for a day of `year`.
    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32);

    /// Day count of the first day of `year`.
    fn get_start_of_year(&self, year: i32) -> i32;

    /// Day count of the first day of `year`, without truncation to `i32`.
    ///
    /// Schemas whose day counts may leave the `i32` range inside their
    /// supported years override this; the segment builder relies on it to
    /// detect unrepresentable endpoints.
    fn get_start_of_year_wide(&self, year: i32) -> i64 {
        i64::from(self.get_start_of_year(year))
    }

    /// Day count of the last day of `year`.
    fn get_end_of_year(&self, year: i32) -> i32 {
        self.get_start_of_year(year) + self.count_days_in_year(year) - 1
    }

    /// Day count of the first day of `(year, month)`.
    fn get_start_of_month(&self, year: i32, month: i32) -> i32 {
        self.get_start_of_year(year) + self.count_days_in_year_before_month(year, month)
    }

    /// Day count of the last day of `(year, month)`.
    fn get_end_of_month(&self, year: i32, month: i32) -> i32 {
        self.get_start_of_month(year, month) + self.count_days_in_month(year, month) - 1
    }

    /// Month count of the first month of `year`.
    fn get_start_of_year_in_months(&self, year: i32) -> i32 {
        self.count_months_since_epoch(year, 1)
    }

    /// Month count of the last month of `year`.
    fn get_end_of_year_in_months(&self, year: i32) -> i32 {
        self.count_months_since_epoch(year, self.count_months_in_year(year))
    }

    /// Day of the year of `(year, month, day)`.
    fn get_day_of_year(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_year_before_month(year, month) + day
    }

    /// Days in `year` strictly before `(month, day)`.
    fn count_days_in_year_before(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_year_before_month(year, month) + day - 1
    }

    /// Days in `year` strictly after `(month, day)`.
    fn count_days_in_year_after(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_year(year) - self.count_days_in_year_before(year, month, day) - 1
    }

    /// Days in `year` strictly after the ordinal day.
    fn count_days_in_year_after_ordinal(&self, year: i32, day_of_year: i32) -> i32 {
        self.count_days_in_year(year) - day_of_year
    }

    /// Days in `year` after the end of `month`.
    fn count_days_in_year_after_month(&self, year: i32, month: i32) -> i32 {
        self.count_days_in_year(year) - self.count_days_in_year_before_month(year, month) - self.count_days_in_month(year, month)
    }

    /// Days in `(year, month)` strictly after `day`.
    fn count_days_in_month_after(&self, year: i32, month: i32, day: i32) -> i32 {
        self.count_days_in_month(year, month) - day
    }

    /// Fails with a month range error unless `month` exists in `year`.
    ///
    /// # Errors
    /// Returns a range error naming [`Component::Month`].
    fn validate_month(&self, year: i32, month: i32) -> Result<(), CalendarError> {
        if (1..=self.min_months_in_year()).contains(&month) {
            return Ok(());
        }
        check_range(Component::Month, month, 1, self.count_months_in_year(year))
    }

    /// Fails with a month or day range error unless `(month, day)` exists
    /// in `year`.
    ///
    /// # Errors
    /// Returns a range error naming [`Component::Month`] or
    /// [`Component::Day`].
    fn validate_month_day(&self, year: i32, month: i32, day: i32) -> Result<(), CalendarError> {
        self.validate_month(year, month)?;
        if (1..=self.min_days_in_month()).contains(&day) {
            return Ok(());
        }
        check_range(Component::Day, day, 1, self.count_days_in_month(year, month))
    }

    /// Fails with a day-of-year range error unless `day_of_year` exists in
    /// `year`.
    ///
    /// # Errors
    /// Returns a range error naming [`Component::DayOfYear`].
    fn validate_day_of_year(&self, year: i32, day_of_year: i32) -> Result<(), CalendarError> {
        if (1..=self.min_days_in_year()).contains(&day_of_year) {
            return Ok(());
        }
        check_range(Component::DayOfYear, day_of_year, 1, self.count_days_in_year(year))
    }
}
