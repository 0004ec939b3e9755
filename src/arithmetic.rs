//! Calendar arithmetic.
//!
//! Adding days is exact. Adding months or years can land on a date that
//! does not exist (February 29th in a common year, the 13th month of a
//! Hebrew common year); what happens then is decided by an
//! [`AdditionRule`]. Every result is checked against the segment of the
//! scope: a result outside of it is an overflow error, even when the date
//! itself would be valid for the schema.
//!
//! Arguments must have been validated by the scope beforehand.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CalendarError, Component},
    prelude::*,
    schema::CalendricalSchema,
    scope::CalendarScope,
    segment::CalendricalSegment,
    types::{DateParts, MonthParts, OrdinalParts},
};

/// What to do when adding months or years produces a date that does not
/// exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionRule {
    /// Use the last existing day (or month) instead.
    #[default]
    #[display(fmt = "truncate")]
    Truncate,
    /// Carry the surplus days (or months) forward.
    #[display(fmt = "overspill")]
    Overspill,
    /// Fail with a range error naming the missing component.
    #[display(fmt = "exact")]
    Exact,
}

/// Arithmetic on the dates of one scope.
///
/// ```
/// use std::sync::Arc;
///
/// use calendrical::{
///     DateParts, DayNumber,
///     arithmetic::{AdditionRule, CalendarArithmetic},
///     scope::GregorianStandardScope,
/// };
///
/// let scope = Arc::new(GregorianStandardScope::new(DayNumber::ZERO)?);
/// let arithmetic = CalendarArithmetic::new(scope);
/// assert_eq!(arithmetic.add_years(DateParts::new(2024, 2, 29), 1)?, DateParts::new(2025, 2, 28));
///
/// let arithmetic = arithmetic.with_rule(AdditionRule::Overspill);
/// assert_eq!(arithmetic.add_years(DateParts::new(2024, 2, 29), 1)?, DateParts::new(2025, 3, 1));
/// # Ok::<(), calendrical::CalendarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CalendarArithmetic {
    scope: Arc<dyn CalendarScope>,
    rule:  AdditionRule,
}

impl CalendarArithmetic {
    pub fn new(scope: Arc<dyn CalendarScope>) -> Self {
        Self {
            scope,
            rule: AdditionRule::default(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: AdditionRule) -> Self {
        self.rule = rule;
        self
    }

    pub const fn rule(&self) -> AdditionRule {
        self.rule
    }

    pub fn scope(&self) -> &Arc<dyn CalendarScope> {
        &self.scope
    }

    fn schema(&self) -> &dyn CalendricalSchema {
        &**self.scope.schema()
    }

    fn segment(&self) -> &CalendricalSegment {
        self.scope.segment()
    }

    /// Checks that a day count computed in `i64` lies in the segment.
    fn check_days(&self, days_since_epoch: i64) -> Result<i32, CalendarError> {
        let (min, max) = self.segment().supported_days().endpoints();
        if (i64::from(min)..=i64::from(max)).contains(&days_since_epoch) {
            return Ok(days_since_epoch as i32);
        }
        trace!("days since epoch {days_since_epoch} overflows {}", self.segment().supported_days());
        Err(CalendarError::overflow(Component::DaysSinceEpoch, days_since_epoch))
    }

    fn check_year(&self, year: i64) -> Result<i32, CalendarError> {
        let (min, max) = self.segment().supported_years().endpoints();
        if (i64::from(min)..=i64::from(max)).contains(&year) {
            return Ok(year as i32);
        }
        trace!("year {year} overflows {}", self.segment().supported_years());
        Err(CalendarError::overflow(Component::Year, year))
    }

    /// Rejects the dates of a partial first year preceding the segment.
    fn check_date(&self, parts: DateParts) -> Result<DateParts, CalendarError> {
        if self.segment().min_max_date_parts().contains(parts) {
            return Ok(parts);
        }
        trace!("{parts} overflows {}", self.segment().min_max_date_parts());
        Err(CalendarError::overflow(Component::Day, parts.day))
    }

    fn check_ordinal(&self, parts: OrdinalParts) -> Result<OrdinalParts, CalendarError> {
        if self.segment().min_max_ordinal_parts().contains(parts) {
            return Ok(parts);
        }
        trace!("{parts} overflows {}", self.segment().min_max_ordinal_parts());
        Err(CalendarError::overflow(Component::DayOfYear, parts.day_of_year))
    }

    // Days

    /// # Errors
    /// Returns an overflow error if the result is outside the scope.
    pub fn add_days(&self, date: DateParts, days: i32) -> Result<DateParts, CalendarError> {
        let DateParts { year, month, day } = date;
        let start = self.schema().count_days_since_epoch(year, month, day);
        let days_since_epoch = self.check_days(i64::from(start) + i64::from(days))?;
        Ok(self.schema().get_date_parts(days_since_epoch).into())
    }

    /// # Errors
    /// Returns an overflow error if `date` is the last day of the scope.
    pub fn next_day(&self, date: DateParts) -> Result<DateParts, CalendarError> {
        if date >= self.segment().min_max_date_parts().max() {
            return Err(CalendarError::overflow(Component::Day, date.day));
        }
        let DateParts { year, month, day } = date;
        if day < self.schema().count_days_in_month(year, month) {
            Ok(DateParts::new(year, month, day + 1))
        } else if month < self.schema().count_months_in_year(year) {
            Ok(DateParts::new(year, month + 1, 1))
        } else {
            Ok(DateParts::at_start_of_year(year + 1))
        }
    }

    /// # Errors
    /// Returns an overflow error if `date` is the first day of the scope.
    pub fn previous_day(&self, date: DateParts) -> Result<DateParts, CalendarError> {
        if date <= self.segment().min_max_date_parts().min() {
            return Err(CalendarError::overflow(Component::Day, date.day));
        }
        let DateParts { year, month, day } = date;
        if day > 1 {
            Ok(DateParts::new(year, month, day - 1))
        } else if month > 1 {
            Ok(DateParts::new(year, month - 1, self.schema().count_days_in_month(year, month - 1)))
        } else {
            let year = year - 1;
            let month = self.schema().count_months_in_year(year);
            Ok(DateParts::new(year, month, self.schema().count_days_in_month(year, month)))
        }
    }

    /// Number of days from `start` to `end`, negative when `end` comes
    /// first.
    ///
    /// # Errors
    /// Returns an overflow error if the count does not fit in an `i32`.
    pub fn count_days_between(&self, start: DateParts, end: DateParts) -> Result<i32, CalendarError> {
        let schema = self.schema();
        let start = schema.count_days_since_epoch(start.year, start.month, start.day);
        let end = schema.count_days_since_epoch(end.year, end.month, end.day);
        let days = i64::from(end) - i64::from(start);
        i32::try_from(days).map_err(|_| CalendarError::overflow(Component::DaysSinceEpoch, days))
    }

    /// # Errors
    /// Returns an overflow error if the result is outside the scope.
    pub fn add_days_to_ordinal(&self, date: OrdinalParts, days: i32) -> Result<OrdinalParts, CalendarError> {
        let OrdinalParts { year, day_of_year } = date;
        let days_in_year = self.schema().count_days_in_year(year);
        let target = i64::from(day_of_year) + i64::from(days);
        // Within the same year the schema is not needed.
        if (1..=i64::from(days_in_year)).contains(&target) {
            return self.check_ordinal(OrdinalParts::new(year, target as i32));
        }
        let start = self.schema().count_days_since_epoch_ordinal(year, day_of_year);
        let days_since_epoch = self.check_days(i64::from(start) + i64::from(days))?;
        Ok(self.schema().get_year(days_since_epoch).into())
    }

    // Months

    /// # Errors
    /// Returns an overflow error if the result is outside the scope.
    pub fn add_months(&self, month: MonthParts, months: i32) -> Result<MonthParts, CalendarError> {
        let start = self.schema().count_months_since_epoch(month.year, month.month);
        let target = i64::from(start) + i64::from(months);
        let (min, max) = self.segment().supported_months().endpoints();
        if !(i64::from(min)..=i64::from(max)).contains(&target) {
            trace!("months since epoch {target} overflows {}", self.segment().supported_months());
            return Err(CalendarError::overflow(Component::MonthsSinceEpoch, target));
        }
        let (year, month) = self.schema().get_month_parts(target as i32);
        Ok(MonthParts::new(year, month))
    }

    /// Number of months from `start` to `end`, negative when `end` comes
    /// first.
    ///
    /// # Errors
    /// Returns an overflow error if the count does not fit in an `i32`.
    pub fn count_months_between(&self, start: MonthParts, end: MonthParts) -> Result<i32, CalendarError> {
        let schema = self.schema();
        let months = i64::from(schema.count_months_since_epoch(end.year, end.month))
            - i64::from(schema.count_months_since_epoch(start.year, start.month));
        i32::try_from(months).map_err(|_| CalendarError::overflow(Component::MonthsSinceEpoch, months))
    }

    /// Moves `date` by a number of months, keeping the day of the month
    /// when it exists.
    ///
    /// # Errors
    /// Returns an overflow error if the result is outside the scope, and a
    /// range error under [`AdditionRule::Exact`] when the day does not
    /// exist in the target month.
    pub fn add_months_to_date(&self, date: DateParts, months: i32) -> Result<DateParts, CalendarError> {
        let MonthParts { year, month } = self.add_months(date.month_parts(), months)?;
        let parts = self.resolve_day(year, month, date.day)?;
        self.check_date(parts)
    }

    // Years

    /// Moves `date` by a number of years, keeping the month and the day
    /// when they exist.
    ///
    /// # Errors
    /// Returns an overflow error if the result is outside the scope, and a
    /// range error under [`AdditionRule::Exact`] when the month or the day
    /// does not exist in the target year.
    pub fn add_years(&self, date: DateParts, years: i32) -> Result<DateParts, CalendarError> {
        let year = self.check_year(i64::from(date.year) + i64::from(years))?;
        let months_in_year = self.schema().count_months_in_year(year);
        let parts = if date.month <= months_in_year {
            self.resolve_day(year, date.month, date.day)?
        } else {
            match self.rule {
                AdditionRule::Truncate => {
                    DateParts::new(year, months_in_year, self.schema().count_days_in_month(year, months_in_year))
                }
                AdditionRule::Overspill => {
                    let end_of_year = self.schema().get_end_of_year(year);
                    let days_since_epoch = self.check_days(i64::from(end_of_year) + 1)?;
                    let (year, month, _) = self.schema().get_date_parts(days_since_epoch);
                    self.resolve_day(year, month + date.month - months_in_year - 1, date.day)?
                }
                AdditionRule::Exact => {
                    return Err(CalendarError::range(Component::Month, date.month, 1, months_in_year));
                }
            }
        };
        self.check_date(parts)
    }

    /// # Errors
    /// Returns an overflow error if the result is outside the scope, and a
    /// range error under [`AdditionRule::Exact`] when the day does not
    /// exist in the target year.
    pub fn add_years_to_ordinal(&self, date: OrdinalParts, years: i32) -> Result<OrdinalParts, CalendarError> {
        let year = self.check_year(i64::from(date.year) + i64::from(years))?;
        let days_in_year = self.schema().count_days_in_year(year);
        let parts = if date.day_of_year <= days_in_year {
            OrdinalParts::new(year, date.day_of_year)
        } else {
            match self.rule {
                AdditionRule::Truncate => OrdinalParts::new(year, days_in_year),
                AdditionRule::Overspill => {
                    let start = self.schema().get_start_of_year(year);
                    let days_since_epoch = self.check_days(i64::from(start) + i64::from(date.day_of_year) - 1)?;
                    self.schema().get_year(days_since_epoch).into()
                }
                AdditionRule::Exact => {
                    return Err(CalendarError::range(Component::DayOfYear, date.day_of_year, 1, days_in_year));
                }
            }
        };
        self.check_ordinal(parts)
    }

    /// Number of whole years from `start` to `end`, rounded toward zero.
    #[allow(clippy::unused_self)]
    pub fn count_years_between(&self, start: DateParts, end: DateParts) -> i32 {
        let years = end.year - start.year;
        let (start_md, end_md) = ((start.month, start.day), (end.month, end.day));
        if years > 0 && end_md < start_md {
            years - 1
        } else if years < 0 && end_md > start_md {
            years + 1
        } else {
            years
        }
    }

    /// Applies the rule to `(year, month, day)` where the month exists but
    /// the day might not.
    fn resolve_day(&self, year: i32, month: i32, day: i32) -> Result<DateParts, CalendarError> {
        let days_in_month = self.schema().count_days_in_month(year, month);
        if day <= days_in_month {
            return Ok(DateParts::new(year, month, day));
        }
        match self.rule {
            AdditionRule::Truncate => Ok(DateParts::new(year, month, days_in_month)),
            AdditionRule::Overspill => {
                let start = self.schema().get_start_of_month(year, month);
                let days_since_epoch = self.check_days(i64::from(start) + i64::from(day) - 1)?;
                Ok(self.schema().get_date_parts(days_since_epoch).into())
            }
            AdditionRule::Exact => Err(CalendarError::range(Component::Day, day, 1, days_in_month)),
        }
    }
}
