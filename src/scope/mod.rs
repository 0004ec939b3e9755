//! Calendar scopes.
//!
//! A scope binds a [`CalendricalSegment`] to an epoch, giving the range of
//! day numbers a calendar supports. It is the validation gate through which
//! every date goes before the schema is asked to convert it: once a scope
//! accepts `(year, month, day)`, every conversion on it is exact and every
//! resulting day number lies in the scope's domain.
//!
//! Validators fail with a range error naming the offending component. A
//! year outside the scope is always reported as a year error, whatever the
//! month and the day.

use std::{fmt, sync::Arc};

use crate::{
    day_number::DayNumber,
    error::{CalendarError, Component, check_range},
    range::Range,
    schema::CalendricalSchema,
    segment::CalendricalSegment,
};

mod bounded_below;
mod gregorian;
mod minmax;
mod proleptic;
mod standard;

pub use bounded_below::BoundedBelowScope;
pub use gregorian::{GregorianProlepticScope, GregorianStandardScope};
pub use minmax::MinMaxYearScope;
pub use proleptic::ProlepticScope;
pub use standard::StandardScope;

/// The validated, epoch-bound range of dates of a calendar.
pub trait CalendarScope: fmt::Debug + Send + Sync {
    /// Day number of the first day of year 1.
    fn epoch(&self) -> DayNumber;

    fn segment(&self) -> &CalendricalSegment;

    fn schema(&self) -> &Arc<dyn CalendricalSchema> {
        self.segment().schema()
    }

    /// The supported day numbers.
    fn domain(&self) -> Range<DayNumber>;

    /// True when the scope covers whole years only.
    fn is_complete(&self) -> bool {
        self.segment().is_complete()
    }

    /// # Errors
    /// Returns a range error naming [`Component::Year`].
    fn validate_year(&self, year: i32) -> Result<(), CalendarError> {
        let (min, max) = self.segment().supported_years().endpoints();
        check_range(Component::Year, year, min, max)
    }

    /// # Errors
    /// Returns a range error naming the year or the month.
    fn validate_year_month(&self, year: i32, month: i32) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        self.schema().validate_month(year, month)
    }

    /// # Errors
    /// Returns a range error naming the year, the month or the day.
    fn validate_year_month_day(&self, year: i32, month: i32, day: i32) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        self.schema().validate_month_day(year, month, day)
    }

    /// # Errors
    /// Returns a range error naming the year or the day of the year.
    fn validate_ordinal(&self, year: i32, day_of_year: i32) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        self.schema().validate_day_of_year(year, day_of_year)
    }

    /// Fails with a range error unless `day_number` is in the domain.
    ///
    /// # Errors
    /// Returns a range error naming [`Component::DayNumber`].
    fn check_day_number(&self, day_number: DayNumber) -> Result<(), CalendarError> {
        let (min, max) = self.domain().endpoints();
        check_range(
            Component::DayNumber,
            day_number.days_since_zero(),
            min.days_since_zero(),
            max.days_since_zero(),
        )
    }

    /// Fails with an overflow error unless `day_number` is in the domain;
    /// used on the results of arithmetic.
    ///
    /// # Errors
    /// Returns an overflow error naming [`Component::DayNumber`].
    fn check_overflow(&self, day_number: DayNumber) -> Result<(), CalendarError> {
        if self.domain().contains(day_number) {
            return Ok(());
        }
        trace!("day number {day_number} overflows the domain {}", self.domain());
        Err(CalendarError::overflow(Component::DayNumber, day_number.days_since_zero()))
    }

    /// Day number of a day count relative to the epoch.
    ///
    /// # Errors
    /// Returns an overflow error if the result is not representable.
    fn to_day_number(&self, days_since_epoch: i32) -> Result<DayNumber, CalendarError> {
        self.epoch().add_days(days_since_epoch)
    }

    /// Day count relative to the epoch of a day number.
    ///
    /// # Errors
    /// Returns an overflow error if the result is not representable.
    fn to_days_since_epoch(&self, day_number: DayNumber) -> Result<i32, CalendarError> {
        day_number.days_since(self.epoch())
    }
}

/// A segment anchored at an epoch; the state shared by every scope.
#[derive(Debug, Clone)]
pub(crate) struct AnchoredSegment {
    epoch:   DayNumber,
    segment: CalendricalSegment,
    domain:  Range<DayNumber>,
}

impl AnchoredSegment {
    /// # Errors
    /// Returns an overflow error if a supported day, once anchored, does not
    /// fit in a [`DayNumber`].
    pub(crate) fn new(epoch: DayNumber, segment: CalendricalSegment) -> Result<Self, CalendarError> {
        let (min, max) = segment.supported_days().endpoints();
        let domain = Range::new_unchecked(epoch.add_days(min)?, epoch.add_days(max)?);
        debug!("anchored segment {} at epoch {epoch}: domain {domain}", segment.supported_years());
        Ok(Self { epoch, segment, domain })
    }

    pub(crate) const fn epoch(&self) -> DayNumber {
        self.epoch
    }

    pub(crate) const fn segment(&self) -> &CalendricalSegment {
        &self.segment
    }

    pub(crate) const fn domain(&self) -> Range<DayNumber> {
        self.domain
    }
}

/// Implements the accessors of [`CalendarScope`] for a type holding an
/// `inner: AnchoredSegment` field.
macro_rules! anchored_scope_accessors {
    () => {
        fn epoch(&self) -> $crate::day_number::DayNumber {
            self.inner.epoch()
        }

        fn segment(&self) -> &$crate::segment::CalendricalSegment {
            self.inner.segment()
        }

        fn domain(&self) -> $crate::range::Range<$crate::day_number::DayNumber> {
            self.inner.domain()
        }
    };
}
pub(crate) use anchored_scope_accessors;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{day_number::epochs, schema::GregorianSchema, segment::SegmentBuilder};

    #[test]
    fn test_anchoring_overflow() {
        let segment = CalendricalSegment::create_maximal(Arc::new(GregorianSchema::new())).unwrap();
        let err = AnchoredSegment::new(DayNumber::new(i32::MAX - 1000), segment.clone()).unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(err.component(), Some(Component::DayNumber));

        let anchored = AnchoredSegment::new(epochs::GREGORIAN, segment).unwrap();
        assert_eq!(anchored.domain().min().days_since_zero(), GregorianSchema::start_of_year(-999_998));
    }

    #[test]
    fn test_domain_checks() {
        let mut builder = SegmentBuilder::new(Arc::new(GregorianSchema::new()));
        builder.set_supported_years(Range::new(1, 1).unwrap()).unwrap();
        let anchored = AnchoredSegment::new(DayNumber::new(10), builder.build().unwrap()).unwrap();
        assert_eq!(anchored.domain().endpoints(), (DayNumber::new(10), DayNumber::new(374)));

        let scope = MinMaxYearScope::from_anchored(anchored);
        assert!(scope.check_day_number(DayNumber::new(10)).is_ok());
        assert!(scope.check_day_number(DayNumber::new(374)).is_ok());
        let err = scope.check_day_number(DayNumber::new(9)).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.to_string(), "day number = 9 is out of range 10..=374");
        assert!(scope.check_overflow(DayNumber::new(375)).unwrap_err().is_overflow());

        assert_eq!(scope.to_day_number(0).unwrap(), DayNumber::new(10));
        assert_eq!(scope.to_days_since_epoch(DayNumber::new(12)).unwrap(), 2);
    }
}
