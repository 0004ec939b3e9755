use std::sync::Arc;

use super::{AnchoredSegment, CalendarScope, anchored_scope_accessors};
use crate::{
    day_number::DayNumber,
    error::{CalendarError, Component, check_range},
    schema::CalendricalSchema,
    segment::SegmentBuilder,
    types::{DateParts, OrdinalParts},
};

/// A scope starting on an arbitrary date and ending at the end of a year.
///
/// The first year is partial: besides year membership, a date of the
/// minimum year is compared against the minimum date itself, and the
/// error names the first component that comes too early.
///
/// ```
/// use std::sync::Arc;
///
/// use calendrical::{
///     DateParts, DayNumber,
///     schema::GregorianSchema,
///     scope::{BoundedBelowScope, CalendarScope},
/// };
///
/// let scope = BoundedBelowScope::new(Arc::new(GregorianSchema::new()), DayNumber::ZERO, DateParts::new(2000, 6, 15), 9999)?;
/// assert!(scope.validate_year_month_day(2000, 6, 15).is_ok());
/// assert!(scope.validate_year_month_day(2000, 6, 14).is_err());
/// # Ok::<(), calendrical::CalendarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundedBelowScope {
    inner:       AnchoredSegment,
    min_date:    DateParts,
    min_ordinal: OrdinalParts,
}

impl BoundedBelowScope {
    /// # Errors
    /// Returns a range error if `min_date` is not a valid date or
    /// `max_year` is not supported by the schema, an invalid-range error if
    /// `max_year` precedes the year of `min_date`, and an overflow error if
    /// the segment cannot be anchored at `epoch`.
    pub fn new(
        schema: Arc<dyn CalendricalSchema>,
        epoch: DayNumber,
        min_date: DateParts,
        max_year: i32,
    ) -> Result<Self, CalendarError> {
        let segment = SegmentBuilder::new(schema)
            .set_min_date(min_date)?
            .set_max_to_end_of_year(max_year)?
            .build()?;
        debug!("creating a scope from {min_date} to the end of {max_year} at epoch {epoch}");
        Ok(Self::from_segment(AnchoredSegment::new(epoch, segment)?))
    }

    fn from_segment(inner: AnchoredSegment) -> Self {
        let segment = inner.segment();
        let min_date = segment.min_max_date_parts().min();
        let min_ordinal = segment.min_max_ordinal_parts().min();
        Self { inner, min_date, min_ordinal }
    }

    pub const fn min_date(&self) -> DateParts {
        self.min_date
    }

    pub const fn min_ordinal(&self) -> OrdinalParts {
        self.min_ordinal
    }
}

impl CalendarScope for BoundedBelowScope {
    anchored_scope_accessors!();

    fn validate_year_month(&self, year: i32, month: i32) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        self.schema().validate_month(year, month)?;
        if year == self.min_date.year && month < self.min_date.month {
            let max = self.schema().count_months_in_year(year);
            return Err(CalendarError::range(Component::Month, month, self.min_date.month, max));
        }
        Ok(())
    }

    fn validate_year_month_day(&self, year: i32, month: i32, day: i32) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        self.schema().validate_month_day(year, month, day)?;
        if year != self.min_date.year {
            return Ok(());
        }
        let DateParts { month: min_month, day: min_day, .. } = self.min_date;
        if month < min_month {
            let max = self.schema().count_months_in_year(year);
            return Err(CalendarError::range(Component::Month, month, min_month, max));
        }
        if month == min_month {
            check_range(Component::Day, day, min_day, self.schema().count_days_in_month(year, month))?;
        }
        Ok(())
    }

    fn validate_ordinal(&self, year: i32, day_of_year: i32) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        self.schema().validate_day_of_year(year, day_of_year)?;
        if year == self.min_ordinal.year {
            let max = self.schema().count_days_in_year(year);
            check_range(Component::DayOfYear, day_of_year, self.min_ordinal.day_of_year, max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Coptic13Schema, GregorianSchema};

    fn gregorian_scope() -> BoundedBelowScope {
        BoundedBelowScope::new(Arc::new(GregorianSchema::new()), DayNumber::ZERO, DateParts::new(2000, 6, 15), 9999)
            .unwrap()
    }

    #[test]
    fn test_minimum_date() {
        struct TestCase {
            date:      (i32, i32, i32),
            component: Option<Component>,
        }
        let cases = [
            TestCase { date: (2000, 6, 15), component: None },
            TestCase { date: (2000, 12, 31), component: None },
            TestCase { date: (2000, 7, 1), component: None },
            TestCase { date: (9999, 12, 31), component: None },
            TestCase { date: (2000, 6, 14), component: Some(Component::Day) },
            TestCase { date: (2000, 5, 31), component: Some(Component::Month) },
            TestCase { date: (2000, 5, 20), component: Some(Component::Month) },
            TestCase { date: (1999, 12, 31), component: Some(Component::Year) },
            TestCase { date: (10_000, 1, 1), component: Some(Component::Year) },
            // Invalid dates are reported as such, even before the minimum.
            TestCase { date: (2000, 2, 30), component: Some(Component::Day) },
            TestCase { date: (2000, 13, 1), component: Some(Component::Month) },
        ];
        let scope = gregorian_scope();
        for case in cases {
            let (y, m, d) = case.date;
            let result = scope.validate_year_month_day(y, m, d);
            assert_eq!(result.err().and_then(|err| err.component()), case.component, "{:?}", case.date);
        }
    }

    #[test]
    fn test_error_reports_partial_range() {
        let scope = gregorian_scope();
        let err = scope.validate_year_month_day(2000, 6, 14).unwrap_err();
        assert_eq!(err.to_string(), "day = 14 is out of range 15..=30");
        let err = scope.validate_year_month(2000, 5).unwrap_err();
        assert_eq!(err.to_string(), "month = 5 is out of range 6..=12");
        assert!(scope.validate_year_month(2000, 6).is_ok());
        assert!(scope.validate_year_month(2001, 1).is_ok());
    }

    #[test]
    fn test_minimum_ordinal() {
        let scope = gregorian_scope();
        // June 15th of a leap year.
        assert_eq!(scope.min_ordinal(), OrdinalParts::new(2000, 167));
        assert!(scope.validate_ordinal(2000, 167).is_ok());
        assert!(scope.validate_ordinal(2000, 366).is_ok());
        let err = scope.validate_ordinal(2000, 166).unwrap_err();
        assert_eq!(err.component(), Some(Component::DayOfYear));
        assert!(scope.validate_ordinal(2001, 1).is_ok());
    }

    #[test]
    fn test_domain() {
        let scope = gregorian_scope();
        assert!(!scope.is_complete());
        assert_eq!(scope.domain().min(), DayNumber::new(GregorianSchema::days_since_epoch(2000, 6, 15)));
        assert_eq!(scope.min_date(), DateParts::new(2000, 6, 15));
    }

    #[test]
    fn test_construction_errors() {
        let schema = Arc::new(Coptic13Schema::new());
        let err = BoundedBelowScope::new(schema.clone(), DayNumber::ZERO, DateParts::new(1000, 13, 7), 2000).unwrap_err();
        assert_eq!(err.component(), Some(Component::Day));

        let err = BoundedBelowScope::new(schema, DayNumber::ZERO, DateParts::new(1000, 1, 1), 999).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidRange(_)));
    }
}
