//! Supported ranges of a schema.
//!
//! A [`CalendricalSegment`] is the epoch-independent part of a calendar's
//! scope: the years, months and days that a schema is allowed to handle,
//! kept mutually consistent. Segments are built once by a
//! [`SegmentBuilder`] and then shared read-only.

use std::{collections::HashMap, sync::Arc};

use crate::{
    error::{CalendarError, Component, check_range},
    range::Range,
    schema::CalendricalSchema,
    types::{DateParts, MonthParts, OrdinalParts},
};

/// The supported ranges of a schema, in every unit.
#[derive(Debug, Clone)]
pub struct CalendricalSegment {
    schema:                Arc<dyn CalendricalSchema>,
    supported_days:        Range<i32>,
    supported_months:      Range<i32>,
    supported_years:       Range<i32>,
    min_max_date_parts:    Range<DateParts>,
    min_max_ordinal_parts: Range<OrdinalParts>,
    is_complete:           bool,
}

impl CalendricalSegment {
    /// The segment covering the whole of the years `supported_years`.
    ///
    /// # Errors
    /// Returns a range error if `supported_years` is not included in the
    /// years supported by the schema.
    pub fn create(schema: Arc<dyn CalendricalSchema>, supported_years: Range<i32>) -> Result<Self, CalendarError> {
        let mut builder = SegmentBuilder::new(schema);
        builder.set_supported_years(supported_years)?;
        builder.build()
    }

    /// The segment covering every year supported by the schema.
    ///
    /// # Errors
    /// Returns an overflow error if the day counts of the extreme years are
    /// not representable.
    pub fn create_maximal(schema: Arc<dyn CalendricalSchema>) -> Result<Self, CalendarError> {
        let mut builder = SegmentBuilder::new(schema);
        builder.use_full_range();
        builder.build()
    }

    pub fn schema(&self) -> &Arc<dyn CalendricalSchema> {
        &self.schema
    }

    /// Days since the epoch of the first and last supported days.
    pub const fn supported_days(&self) -> Range<i32> {
        self.supported_days
    }

    /// Months since the epoch of the first and last supported months.
    pub const fn supported_months(&self) -> Range<i32> {
        self.supported_months
    }

    pub const fn supported_years(&self) -> Range<i32> {
        self.supported_years
    }

    pub const fn min_max_date_parts(&self) -> Range<DateParts> {
        self.min_max_date_parts
    }

    pub const fn min_max_ordinal_parts(&self) -> Range<OrdinalParts> {
        self.min_max_ordinal_parts
    }

    pub fn min_max_month_parts(&self) -> Range<MonthParts> {
        self.min_max_date_parts.map(|parts| parts.month_parts())
    }

    /// True when the segment starts at the beginning of a year and ends at
    /// the end of a year.
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Date(DateParts),
    Ordinal(OrdinalParts),
}

impl Endpoint {
    const fn year(self) -> i32 {
        match self {
            Self::Date(parts) => parts.year,
            Self::Ordinal(parts) => parts.year,
        }
    }
}

/// Year-level facts, computed at most once per year during a build.
#[derive(Debug, Clone, Copy)]
struct YearFacts {
    start_of_year: i64,
    days_in_year:  i32,
}

/// A resolved endpoint: both representations plus the day count.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    date:             DateParts,
    ordinal:          OrdinalParts,
    days_since_epoch: i64,
    facts:            YearFacts,
}

/// Builds a [`CalendricalSegment`] from boundary constraints.
///
/// Every setter validates its input against the schema. Endpoints that are
/// not set default to the limits of the years supported by the schema.
///
/// ```
/// use std::sync::Arc;
/// use calendrical::{DateParts, segment::SegmentBuilder, schema::GregorianSchema};
///
/// let mut builder = SegmentBuilder::new(Arc::new(GregorianSchema::new()));
/// builder.set_min_date(DateParts::new(2000, 6, 15))?.set_max_to_end_of_year(9999)?;
/// let segment = builder.build()?;
/// assert!(!segment.is_complete());
/// assert_eq!(segment.supported_years().endpoints(), (2000, 9999));
/// # Ok::<(), calendrical::CalendarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SegmentBuilder {
    schema: Arc<dyn CalendricalSchema>,
    min:    Option<Endpoint>,
    max:    Option<Endpoint>,
}

impl SegmentBuilder {
    pub fn new(schema: Arc<dyn CalendricalSchema>) -> Self {
        Self { schema, min: None, max: None }
    }

    fn check_year(&self, year: i32) -> Result<(), CalendarError> {
        let (min, max) = self.schema.supported_years().endpoints();
        check_range(Component::Year, year, min, max)
    }

    fn check_date(&self, parts: DateParts) -> Result<Endpoint, CalendarError> {
        self.check_year(parts.year)?;
        self.schema.validate_month_day(parts.year, parts.month, parts.day)?;
        Ok(Endpoint::Date(parts))
    }

    fn check_ordinal(&self, parts: OrdinalParts) -> Result<Endpoint, CalendarError> {
        self.check_year(parts.year)?;
        self.schema.validate_day_of_year(parts.year, parts.day_of_year)?;
        Ok(Endpoint::Ordinal(parts))
    }

    /// # Errors
    /// Returns a range error if the date is not valid for the schema.
    pub fn set_min_date(&mut self, parts: DateParts) -> Result<&mut Self, CalendarError> {
        self.min = Some(self.check_date(parts)?);
        Ok(self)
    }

    /// # Errors
    /// Returns a range error if the date is not valid for the schema.
    pub fn set_max_date(&mut self, parts: DateParts) -> Result<&mut Self, CalendarError> {
        self.max = Some(self.check_date(parts)?);
        Ok(self)
    }

    /// # Errors
    /// Returns a range error if the ordinal date is not valid for the
    /// schema.
    pub fn set_min_ordinal(&mut self, parts: OrdinalParts) -> Result<&mut Self, CalendarError> {
        self.min = Some(self.check_ordinal(parts)?);
        Ok(self)
    }

    /// # Errors
    /// Returns a range error if the ordinal date is not valid for the
    /// schema.
    pub fn set_max_ordinal(&mut self, parts: OrdinalParts) -> Result<&mut Self, CalendarError> {
        self.max = Some(self.check_ordinal(parts)?);
        Ok(self)
    }

    /// # Errors
    /// Returns a range error if the schema does not support `year`.
    pub fn set_min_to_start_of_year(&mut self, year: i32) -> Result<&mut Self, CalendarError> {
        self.check_year(year)?;
        self.min = Some(Endpoint::Ordinal(OrdinalParts::at_start_of_year(year)));
        Ok(self)
    }

    /// # Errors
    /// Returns a range error if the schema does not support `year`.
    pub fn set_max_to_end_of_year(&mut self, year: i32) -> Result<&mut Self, CalendarError> {
        self.check_year(year)?;
        let day_of_year = self.schema.count_days_in_year(year);
        self.max = Some(Endpoint::Ordinal(OrdinalParts::new(year, day_of_year)));
        Ok(self)
    }

    /// Sets both endpoints to the limits of `years`.
    ///
    /// # Errors
    /// Returns a range error if the schema does not support one of the
    /// years.
    pub fn set_supported_years(&mut self, years: Range<i32>) -> Result<&mut Self, CalendarError> {
        let (min, max) = years.endpoints();
        self.set_min_to_start_of_year(min)?;
        self.set_max_to_end_of_year(max)
    }

    /// Sets both endpoints to the limits of the years supported by the
    /// schema.
    pub fn use_full_range(&mut self) -> &mut Self {
        let (min, max) = self.schema.supported_years().endpoints();
        self.min = Some(Endpoint::Ordinal(OrdinalParts::at_start_of_year(min)));
        self.max = Some(Endpoint::Ordinal(OrdinalParts::new(max, self.schema.count_days_in_year(max))));
        self
    }

    /// Like [`use_full_range`], but starting no earlier than year 1.
    ///
    /// # Errors
    /// Returns a range error if the schema supports no year from 1 on.
    ///
    /// [`use_full_range`]: SegmentBuilder::use_full_range
    pub fn use_full_range_on_or_after_epoch(&mut self) -> Result<&mut Self, CalendarError> {
        let (min, max) = self.schema.supported_years().endpoints();
        if max < 1 {
            return Err(CalendarError::range(Component::Year, 1, min, max));
        }
        self.set_min_to_start_of_year(min.max(1))?;
        self.set_max_to_end_of_year(max)
    }

    /// Resolves the endpoints and builds the segment.
    ///
    /// # Errors
    /// Returns an invalid-range error when the minimum comes after the
    /// maximum, and an overflow error when the day count of an endpoint is
    /// not representable.
    pub fn build(&self) -> Result<CalendricalSegment, CalendarError> {
        let schema = &*self.schema;
        let (min_year, max_year) = schema.supported_years().endpoints();

        // Both endpoints frequently fall in the same year.
        let mut memo: HashMap<i32, YearFacts> = HashMap::with_capacity(2);
        let mut resolve = |endpoint: Endpoint| -> Result<Resolved, CalendarError> {
            let year = endpoint.year();
            let facts = *memo.entry(year).or_insert_with(|| YearFacts {
                start_of_year: schema.get_start_of_year_wide(year),
                days_in_year:  schema.count_days_in_year(year),
            });
            let (date, ordinal) = match endpoint {
                Endpoint::Date(date) => {
                    let day_of_year = schema.get_day_of_year(date.year, date.month, date.day);
                    (date, OrdinalParts::new(year, day_of_year))
                },
                Endpoint::Ordinal(ordinal) => {
                    let (month, day) = schema.get_month(year, ordinal.day_of_year);
                    (DateParts::new(year, month, day), ordinal)
                },
            };
            let days_since_epoch = facts.start_of_year + i64::from(ordinal.day_of_year) - 1;
            if i32::try_from(days_since_epoch).is_err() {
                return Err(CalendarError::overflow(Component::DaysSinceEpoch, days_since_epoch));
            }
            Ok(Resolved {
                date,
                ordinal,
                days_since_epoch,
                facts,
            })
        };

        let min = resolve(self.min.unwrap_or(Endpoint::Ordinal(OrdinalParts::at_start_of_year(min_year))))?;
        let max = resolve(
            self.max
                .unwrap_or_else(|| Endpoint::Ordinal(OrdinalParts::new(max_year, schema.count_days_in_year(max_year)))),
        )?;

        let min_max_date_parts = Range::new(min.date, max.date)?;
        let min_max_ordinal_parts = Range::new_unchecked(min.ordinal, max.ordinal);
        let supported_days = Range::new_unchecked(min.days_since_epoch as i32, max.days_since_epoch as i32);
        let supported_months = Range::new_unchecked(
            schema.count_months_since_epoch(min.date.year, min.date.month),
            schema.count_months_since_epoch(max.date.year, max.date.month),
        );
        let supported_years = Range::new_unchecked(min.date.year, max.date.year);
        let is_complete = min.ordinal.day_of_year == 1 && max.ordinal.day_of_year == max.facts.days_in_year;
        debug_assert!(min.facts.start_of_year <= i64::from(supported_days.min()));

        debug!(
            "built segment: days {supported_days}, months {supported_months}, years {supported_years}, \
             complete: {is_complete}",
        );

        Ok(CalendricalSegment {
            schema: Arc::clone(&self.schema),
            supported_days,
            supported_months,
            supported_years,
            min_max_date_parts,
            min_max_ordinal_parts,
            is_complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{GregorianSchema, HebrewSchema, PrototypalSchema};

    fn gregorian() -> Arc<dyn CalendricalSchema> {
        Arc::new(GregorianSchema::new())
    }

    #[test]
    fn test_complete_segment() {
        let segment = CalendricalSegment::create(gregorian(), Range::new(1, 9999).unwrap()).unwrap();
        let schema = GregorianSchema::new();

        assert!(segment.is_complete());
        assert_eq!(segment.supported_years().endpoints(), (1, 9999));
        assert_eq!(segment.supported_days().min(), schema.get_start_of_year(1));
        assert_eq!(segment.supported_days().max(), schema.get_end_of_year(9999));
        assert_eq!(segment.supported_months().endpoints(), (0, 12 * 9999 - 1));
        assert_eq!(
            segment.min_max_date_parts().endpoints(),
            (DateParts::new(1, 1, 1), DateParts::new(9999, 12, 31))
        );
        assert_eq!(
            segment.min_max_ordinal_parts().endpoints(),
            (OrdinalParts::new(1, 1), OrdinalParts::new(9999, 365))
        );
        assert_eq!(
            segment.min_max_month_parts().endpoints(),
            (MonthParts::new(1, 1), MonthParts::new(9999, 12))
        );
    }

    #[test]
    fn test_partial_first_year() {
        let mut builder = SegmentBuilder::new(gregorian());
        builder
            .set_min_date(DateParts::new(2000, 6, 15))
            .unwrap()
            .set_max_to_end_of_year(2100)
            .unwrap();
        let segment = builder.build().unwrap();

        assert!(!segment.is_complete());
        assert_eq!(segment.min_max_ordinal_parts().min(), OrdinalParts::new(2000, 167));
        assert_eq!(
            segment.supported_days().min(),
            GregorianSchema::new().count_days_since_epoch(2000, 6, 15)
        );
    }

    #[test]
    fn test_ordinal_endpoints() {
        let mut builder = SegmentBuilder::new(gregorian());
        builder
            .set_min_ordinal(OrdinalParts::new(2024, 60))
            .unwrap()
            .set_max_ordinal(OrdinalParts::new(2024, 366))
            .unwrap();
        let segment = builder.build().unwrap();

        assert_eq!(segment.min_max_date_parts().min(), DateParts::new(2024, 2, 29));
        assert_eq!(segment.min_max_date_parts().max(), DateParts::new(2024, 12, 31));
        assert_eq!(segment.supported_years(), Range::singleton(2024));
        assert!(!segment.is_complete());
    }

    #[test]
    fn test_setters_validate_against_the_schema() {
        struct TestCase {
            result:    Result<(), CalendarError>,
            component: Component,
        }

        let mut builder = SegmentBuilder::new(gregorian());
        let cases = [
            TestCase {
                result:    builder.set_min_date(DateParts::new(2023, 2, 29)).map(|_| ()),
                component: Component::Day,
            },
            TestCase {
                result:    builder.set_min_date(DateParts::new(2023, 13, 1)).map(|_| ()),
                component: Component::Month,
            },
            TestCase {
                result:    builder.set_max_ordinal(OrdinalParts::new(2023, 366)).map(|_| ()),
                component: Component::DayOfYear,
            },
            TestCase {
                result:    builder.set_max_to_end_of_year(1_000_000).map(|_| ()),
                component: Component::Year,
            },
            TestCase {
                result:    builder.set_supported_years(Range::new(-1_000_000, 1).unwrap()).map(|_| ()),
                component: Component::Year,
            },
        ];

        for case in cases {
            let err = case.result.unwrap_err();
            assert!(err.is_range());
            assert_eq!(err.component(), Some(case.component));
        }
    }

    #[test]
    fn test_min_after_max_is_an_invalid_range() {
        let mut builder = SegmentBuilder::new(gregorian());
        builder
            .set_min_date(DateParts::new(2000, 6, 15))
            .unwrap()
            .set_max_date(DateParts::new(2000, 6, 14))
            .unwrap();
        let err = builder.build().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidRange(_)));
        assert!(err.is_range());
    }

    #[test]
    fn test_full_range() {
        let segment = CalendricalSegment::create_maximal(Arc::new(HebrewSchema::new())).unwrap();
        let schema = HebrewSchema::new();
        let (min, max) = schema.supported_years().endpoints();
        assert!(segment.is_complete());
        assert_eq!(segment.supported_days().min(), schema.get_start_of_year(min));
        assert_eq!(segment.supported_days().max(), schema.get_end_of_year(max));

        let mut builder = SegmentBuilder::new(gregorian());
        let segment = builder.use_full_range_on_or_after_epoch().unwrap().build().unwrap();
        assert_eq!(segment.supported_days().min(), 0);
        assert_eq!(segment.min_max_date_parts().min(), DateParts::new(1, 1, 1));
    }

    #[test]
    fn test_unrepresentable_day_counts_overflow() {
        // With years of 10 million days, year 215 ends past `i32::MAX`.
        #[derive(Debug)]
        struct LongYears;

        impl crate::schema::CalendricalKernel for LongYears {
            fn family(&self) -> crate::schema::CalendricalFamily {
                crate::schema::CalendricalFamily::Solar
            }
            fn is_regular(&self) -> Option<i32> {
                Some(1)
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
            fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
                false
            }
            fn count_months_in_year(&self, _year: i32) -> i32 {
                1
            }
            fn count_days_in_year(&self, _year: i32) -> i32 {
                10_000_000
            }
            fn count_days_in_month(&self, _year: i32, _month: i32) -> i32 {
                10_000_000
            }
        }

        let schema = PrototypalSchema::new(LongYears, 10_000_000, 10_000_000)
            .with_supported_years(Range::new(1, 300).unwrap());
        let mut builder = SegmentBuilder::new(Arc::new(schema));
        builder.set_supported_years(Range::new(1, 215).unwrap()).unwrap();
        let err = builder.build().unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(err.component(), Some(Component::DaysSinceEpoch));

        builder.set_supported_years(Range::new(1, 214).unwrap()).unwrap();
        assert!(builder.build().is_ok());

        // Year 216 starts past `i32::MAX`; the overflow must not wrap.
        for max_year in [216, 217, 300] {
            builder.set_supported_years(Range::new(1, max_year).unwrap()).unwrap();
            let err = builder.build().unwrap_err();
            assert!(err.is_overflow(), "{max_year}: {err}");
            assert_eq!(err.component(), Some(Component::DaysSinceEpoch));
        }
        builder.set_supported_years(Range::new(216, 216).unwrap()).unwrap();
        assert!(builder.build().unwrap_err().is_overflow());
    }
}
