use super::{CalendricalFamily, CalendricalKernel, CalendricalSchema, DEFAULT_SUPPORTED_YEARS, StartOfYearCache};
use crate::range::Range;

/// A schema derived from the primitives of any kernel.
///
/// Conversions are computed by walking years and months, starting from a
/// linear estimate, so that only [`CalendricalKernel`] has to be written to
/// obtain a working calendar. Starts of years are memoized in a
/// [`StartOfYearCache`]. This is far slower than the closed-form schemas,
/// against which it serves as a reference.
///
/// ```
/// use calendrical::schema::{CalendricalSchema, GregorianSchema, PrototypalSchema};
///
/// let schema = PrototypalSchema::new(GregorianSchema::new(), 365, 28);
/// assert_eq!(schema.get_date_parts(730_119), (2000, 1, 1));
/// ```
#[derive(Debug)]
pub struct PrototypalSchema<K> {
    kernel:             K,
    min_days_in_year:   i32,
    min_days_in_month:  i32,
    min_months_in_year: i32,
    supported_years:    Range<i32>,
    cache:              StartOfYearCache,
}

impl<K: CalendricalKernel> PrototypalSchema<K> {
    /// Creates a schema over `kernel`.
    ///
    /// `min_days_in_year` and `min_days_in_month` must be the lengths of
    /// the shortest year and month of the calendar; both are positive.
    pub fn new(kernel: K, min_days_in_year: i32, min_days_in_month: i32) -> Self {
        debug_assert!(min_days_in_year > 0 && min_days_in_month > 0);
        let min_months_in_year = kernel.is_regular().unwrap_or(12);
        Self {
            kernel,
            min_days_in_year,
            min_days_in_month,
            min_months_in_year,
            supported_years: DEFAULT_SUPPORTED_YEARS,
            cache: StartOfYearCache::new(),
        }
    }

    /// Restricts the supported years, which otherwise are the same as for
    /// the built-in schemas.
    #[must_use]
    pub fn with_supported_years(mut self, supported_years: Range<i32>) -> Self {
        self.supported_years = supported_years;
        self
    }

    /// Sets the smallest number of months in a year, needed when the kernel
    /// is not regular and some years have fewer than 12 months.
    #[must_use]
    pub fn with_min_months_in_year(mut self, min_months_in_year: i32) -> Self {
        self.min_months_in_year = min_months_in_year;
        self
    }

    pub const fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Sum of `f(y)` over the years between year 1 and `year`, negated for
    /// years before year 1.
    fn sum_over_years(year: i32, f: impl Fn(i32) -> i32) -> i64 {
        if year >= 1 {
            (1..year).map(|y| i64::from(f(y))).sum()
        } else {
            -(year..1).map(|y| i64::from(f(y))).sum::<i64>()
        }
    }
}

impl<K: CalendricalKernel> CalendricalKernel for PrototypalSchema<K> {
    fn family(&self) -> CalendricalFamily {
        self.kernel.family()
    }

    fn is_regular(&self) -> Option<i32> {
        self.kernel.is_regular()
    }

    fn is_leap_year(&self, year: i32) -> bool {
        self.kernel.is_leap_year(year)
    }

    fn is_intercalary_month(&self, year: i32, month: i32) -> bool {
        self.kernel.is_intercalary_month(year, month)
    }

    fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool {
        self.kernel.is_intercalary_day(year, month, day)
    }

    fn is_supplementary_day(&self, year: i32, month: i32, day: i32) -> bool {
        self.kernel.is_supplementary_day(year, month, day)
    }

    fn count_months_in_year(&self, year: i32) -> i32 {
        self.kernel.count_months_in_year(year)
    }

    fn count_days_in_year(&self, year: i32) -> i32 {
        self.kernel.count_days_in_year(year)
    }

    fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
        self.kernel.count_days_in_month(year, month)
    }
}

impl<K: CalendricalKernel> CalendricalSchema for PrototypalSchema<K> {
    fn supported_years(&self) -> Range<i32> {
        self.supported_years
    }

    fn min_days_in_year(&self) -> i32 {
        self.min_days_in_year
    }

    fn min_days_in_month(&self) -> i32 {
        self.min_days_in_month
    }

    fn min_months_in_year(&self) -> i32 {
        self.min_months_in_year
    }

    fn count_days_in_year_before_month(&self, year: i32, month: i32) -> i32 {
        (1..month).map(|m| self.kernel.count_days_in_month(year, m)).sum()
    }

    fn count_months_since_epoch(&self, year: i32, month: i32) -> i32 {
        let months_before_year = match self.kernel.is_regular() {
            Some(months) => i64::from(months) * (i64::from(year) - 1),
            None => Self::sum_over_years(year, |y| self.kernel.count_months_in_year(y)),
        };
        (months_before_year + i64::from(month) - 1) as i32
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> (i32, i32) {
        if let Some(months) = self.kernel.is_regular() {
            return (1 + months_since_epoch.div_euclid(months), 1 + months_since_epoch.rem_euclid(months));
        }
        let mut year = 1 + months_since_epoch.div_euclid(self.min_months_in_year.max(1));
        let mut start = self.get_start_of_year_in_months(year);
        while months_since_epoch < start {
            year -= 1;
            start -= self.kernel.count_months_in_year(year);
        }
        loop {
            let months = self.kernel.count_months_in_year(year);
            if months_since_epoch < start + months {
                return (year, months_since_epoch - start + 1);
            }
            start += months;
            year += 1;
        }
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        // Dividing by the shortest year overshoots, away from year 1.
        let mut year = 1 + days_since_epoch.div_euclid(self.min_days_in_year);
        let mut start = self.get_start_of_year(year);
        while days_since_epoch < start {
            year -= 1;
            start -= self.kernel.count_days_in_year(year);
        }
        loop {
            let days = self.kernel.count_days_in_year(year);
            if days_since_epoch < start + days {
                return (year, days_since_epoch - start + 1);
            }
            start += days;
            year += 1;
        }
    }

    fn get_month(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let months_in_year = self.kernel.count_months_in_year(year);
        let mut month = 1;
        let mut day = day_of_year;
        loop {
            let days = self.kernel.count_days_in_month(year, month);
            if day <= days || month >= months_in_year {
                return (month, day);
            }
            day -= days;
            month += 1;
        }
    }

    fn get_start_of_year(&self, year: i32) -> i32 {
        // Wraps when out of range; the segment builder rejects such years.
        self.get_start_of_year_wide(year) as i32
    }

    fn get_start_of_year_wide(&self, year: i32) -> i64 {
        self.cache
            .get_or_insert_with(year, || Self::sum_over_years(year, |y| self.kernel.count_days_in_year(y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{GregorianSchema, HebrewSchema, PaxSchema};

    /// A kernel written from scratch, as a user would: a 10-month calendar
    /// of 36/37-day months, with a leap day every fourth year.
    #[derive(Debug)]
    struct DecimalKernel;

    impl CalendricalKernel for DecimalKernel {
        fn family(&self) -> CalendricalFamily {
            CalendricalFamily::Solar
        }

        fn is_regular(&self) -> Option<i32> {
            Some(10)
        }

        fn is_leap_year(&self, year: i32) -> bool {
            year.rem_euclid(4) == 0
        }

        fn is_intercalary_month(&self, _year: i32, _month: i32) -> bool {
            false
        }

        fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool {
            self.is_leap_year(year) && month == 10 && day == 37
        }

        fn is_supplementary_day(&self, _year: i32, _month: i32, _day: i32) -> bool {
            false
        }

        fn count_months_in_year(&self, _year: i32) -> i32 {
            10
        }

        fn count_days_in_year(&self, year: i32) -> i32 {
            365 + i32::from(self.is_leap_year(year))
        }

        fn count_days_in_month(&self, year: i32, month: i32) -> i32 {
            match month {
                1..=5 => 37,
                10 => 36 + i32::from(self.is_leap_year(year)),
                _ => 36,
            }
        }
    }

    fn assert_agrees(reference: &dyn CalendricalSchema, schema: &dyn CalendricalSchema, years: std::ops::RangeInclusive<i32>) {
        for year in years {
            assert_eq!(reference.get_start_of_year(year), schema.get_start_of_year(year), "start of year {year}");
            for month in 1..=schema.count_months_in_year(year) {
                assert_eq!(
                    reference.count_months_since_epoch(year, month),
                    schema.count_months_since_epoch(year, month)
                );
                for day in 1..=schema.count_days_in_month(year, month) {
                    let days_since_epoch = schema.count_days_since_epoch(year, month, day);
                    assert_eq!(reference.count_days_since_epoch(year, month, day), days_since_epoch);
                    assert_eq!(reference.get_date_parts(days_since_epoch), (year, month, day));
                }
            }
        }
    }

    #[test]
    fn test_user_defined_kernel() {
        let schema = PrototypalSchema::new(DecimalKernel, 365, 36);
        let mut days_since_epoch = schema.get_start_of_year(-20);
        for year in -20..=20 {
            for month in 1..=10 {
                for day in 1..=schema.count_days_in_month(year, month) {
                    assert_eq!(schema.count_days_since_epoch(year, month, day), days_since_epoch);
                    assert_eq!(schema.get_date_parts(days_since_epoch), (year, month, day));
                    days_since_epoch += 1;
                }
            }
        }
        assert_eq!(schema.get_month_parts(-1), (0, 10));
    }

    #[test]
    fn test_agrees_with_gregorian() {
        let reference = PrototypalSchema::new(GregorianSchema::new(), 365, 28);
        assert_agrees(&reference, &GregorianSchema::new(), -100..=100);
        assert_agrees(&reference, &GregorianSchema::new(), 1990..=2030);
    }

    #[test]
    fn test_agrees_with_irregular_schemas() {
        let hebrew = PrototypalSchema::new(HebrewSchema::new(), 353, 29);
        assert_agrees(&hebrew, &HebrewSchema::new(), 5775..=5790);
        assert_eq!(hebrew.get_month_parts(HebrewSchema::new().count_months_since_epoch(5784, 13)), (5784, 13));

        let pax = PrototypalSchema::new(PaxSchema::new(), 364, 7).with_min_months_in_year(13);
        assert_agrees(&pax, &PaxSchema::new(), -30..=30);
        assert_eq!(pax.min_months_in_year(), 13);
    }

    #[test]
    fn test_validation_uses_the_kernel() {
        let schema = PrototypalSchema::new(GregorianSchema::new(), 365, 28)
            .with_supported_years(Range::new(1, 9999).unwrap());
        assert_eq!(schema.supported_years().endpoints(), (1, 9999));
        assert!(schema.validate_month_day(2024, 2, 29).is_ok());
        assert!(schema.validate_month_day(2023, 2, 29).is_err());
        assert!(schema.validate_day_of_year(2024, 366).is_ok());
        assert!(schema.validate_day_of_year(2023, 366).is_err());
    }
}
