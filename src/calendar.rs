//! Calendars: a schema, an epoch and a scope under one identifier.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    arithmetic::CalendarArithmetic,
    day_number::{DayNumber, DayOfWeek},
    error::CalendarError,
    pack::{Yedoyx, Yemodax},
    range::Range,
    schema::SchemaId,
    scope::{
        BoundedBelowScope, CalendarScope, GregorianProlepticScope, GregorianStandardScope, MinMaxYearScope,
        ProlepticScope, StandardScope,
    },
    types::{CalendarId, DateParts, OrdinalParts},
};

/// The range of years a configured calendar supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScopePolicy {
    /// The years -9998 to 9999.
    #[default]
    Proleptic,
    /// The years 1 to 9999.
    Standard,
    MinMax { min_year: i32, max_year: i32 },
    /// From a given date to the end of `max_year`.
    BoundedBelow {
        year:     i32,
        month:    i32,
        day:      i32,
        max_year: i32,
    },
}

/// Description of a calendar, typically read from a configuration file.
///
/// ```
/// use calendrical::calendar::{Calendar, CalendarConfig};
///
/// let config: CalendarConfig = serde_json::from_str(
///     r#"{ "id": 3, "schema": "hebrew", "scope": { "kind": "standard" } }"#,
/// )?;
/// let hebrew = Calendar::from_config(&config)?;
/// assert_eq!(hebrew.date_parts(hebrew.day_number(5785, 1, 1)?)?.to_tuple(), (5785, 1, 1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub id:     CalendarId,
    pub schema: SchemaId,
    /// Defaults to the conventional epoch of the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch:  Option<DayNumber>,
    #[serde(default)]
    pub scope:  ScopePolicy,
}

/// A concrete calendar.
///
/// Every operation goes through the scope first: dates are validated
/// before they are converted, day numbers are checked against the domain
/// before they are split into parts.
#[derive(Debug, Clone)]
pub struct Calendar {
    id:        CalendarId,
    schema_id: SchemaId,
    scope:     Arc<dyn CalendarScope>,
}

impl Calendar {
    pub fn new(id: CalendarId, schema_id: SchemaId, scope: Arc<dyn CalendarScope>) -> Self {
        Self { id, schema_id, scope }
    }

    /// The proleptic Gregorian calendar, years -9998 to 9999.
    ///
    /// # Errors
    /// Never fails in practice; errors are those of scope construction.
    pub fn gregorian(id: CalendarId) -> Result<Self, CalendarError> {
        let scope = GregorianProlepticScope::new(SchemaId::Gregorian.default_epoch())?;
        Ok(Self::new(id, SchemaId::Gregorian, Arc::new(scope)))
    }

    /// The proleptic Julian calendar, years -9998 to 9999.
    ///
    /// # Errors
    /// Never fails in practice; errors are those of scope construction.
    pub fn julian(id: CalendarId) -> Result<Self, CalendarError> {
        Self::from_config(&CalendarConfig {
            id,
            schema: SchemaId::Julian,
            epoch: None,
            scope: ScopePolicy::Proleptic,
        })
    }

    /// # Errors
    /// Returns the error of the segment builder or of the scope
    /// constructor when the configuration describes an unsupported range.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let schema_id = config.schema;
        let epoch = config.epoch.unwrap_or_else(|| schema_id.default_epoch());
        debug!("configuring calendar {} ({schema_id}) with {:?}", config.id, config.scope);
        let scope: Arc<dyn CalendarScope> = match (schema_id, config.scope) {
            (SchemaId::Gregorian, ScopePolicy::Proleptic) => Arc::new(GregorianProlepticScope::new(epoch)?),
            (SchemaId::Gregorian, ScopePolicy::Standard) => Arc::new(GregorianStandardScope::new(epoch)?),
            (_, ScopePolicy::Proleptic) => Arc::new(ProlepticScope::new(schema_id.schema(), epoch)?),
            (_, ScopePolicy::Standard) => Arc::new(StandardScope::new(schema_id.schema(), epoch)?),
            (_, ScopePolicy::MinMax { min_year, max_year }) => {
                Arc::new(MinMaxYearScope::new(schema_id.schema(), epoch, Range::new(min_year, max_year)?)?)
            }
            (_, ScopePolicy::BoundedBelow { year, month, day, max_year }) => Arc::new(BoundedBelowScope::new(
                schema_id.schema(),
                epoch,
                DateParts::new(year, month, day),
                max_year,
            )?),
        };
        Ok(Self::new(config.id, schema_id, scope))
    }

    pub const fn id(&self) -> CalendarId {
        self.id
    }

    pub const fn schema_id(&self) -> SchemaId {
        self.schema_id
    }

    pub fn scope(&self) -> &Arc<dyn CalendarScope> {
        &self.scope
    }

    pub fn epoch(&self) -> DayNumber {
        self.scope.epoch()
    }

    pub fn domain(&self) -> Range<DayNumber> {
        self.scope.domain()
    }

    /// Arithmetic on the dates of this calendar, with the default rule.
    pub fn arithmetic(&self) -> CalendarArithmetic {
        CalendarArithmetic::new(Arc::clone(&self.scope))
    }

    /// # Errors
    /// Returns a range error naming the invalid component.
    pub fn day_number(&self, year: i32, month: i32, day: i32) -> Result<DayNumber, CalendarError> {
        self.scope.validate_year_month_day(year, month, day)?;
        let days_since_epoch = self.scope.schema().count_days_since_epoch(year, month, day);
        self.scope.to_day_number(days_since_epoch)
    }

    /// # Errors
    /// Returns a range error naming the invalid component.
    pub fn day_number_from_ordinal(&self, year: i32, day_of_year: i32) -> Result<DayNumber, CalendarError> {
        self.scope.validate_ordinal(year, day_of_year)?;
        let days_since_epoch = self.scope.schema().count_days_since_epoch_ordinal(year, day_of_year);
        self.scope.to_day_number(days_since_epoch)
    }

    /// # Errors
    /// Returns a range error if `day_number` is outside the domain.
    pub fn date_parts(&self, day_number: DayNumber) -> Result<DateParts, CalendarError> {
        self.scope.check_day_number(day_number)?;
        let days_since_epoch = self.scope.to_days_since_epoch(day_number)?;
        Ok(self.scope.schema().get_date_parts(days_since_epoch).into())
    }

    /// # Errors
    /// Returns a range error if `day_number` is outside the domain.
    pub fn ordinal_parts(&self, day_number: DayNumber) -> Result<OrdinalParts, CalendarError> {
        self.scope.check_day_number(day_number)?;
        let days_since_epoch = self.scope.to_days_since_epoch(day_number)?;
        Ok(self.scope.schema().get_year(days_since_epoch).into())
    }

    /// Validates a date and packs it with the id of this calendar.
    ///
    /// # Errors
    /// Returns a range error if the date is invalid, and an overflow error
    /// if it does not fit in a [`Yemodax`].
    pub fn pack_date(&self, year: i32, month: i32, day: i32) -> Result<Yemodax, CalendarError> {
        self.scope.validate_year_month_day(year, month, day)?;
        Yemodax::pack(year, month, day, self.id)
    }

    /// # Errors
    /// Returns a range error if the date is invalid, and an overflow error
    /// if it does not fit in a [`Yedoyx`].
    pub fn pack_ordinal(&self, year: i32, day_of_year: i32) -> Result<Yedoyx, CalendarError> {
        self.scope.validate_ordinal(year, day_of_year)?;
        Yedoyx::pack(year, day_of_year, self.id)
    }

    /// The first `day_of_week` strictly after `day_number`.
    ///
    /// # Errors
    /// Returns a range error if `day_number` is outside the domain, and an
    /// overflow error if the result is.
    pub fn next_day_of_week(&self, day_number: DayNumber, day_of_week: DayOfWeek) -> Result<DayNumber, CalendarError> {
        self.scope.check_day_number(day_number)?;
        let next = day_number.next(day_of_week)?;
        self.scope.check_overflow(next)?;
        Ok(next)
    }

    /// The last `day_of_week` strictly before `day_number`.
    ///
    /// # Errors
    /// Returns a range error if `day_number` is outside the domain, and an
    /// overflow error if the result is.
    pub fn previous_day_of_week(
        &self,
        day_number: DayNumber,
        day_of_week: DayOfWeek,
    ) -> Result<DayNumber, CalendarError> {
        self.scope.check_day_number(day_number)?;
        let previous = day_number.previous(day_of_week)?;
        self.scope.check_overflow(previous)?;
        Ok(previous)
    }

    /// Converts a date of this calendar into `other`.
    ///
    /// # Errors
    /// Returns a range error if `date` is not valid here or if the day
    /// falls outside the domain of `other`.
    pub fn convert_to(&self, other: &Self, date: DateParts) -> Result<DateParts, CalendarError> {
        let day_number = self.day_number(date.year, date.month, date.day)?;
        other.date_parts(day_number)
    }
}
