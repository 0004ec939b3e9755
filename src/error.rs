use serde::{Deserialize, Serialize};

use crate::{prelude::*, range::InvalidRangeError};

/// Identifies which part of a date (or of a computation on dates) an error
/// is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "day of year")]
    DayOfYear,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day of week")]
    DayOfWeek,
    #[display(fmt = "days since epoch")]
    DaysSinceEpoch,
    #[display(fmt = "months since epoch")]
    MonthsSinceEpoch,
    #[display(fmt = "day number")]
    DayNumber,
    #[display(fmt = "calendar id")]
    CalendarId,
}

/// An error that can occur in this crate.
///
/// There are three kinds of errors:
///
/// * A range error: one component of a date lies outside the interval
/// accepted by a schema or a scope. The error always says which component.
/// * An overflow error: the inputs were individually valid, but combining
/// them (adding days, anchoring a segment at an epoch, packing a date into
/// a fixed-width integer) produced something that cannot be represented.
/// * An invalid range: the lower bound of a range ended up greater than its
/// upper bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A component is out of range for its domain.
    #[error("{component} = {value} is out of range {min}..={max}")]
    Range {
        component: Component,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A computation produced a value that cannot be represented.
    #[error("{component} = {value} overflows the representable range")]
    Overflow { component: Component, value: i64 },

    /// The bounds of a range are in the wrong order.
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),
}

impl CalendarError {
    /// Creates a range error for `component`.
    pub(crate) fn range(
        component: Component,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::Range {
            component,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Creates an overflow error for `component`.
    pub(crate) fn overflow(component: Component, value: impl Into<i64>) -> Self {
        Self::Overflow {
            component,
            value: value.into(),
        }
    }

    /// Returns true when a value was outside the range accepted by a schema
    /// or a scope, including ranges whose bounds are in the wrong order.
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. } | Self::InvalidRange(_))
    }

    /// Returns true when valid inputs combined into a result that cannot be
    /// represented.
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns the component this error is about, if any.
    pub const fn component(&self) -> Option<Component> {
        match *self {
            Self::Range { component, .. } | Self::Overflow { component, .. } => Some(component),
            Self::InvalidRange(_) => None,
        }
    }
}

/// Fails with a range error unless `min <= value <= max`.
pub(crate) fn check_range(component: Component, value: i32, min: i32, max: i32) -> Result<(), CalendarError> {
    if !(min..=max).contains(&value) {
        return Err(CalendarError::range(component, value, min, max));
    }
    Ok(())
}
