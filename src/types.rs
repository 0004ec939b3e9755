use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A (year, month, day) triple.
///
/// The year is proleptic and may be zero or negative; month and day are
/// 1-based. Whether a triple denotes an actual date depends on the schema.
/// Triples are ordered lexicographically, which is the chronological order
/// inside any single calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct DateParts {
    pub year:  i32,
    pub month: i32,
    pub day:   i32,
}

impl DateParts {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The first day of `year`.
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1, 1)
    }

    /// Returns the (year, month) part.
    pub const fn month_parts(&self) -> MonthParts {
        MonthParts::new(self.year, self.month)
    }

    pub const fn to_tuple(self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

impl From<(i32, i32, i32)> for DateParts {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

/// A (year, day-of-year) pair; the day of the year is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{day_of_year:03}")]
pub struct OrdinalParts {
    pub year:        i32,
    pub day_of_year: i32,
}

impl OrdinalParts {
    pub const fn new(year: i32, day_of_year: i32) -> Self {
        Self { year, day_of_year }
    }

    /// The first day of `year`.
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1)
    }

    pub const fn to_tuple(self) -> (i32, i32) {
        (self.year, self.day_of_year)
    }
}

impl From<(i32, i32)> for OrdinalParts {
    fn from((year, day_of_year): (i32, i32)) -> Self {
        Self::new(year, day_of_year)
    }
}

/// A (year, month) pair; the month is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}")]
pub struct MonthParts {
    pub year:  i32,
    pub month: i32,
}

impl MonthParts {
    pub const fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// The first month of `year`.
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1)
    }

    pub const fn to_tuple(self) -> (i32, i32) {
        (self.year, self.month)
    }
}

/// Opaque identifier of a calendar, supplied by whatever catalog the caller
/// maintains. Only used as the low-order field of the packed encodings,
/// which hold [`CalendarId::MAX_PACKED`] at most.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarId(u8);

impl CalendarId {
    /// Largest identifier that fits in a packed date.
    pub const MAX_PACKED: u8 = 127;

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}
