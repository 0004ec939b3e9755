//! Packed date encodings.
//!
//! Each type stores a date in one `i32` made of non-overlapping bit fields.
//! The year is stored as a signed offset from year 1 in the most
//! significant bits, followed by the zero-based month and day (or day of
//! the year), followed by the calendar id when there is one. Within one
//! calendar, comparing packed values as plain integers therefore compares
//! the dates.
//!
//! The layouts below are version 1 of the format and are stable:
//!
//! | Type      | Fields, most to least significant                      |
//! |-----------|--------------------------------------------------------|
//! | [`Yemoda`]  | year - 1 (22 bits), month - 1 (4), day - 1 (6)               |
//! | [`Yedoy`]   | year - 1 (22 bits), day of year - 1 (10)                     |
//! | [`Yemodax`] | year - 1 (15 bits), month - 1 (4), day - 1 (6), calendar id (7) |
//! | [`Yedoyx`]  | year - 1 (15 bits), day of year - 1 (10), calendar id (7)       |
//!
//! Packing a value that does not fit its field fails with an overflow error;
//! nothing is ever truncated.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CalendarError, Component},
    prelude::*,
    types::{CalendarId, DateParts, OrdinalParts},
};

/// Version of the bit layouts of this module.
pub const FORMAT_VERSION: u32 = 1;

const MONTH_BITS: u32 = 4;
const DAY_BITS: u32 = 6;
const DAY_OF_YEAR_BITS: u32 = 10;
const CALENDAR_ID_BITS: u32 = 7;

const fn mask(bits: u32) -> i32 {
    (1 << bits) - 1
}

/// Stores `year - 1` as a signed field occupying the top `32 - shift` bits.
fn pack_year(year: i32, shift: u32) -> Result<i32, CalendarError> {
    let half = 1_i64 << (31 - shift);
    let y0 = i64::from(year) - 1;
    if !(-half..half).contains(&y0) {
        return Err(CalendarError::overflow(Component::Year, year));
    }
    Ok((y0 as i32) << shift)
}

/// Stores `value - 1` as an unsigned field of `bits` bits at `shift`.
fn pack_field(component: Component, value: i32, bits: u32, shift: u32) -> Result<i32, CalendarError> {
    let v0 = i64::from(value) - 1;
    if !(0..(1_i64 << bits)).contains(&v0) {
        return Err(CalendarError::overflow(component, value));
    }
    Ok((v0 as i32) << shift)
}

fn pack_calendar_id(id: CalendarId) -> Result<i32, CalendarError> {
    if id.get() > CalendarId::MAX_PACKED {
        return Err(CalendarError::overflow(Component::CalendarId, id.get()));
    }
    Ok(i32::from(id.get()))
}

const fn unpack_year(bin: i32, shift: u32) -> i32 {
    (bin >> shift) + 1
}

const fn unpack_field(bin: i32, bits: u32, shift: u32) -> i32 {
    ((bin >> shift) & mask(bits)) + 1
}

/// Year, month and day packed in 32 bits.
///
/// ```
/// use calendrical::pack::Yemoda;
///
/// let ymd = Yemoda::pack(2024, 2, 29)?;
/// assert_eq!(ymd.unpack(), (2024, 2, 29));
/// assert!(ymd < Yemoda::pack(2024, 3, 1)?);
/// # Ok::<(), calendrical::CalendarError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{}", "self.date_parts()")]
#[serde(transparent)]
pub struct Yemoda(i32);

impl Yemoda {
    const DAY_SHIFT: u32 = 0;
    const MONTH_SHIFT: u32 = Self::DAY_SHIFT + DAY_BITS;
    const YEAR_SHIFT: u32 = Self::MONTH_SHIFT + MONTH_BITS;

    pub const MIN_YEAR: i32 = 1 - (1 << (31 - Self::YEAR_SHIFT));
    pub const MAX_YEAR: i32 = 1 << (31 - Self::YEAR_SHIFT);

    /// # Errors
    /// Returns an overflow error naming the component that does not fit.
    pub fn pack(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        Ok(Self(
            pack_year(year, Self::YEAR_SHIFT)?
                | pack_field(Component::Month, month, MONTH_BITS, Self::MONTH_SHIFT)?
                | pack_field(Component::Day, day, DAY_BITS, Self::DAY_SHIFT)?,
        ))
    }

    /// Reinterprets a packed value; every bit pattern decodes.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> i32 {
        self.0
    }

    pub const fn year(self) -> i32 {
        unpack_year(self.0, Self::YEAR_SHIFT)
    }

    pub const fn month(self) -> i32 {
        unpack_field(self.0, MONTH_BITS, Self::MONTH_SHIFT)
    }

    pub const fn day(self) -> i32 {
        unpack_field(self.0, DAY_BITS, Self::DAY_SHIFT)
    }

    pub const fn unpack(self) -> (i32, i32, i32) {
        (self.year(), self.month(), self.day())
    }

    pub const fn date_parts(self) -> DateParts {
        DateParts::new(self.year(), self.month(), self.day())
    }
}

impl TryFrom<DateParts> for Yemoda {
    type Error = CalendarError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::pack(parts.year, parts.month, parts.day)
    }
}

/// Year and day of the year packed in 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{}", "self.ordinal_parts()")]
#[serde(transparent)]
pub struct Yedoy(i32);

impl Yedoy {
    const DAY_OF_YEAR_SHIFT: u32 = 0;
    const YEAR_SHIFT: u32 = Self::DAY_OF_YEAR_SHIFT + DAY_OF_YEAR_BITS;

    pub const MIN_YEAR: i32 = 1 - (1 << (31 - Self::YEAR_SHIFT));
    pub const MAX_YEAR: i32 = 1 << (31 - Self::YEAR_SHIFT);

    /// # Errors
    /// Returns an overflow error naming the component that does not fit.
    pub fn pack(year: i32, day_of_year: i32) -> Result<Self, CalendarError> {
        Ok(Self(
            pack_year(year, Self::YEAR_SHIFT)?
                | pack_field(Component::DayOfYear, day_of_year, DAY_OF_YEAR_BITS, Self::DAY_OF_YEAR_SHIFT)?,
        ))
    }

    /// Reinterprets a packed value; every bit pattern decodes.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> i32 {
        self.0
    }

    pub const fn year(self) -> i32 {
        unpack_year(self.0, Self::YEAR_SHIFT)
    }

    pub const fn day_of_year(self) -> i32 {
        unpack_field(self.0, DAY_OF_YEAR_BITS, Self::DAY_OF_YEAR_SHIFT)
    }

    pub const fn unpack(self) -> (i32, i32) {
        (self.year(), self.day_of_year())
    }

    pub const fn ordinal_parts(self) -> OrdinalParts {
        OrdinalParts::new(self.year(), self.day_of_year())
    }
}

impl TryFrom<OrdinalParts> for Yedoy {
    type Error = CalendarError;

    fn try_from(parts: OrdinalParts) -> Result<Self, Self::Error> {
        Self::pack(parts.year, parts.day_of_year)
    }
}

/// Year, month, day and calendar id packed in 32 bits.
///
/// Values of different calendars do not compare meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{} ({})", "self.date_parts()", "self.calendar_id()")]
#[serde(transparent)]
pub struct Yemodax(i32);

impl Yemodax {
    const CALENDAR_ID_SHIFT: u32 = 0;
    const DAY_SHIFT: u32 = Self::CALENDAR_ID_SHIFT + CALENDAR_ID_BITS;
    const MONTH_SHIFT: u32 = Self::DAY_SHIFT + DAY_BITS;
    const YEAR_SHIFT: u32 = Self::MONTH_SHIFT + MONTH_BITS;

    pub const MIN_YEAR: i32 = 1 - (1 << (31 - Self::YEAR_SHIFT));
    pub const MAX_YEAR: i32 = 1 << (31 - Self::YEAR_SHIFT);

    /// # Errors
    /// Returns an overflow error naming the component that does not fit.
    pub fn pack(year: i32, month: i32, day: i32, id: CalendarId) -> Result<Self, CalendarError> {
        Ok(Self(
            pack_year(year, Self::YEAR_SHIFT)?
                | pack_field(Component::Month, month, MONTH_BITS, Self::MONTH_SHIFT)?
                | pack_field(Component::Day, day, DAY_BITS, Self::DAY_SHIFT)?
                | pack_calendar_id(id)?,
        ))
    }

    /// Reinterprets a packed value; every bit pattern decodes.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> i32 {
        self.0
    }

    pub const fn year(self) -> i32 {
        unpack_year(self.0, Self::YEAR_SHIFT)
    }

    pub const fn month(self) -> i32 {
        unpack_field(self.0, MONTH_BITS, Self::MONTH_SHIFT)
    }

    pub const fn day(self) -> i32 {
        unpack_field(self.0, DAY_BITS, Self::DAY_SHIFT)
    }

    pub const fn calendar_id(self) -> CalendarId {
        CalendarId::new((self.0 & mask(CALENDAR_ID_BITS)) as u8)
    }

    pub const fn unpack(self) -> (i32, i32, i32, CalendarId) {
        (self.year(), self.month(), self.day(), self.calendar_id())
    }

    pub const fn date_parts(self) -> DateParts {
        DateParts::new(self.year(), self.month(), self.day())
    }
}

/// Year, day of the year and calendar id packed in 32 bits.
///
/// Values of different calendars do not compare meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{} ({})", "self.ordinal_parts()", "self.calendar_id()")]
#[serde(transparent)]
pub struct Yedoyx(i32);

impl Yedoyx {
    const CALENDAR_ID_SHIFT: u32 = 0;
    const DAY_OF_YEAR_SHIFT: u32 = Self::CALENDAR_ID_SHIFT + CALENDAR_ID_BITS;
    const YEAR_SHIFT: u32 = Self::DAY_OF_YEAR_SHIFT + DAY_OF_YEAR_BITS;

    pub const MIN_YEAR: i32 = 1 - (1 << (31 - Self::YEAR_SHIFT));
    pub const MAX_YEAR: i32 = 1 << (31 - Self::YEAR_SHIFT);

    /// # Errors
    /// Returns an overflow error naming the component that does not fit.
    pub fn pack(year: i32, day_of_year: i32, id: CalendarId) -> Result<Self, CalendarError> {
        Ok(Self(
            pack_year(year, Self::YEAR_SHIFT)?
                | pack_field(Component::DayOfYear, day_of_year, DAY_OF_YEAR_BITS, Self::DAY_OF_YEAR_SHIFT)?
                | pack_calendar_id(id)?,
        ))
    }

    /// Reinterprets a packed value; every bit pattern decodes.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> i32 {
        self.0
    }

    pub const fn year(self) -> i32 {
        unpack_year(self.0, Self::YEAR_SHIFT)
    }

    pub const fn day_of_year(self) -> i32 {
        unpack_field(self.0, DAY_OF_YEAR_BITS, Self::DAY_OF_YEAR_SHIFT)
    }

    pub const fn calendar_id(self) -> CalendarId {
        CalendarId::new((self.0 & mask(CALENDAR_ID_BITS)) as u8)
    }

    pub const fn unpack(self) -> (i32, i32, CalendarId) {
        (self.year(), self.day_of_year(), self.calendar_id())
    }

    pub const fn ordinal_parts(self) -> OrdinalParts {
        OrdinalParts::new(self.year(), self.day_of_year())
    }
}
