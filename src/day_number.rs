use serde::{Deserialize, Serialize};

use crate::{
    consts::DAYS_IN_WEEK,
    error::{CalendarError, Component},
    prelude::*,
};

/// A serial day number: the count of consecutive days since Monday,
/// January 1st of year 1 in the proleptic Gregorian calendar (day zero).
///
/// Day numbers are calendar-agnostic: every calendar anchors its own day
/// counts to this timeline through its epoch, which is how dates of
/// different calendars are interconverted. All arithmetic is checked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DayNumber(i32);

impl DayNumber {
    /// Monday, January 1st of year 1 (Gregorian).
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i32::MIN);
    pub const MAX: Self = Self(i32::MAX);

    pub const fn new(days_since_zero: i32) -> Self {
        Self(days_since_zero)
    }

    /// Number of days since [`DayNumber::ZERO`].
    #[inline]
    pub const fn days_since_zero(self) -> i32 {
        self.0
    }

    /// Adds a (possibly negative) number of days.
    ///
    /// # Errors
    /// Returns an overflow error if the result does not fit in an `i32`.
    pub fn add_days(self, days: i32) -> Result<Self, CalendarError> {
        self.0
            .checked_add(days)
            .map(Self)
            .ok_or_else(|| CalendarError::overflow(Component::DayNumber, i64::from(self.0) + i64::from(days)))
    }

    /// Subtracts a (possibly negative) number of days.
    ///
    /// # Errors
    /// Returns an overflow error if the result does not fit in an `i32`.
    pub fn subtract_days(self, days: i32) -> Result<Self, CalendarError> {
        self.0
            .checked_sub(days)
            .map(Self)
            .ok_or_else(|| CalendarError::overflow(Component::DayNumber, i64::from(self.0) - i64::from(days)))
    }

    /// Number of days from `other` to `self`, negative when `self` comes
    /// first.
    ///
    /// # Errors
    /// Returns an overflow error if the difference does not fit in an `i32`.
    pub fn days_since(self, other: Self) -> Result<i32, CalendarError> {
        self.0
            .checked_sub(other.0)
            .ok_or_else(|| CalendarError::overflow(Component::Day, i64::from(self.0) - i64::from(other.0)))
    }

    pub const fn day_of_week(self) -> DayOfWeek {
        // Day zero is a Monday.
        DayOfWeek::from_index((self.0 as i64 + 1).rem_euclid(DAYS_IN_WEEK as i64) as i32)
    }

    /// The nearest day strictly after `self` falling on `day_of_week`.
    ///
    /// # Errors
    /// Returns an overflow error at the end of the timeline.
    pub fn next(self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        let delta = day_of_week.index() - self.day_of_week().index();
        self.add_days(if delta <= 0 { delta + DAYS_IN_WEEK } else { delta })
    }

    /// The nearest day on or after `self` falling on `day_of_week`.
    ///
    /// # Errors
    /// Returns an overflow error at the end of the timeline.
    pub fn next_or_same(self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        let delta = (day_of_week.index() - self.day_of_week().index()).rem_euclid(DAYS_IN_WEEK);
        self.add_days(delta)
    }

    /// The nearest day strictly before `self` falling on `day_of_week`.
    ///
    /// # Errors
    /// Returns an overflow error at the start of the timeline.
    pub fn previous(self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        let delta = self.day_of_week().index() - day_of_week.index();
        self.subtract_days(if delta <= 0 { delta + DAYS_IN_WEEK } else { delta })
    }

    /// The nearest day on or before `self` falling on `day_of_week`.
    ///
    /// # Errors
    /// Returns an overflow error at the start of the timeline.
    pub fn previous_or_same(self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        let delta = (self.day_of_week().index() - day_of_week.index()).rem_euclid(DAYS_IN_WEEK);
        self.subtract_days(delta)
    }

    /// The day falling on `day_of_week` at most three days away from `self`.
    ///
    /// # Errors
    /// Returns an overflow error near either end of the timeline.
    pub fn nearest(self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        let delta = (day_of_week.index() - self.day_of_week().index()).rem_euclid(DAYS_IN_WEEK);
        self.add_days(if delta > 3 { delta - DAYS_IN_WEEK } else { delta })
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Index of the day, Sunday being 0.
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Inverse of [`DayOfWeek::index`]; the index is reduced modulo 7.
    pub const fn from_index(index: i32) -> Self {
        match index.rem_euclid(DAYS_IN_WEEK) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

/// Conventional epochs of the built-in calendars, as day numbers.
pub mod epochs {
    use super::DayNumber;

    /// January 1st, 1 (Gregorian).
    pub const GREGORIAN: DayNumber = DayNumber::ZERO;
    /// January 1st, 1 (Julian) = December 30th, 0 (Gregorian).
    pub const JULIAN: DayNumber = DayNumber::new(-2);
    /// Thout 1st, 1 A.M. = August 29th, 284 (Julian).
    pub const COPTIC: DayNumber = DayNumber::new(103_604);
    /// Era of Nabonassar = February 26th, -746 (Julian).
    pub const EGYPTIAN: DayNumber = DayNumber::new(-272_788);
    /// Muharram 1st, 1 A.H. = July 16th, 622 (Julian).
    pub const TABULAR_ISLAMIC: DayNumber = DayNumber::new(227_014);
    /// Tishri 1st, 1 A.M. = October 7th, -3760 (Julian).
    pub const HEBREW: DayNumber = DayNumber::new(-1_373_428);
    /// January 1st, 1789 (Gregorian).
    pub const POSITIVIST: DayNumber = DayNumber::new(653_054);
    /// The Sunday right before day zero.
    pub const PAX: DayNumber = DayNumber::new(-1);
}
