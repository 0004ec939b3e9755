use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a closed interval `[min, max]`.
/// The lower bound must be less than or equal to the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<T> {
    min: T,
    max: T,
}

/// Error returned when the bounds of a [`Range`] are in the wrong order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid range: min ({min}) is greater than max ({max})")]
pub struct InvalidRangeError {
    min: String,
    max: String,
}

impl<T: Ord + Copy + fmt::Display> Range<T> {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `InvalidRangeError` if min > max.
    pub fn new(min: T, max: T) -> Result<Self, InvalidRangeError> {
        if min > max {
            return Err(InvalidRangeError {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }
}

impl<T: Ord + Copy> Range<T> {
    /// Creates a range whose bounds are known to be in order.
    pub(crate) fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Creates the range containing only `value`.
    pub const fn singleton(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns the lower bound of the range
    pub const fn min(&self) -> T {
        self.min
    }

    /// Returns the upper bound of the range
    pub const fn max(&self) -> T {
        self.max
    }

    /// Returns both bounds as a tuple
    pub const fn endpoints(&self) -> (T, T) {
        (self.min, self.max)
    }

    /// Checks if the range contains a given value
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Checks if this range is completely contained within another range
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.min <= self.min && self.max <= other.max
    }

    /// Returns the values common to both ranges, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(Self { min, max })
    }

    /// Applies `f` to both bounds. `f` must be monotonic.
    pub(crate) fn map<U: Ord + Copy>(self, f: impl Fn(T) -> U) -> Range<U> {
        Range::new_unchecked(f(self.min), f(self.max))
    }
}

impl Range<i32> {
    /// Creates an integer range in a const context.
    pub(crate) const fn of(min: i32, max: i32) -> Self {
        assert!(min <= max);
        Self { min, max }
    }

    /// Number of integers in the range.
    pub const fn count(&self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.min, self.max)
    }
}

impl<'de, T> Deserialize<'de> for Range<T>
where
    T: Deserialize<'de> + Ord + Copy + fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Bounds<T> {
            min: T,
            max: T,
        }

        let bounds = Bounds::<T>::deserialize(deserializer)?;
        Self::new(bounds.min, bounds.max).map_err(serde::de::Error::custom)
    }
}
