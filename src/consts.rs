/// Years supported by every built-in schema (inclusive).
///
/// Day counts for these years fit comfortably in an `i32`, whatever the
/// schema.
pub const MIN_SUPPORTED_YEAR: i32 = -999_998;
/// See [`MIN_SUPPORTED_YEAR`].
pub const MAX_SUPPORTED_YEAR: i32 = 999_999;

/// First year of a proleptic scope.
pub const PROLEPTIC_MIN_YEAR: i32 = -9998;
/// First year of a standard scope.
pub const STANDARD_MIN_YEAR: i32 = 1;
/// Last year of both the proleptic and the standard scopes.
pub const MAX_YEAR: i32 = 9999;

/// Number of days in a week.
pub const DAYS_IN_WEEK: i32 = 7;

/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Maximum days in each month of the Gregorian-shaped calendars (index 0 is
/// unused, months are 1-indexed). February shows 28 days.
pub const DAYS_IN_MONTH: [i32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a common 365-day year.
pub(crate) const DAYS_IN_COMMON_YEAR: i32 = 365;
/// Days in four Julian years.
pub(crate) const DAYS_IN_4_YEAR_CYCLE: i32 = 4 * DAYS_IN_COMMON_YEAR + 1;
/// Days in 400 Gregorian years.
pub(crate) const DAYS_IN_400_YEAR_CYCLE: i32 = 146_097;
