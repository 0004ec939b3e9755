//! Calendar schemas, supported-range scopes and packed date encodings over a
//! shared day-number timeline.
//!
//! A [`schema`] holds the rules of one calendar and converts between day
//! counts and date parts. A [`segment`] is the range of years, months and
//! days a schema supports under some boundary policy, and a [`scope`]
//! anchors a segment at an epoch; scopes validate dates before anything is
//! converted. [`Calendar`] ties the three together, [`arithmetic`] adds days,
//! months and years, and [`pack`] stores dates in fixed-width integers.
//!
//! ```
//! use calendrical::{Calendar, CalendarId, DateParts};
//!
//! let gregorian = Calendar::gregorian(CalendarId::new(1))?;
//! let julian = Calendar::julian(CalendarId::new(2))?;
//! assert_eq!(julian.convert_to(&gregorian, DateParts::new(1582, 10, 5))?, DateParts::new(1582, 10, 15));
//! # Ok::<(), calendrical::CalendarError>(())
//! ```

#[macro_use]
mod logging;

mod consts;
mod day_number;
mod error;
mod prelude;
mod range;
mod types;

pub mod arithmetic;
pub mod calendar;
pub mod pack;
pub mod schema;
pub mod scope;
pub mod segment;

pub use calendar::{Calendar, CalendarConfig, ScopePolicy};
pub use consts::*;
pub use day_number::{DayNumber, DayOfWeek, epochs};
pub use error::{CalendarError, Component};
pub use range::{InvalidRangeError, Range};
pub use types::{CalendarId, DateParts, MonthParts, OrdinalParts};
