use std::sync::Arc;

use super::{AnchoredSegment, CalendarScope, anchored_scope_accessors};
use crate::{
    consts::{MAX_YEAR, PROLEPTIC_MIN_YEAR},
    day_number::DayNumber,
    error::CalendarError,
    range::Range,
    schema::CalendricalSchema,
    segment::CalendricalSegment,
};

/// The years -9998 to 9999, every one of them complete.
///
/// The range is nearly symmetric around year 1, so that year 0 and the
/// negative years of a proleptic calendar can be represented.
#[derive(Debug, Clone)]
pub struct ProlepticScope {
    inner: AnchoredSegment,
}

impl ProlepticScope {
    pub const SUPPORTED_YEARS: Range<i32> = Range::of(PROLEPTIC_MIN_YEAR, MAX_YEAR);

    /// # Errors
    /// Returns a range error if the schema does not support the years
    /// -9998 to 9999, and an overflow error if they cannot be anchored at
    /// `epoch`.
    pub fn new(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber) -> Result<Self, CalendarError> {
        let segment = CalendricalSegment::create(schema, Self::SUPPORTED_YEARS)?;
        debug!("creating a proleptic scope at epoch {epoch}");
        Ok(Self {
            inner: AnchoredSegment::new(epoch, segment)?,
        })
    }
}

impl CalendarScope for ProlepticScope {
    anchored_scope_accessors!();
}
