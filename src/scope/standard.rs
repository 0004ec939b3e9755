use std::sync::Arc;

use super::{AnchoredSegment, CalendarScope, anchored_scope_accessors};
use crate::{
    consts::{MAX_YEAR, STANDARD_MIN_YEAR},
    day_number::DayNumber,
    error::CalendarError,
    range::Range,
    schema::CalendricalSchema,
    segment::CalendricalSegment,
};

/// The years 1 to 9999, every one of them complete.
#[derive(Debug, Clone)]
pub struct StandardScope {
    inner: AnchoredSegment,
}

impl StandardScope {
    pub const SUPPORTED_YEARS: Range<i32> = Range::of(STANDARD_MIN_YEAR, MAX_YEAR);

    /// # Errors
    /// Returns a range error if the schema does not support the years 1 to
    /// 9999, and an overflow error if they cannot be anchored at `epoch`.
    pub fn new(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber) -> Result<Self, CalendarError> {
        let segment = CalendricalSegment::create(schema, Self::SUPPORTED_YEARS)?;
        debug!("creating a standard scope at epoch {epoch}");
        Ok(Self {
            inner: AnchoredSegment::new(epoch, segment)?,
        })
    }
}

impl CalendarScope for StandardScope {
    anchored_scope_accessors!();
}
