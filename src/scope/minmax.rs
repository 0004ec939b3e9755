use std::sync::Arc;

use super::{AnchoredSegment, CalendarScope, anchored_scope_accessors};
use crate::{
    day_number::DayNumber,
    error::CalendarError,
    range::Range,
    schema::CalendricalSchema,
    segment::{CalendricalSegment, SegmentBuilder},
};

/// Whole years between two caller-supplied bounds.
#[derive(Debug, Clone)]
pub struct MinMaxYearScope {
    inner: AnchoredSegment,
}

impl MinMaxYearScope {
    /// # Errors
    /// Returns a range error if the schema does not support one of the
    /// years, and an overflow error if they cannot be anchored at `epoch`.
    pub fn new(
        schema: Arc<dyn CalendricalSchema>,
        epoch: DayNumber,
        supported_years: Range<i32>,
    ) -> Result<Self, CalendarError> {
        let segment = CalendricalSegment::create(schema, supported_years)?;
        debug!("creating a scope for the years {supported_years} at epoch {epoch}");
        Ok(Self::from_anchored(AnchoredSegment::new(epoch, segment)?))
    }

    /// Every year supported by the schema.
    ///
    /// # Errors
    /// Returns an overflow error if the extreme years cannot be represented
    /// once anchored at `epoch`.
    pub fn maximal(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber) -> Result<Self, CalendarError> {
        let segment = CalendricalSegment::create_maximal(schema)?;
        debug!("creating a maximal scope at epoch {epoch}");
        Ok(Self::from_anchored(AnchoredSegment::new(epoch, segment)?))
    }

    /// Every year supported by the schema from year 1 on.
    ///
    /// # Errors
    /// Returns a range error if the schema supports no year from 1 on, and
    /// an overflow error if the years cannot be anchored at `epoch`.
    pub fn on_or_after_epoch(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber) -> Result<Self, CalendarError> {
        let segment = SegmentBuilder::new(schema).use_full_range_on_or_after_epoch()?.build()?;
        debug!("creating a scope starting at year 1, epoch {epoch}");
        Ok(Self::from_anchored(AnchoredSegment::new(epoch, segment)?))
    }

    pub(crate) fn from_anchored(inner: AnchoredSegment) -> Self {
        debug_assert!(inner.segment().is_complete());
        Self { inner }
    }
}

impl CalendarScope for MinMaxYearScope {
    anchored_scope_accessors!();
}
