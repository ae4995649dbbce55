//! `Stamp`: a date/time value carrying an optional timezone designator.
//!
//! Deserializers for timezone-aware document formats hand back values whose
//! offset is part of the lexical form. Timezone stripping removes the
//! designator without converting the represented instant: the local
//! date/time components are left exactly as they were read.

use chrono::{FixedOffset, NaiveDateTime};

/// A local date/time plus an optional offset designator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    datetime: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl Stamp {
    /// A stamp with no timezone designator.
    pub fn naive(datetime: NaiveDateTime) -> Self {
        Self {
            datetime,
            offset: None,
        }
    }

    /// A stamp carrying an offset designator.
    pub fn zoned(datetime: NaiveDateTime, offset: FixedOffset) -> Self {
        Self {
            datetime,
            offset: Some(offset),
        }
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn has_timezone(&self) -> bool {
        self.offset.is_some()
    }

    /// Drop the timezone designator. The date and time components are not
    /// converted; only the designator is removed.
    pub fn clear_timezone(&mut self) {
        self.offset = None;
    }
}

#[cfg(test)]
#[path = "../tests/stamp_tests.rs"]
mod tests;
