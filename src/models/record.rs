use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// One validated "employee worked on project during interval" row.
///
/// Only the record parser builds these, so `date_from <= date_to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkRecord {
    employee_id: u32,
    project_id: u32,
    date_from: NaiveDateTime,
    date_to: NaiveDateTime,
}

impl WorkRecord {
    pub(crate) fn new(
        employee_id: u32,
        project_id: u32,
        date_from: NaiveDateTime,
        date_to: NaiveDateTime,
    ) -> Self {
        debug_assert!(date_from <= date_to);
        Self {
            employee_id,
            project_id,
            date_from,
            date_to,
        }
    }

    pub fn employee_id(&self) -> u32 {
        self.employee_id
    }

    pub fn project_id(&self) -> u32 {
        self.project_id
    }

    pub fn date_from(&self) -> NaiveDateTime {
        self.date_from
    }

    pub fn date_to(&self) -> NaiveDateTime {
        self.date_to
    }

    /// Strict overlap: intervals that only touch at a boundary do not count.
    pub fn overlaps(&self, other: &WorkRecord) -> bool {
        self.date_from < other.date_to && self.date_to > other.date_from
    }

    /// Length of the common part of both intervals, if it is positive.
    pub fn intersection(&self, other: &WorkRecord) -> Option<Duration> {
        if !self.overlaps(other) {
            return None;
        }

        let start = self.date_from.max(other.date_from);
        let end = self.date_to.min(other.date_to);

        Some(end - start)
    }
}
