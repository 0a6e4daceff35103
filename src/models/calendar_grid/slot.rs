use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::ReferenceTime;
use crate::utils::date::start_of_day;

/// One row of the grid: a time of day shared by every displayed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub index: usize,
    pub time: NaiveDateTime,
    pub show_header: bool,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// The timestamp a `(day, slot)` pair stands for.
///
/// Built on demand from its inputs and never updated in place, so a cell can
/// not outlive a change to the day, the slot or the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub day: NaiveDate,
    pub slot_index: usize,
    pub offset_minutes: i64,
    pub value: NaiveDateTime,
}

impl GridCell {
    pub fn derive(day: NaiveDate, slot: &TimeSlot, reference: ReferenceTime) -> Self {
        let offset = reference.offset_of(slot.time);
        Self {
            day,
            slot_index: slot.index,
            offset_minutes: offset.num_minutes(),
            value: cell_value(day, slot.time, reference),
        }
    }

    pub fn offset(&self) -> Duration {
        Duration::minutes(self.offset_minutes)
    }
}

/// `day + (slot_time - reference)`.
///
/// Panics if the result leaves chrono's representable range; `CalendarGrid`
/// rejects such inputs when it is built.
pub fn cell_value(day: NaiveDate, slot_time: NaiveDateTime, reference: ReferenceTime) -> NaiveDateTime {
    start_of_day(day) + reference.offset_of(slot_time)
}
