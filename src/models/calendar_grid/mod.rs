// Calendar grid module
// Week × time-slot grid with per-cell timestamps derived from offsets

mod slot;
mod window;

use std::num::NonZeroUsize;

use chrono::{Days, Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::utils::date::{checked_week_start, start_of_day, truncate_to_minute, week_start};

pub use slot::{cell_value, GridCell, TimeSlot};
pub use window::{
    GridWindow, DEFAULT_END_OFFSET_HOURS, DEFAULT_SLOT_MINUTES, DEFAULT_START_OFFSET_HOURS,
};

pub const DAYS_PER_WEEK: usize = 7;
pub const DEFAULT_HEADER_SPAN: usize = 2;
/// ISO weeks start on Monday.
pub const DEFAULT_FIRST_DAY_OF_WEEK: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("header span must be at least 1")]
    ZeroHeaderSpan,
    #[error("slot interval must be at least one minute, got {0} minutes")]
    InvalidSlotInterval(i64),
    #[error("day window ends at +{end_minutes}m before it starts at +{start_minutes}m")]
    InvertedWindow { start_minutes: i64, end_minutes: i64 },
    #[error("week of {0} falls outside the supported date range")]
    DateOutOfRange(NaiveDate),
    #[error("reference time {0} leaves no room for the day window")]
    ReferenceOutOfRange(NaiveDateTime),
}

/// Anchor that every slot offset is measured from. Minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceTime(NaiveDateTime);

impl ReferenceTime {
    pub fn new(anchor: NaiveDateTime) -> Self {
        Self(truncate_to_minute(anchor))
    }

    /// Midnight of `date`.
    pub fn start_of(date: NaiveDate) -> Self {
        Self(start_of_day(date))
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.0
    }

    pub fn offset_of(&self, time: NaiveDateTime) -> Duration {
        time - self.0
    }
}

/// The 7 dates of the week containing `starting_date`, in order.
pub fn compute_days(starting_date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    week_start(starting_date, first_day_of_week)
        .iter_days()
        .take(DAYS_PER_WEEK)
        .collect()
}

/// Slot times from `reference + start_offset` up to and including `reference + end_offset`.
pub fn compute_time_slots(reference: ReferenceTime, window: &GridWindow) -> Vec<NaiveDateTime> {
    let Some(start) = reference.anchor().checked_add_signed(window.start_offset()) else {
        return Vec::new();
    };
    let Some(end) = reference.anchor().checked_add_signed(window.end_offset()) else {
        return Vec::new();
    };

    let mut slots = Vec::with_capacity(window.slot_count());
    let mut current = start;
    while current <= end {
        slots.push(current);
        match current.checked_add_signed(window.slot_interval()) {
            Some(next) => current = next,
            None => break,
        }
    }
    slots
}

/// Every `header_span`-th slot, starting with the first, carries a header.
pub fn show_header(index: usize, header_span: NonZeroUsize) -> bool {
    index % header_span.get() == 0
}

/// Days × time-slots grid for one week.
///
/// Only the inputs are stored. Days, slots and cells are recomputed on every
/// call so a changed input is visible immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    starting_date: NaiveDate,
    reference_time: ReferenceTime,
    header_span: NonZeroUsize,
    first_day_of_week: u8,
    window: GridWindow,
    value: Option<NaiveDateTime>,
}

impl CalendarGrid {
    /// Create a grid with the default header span, week start and window.
    ///
    /// # Examples
    /// ```
    /// use schedule_widgets::models::calendar_grid::{CalendarGrid, ReferenceTime};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    /// let grid = CalendarGrid::new(today, ReferenceTime::start_of(today)).unwrap();
    /// assert_eq!(grid.days().len(), 7);
    /// assert_eq!(grid.time_slots().len(), 31);
    /// ```
    pub fn new(starting_date: NaiveDate, reference_time: ReferenceTime) -> Result<Self, GridError> {
        Self::builder(starting_date, reference_time).build()
    }

    pub fn builder(starting_date: NaiveDate, reference_time: ReferenceTime) -> CalendarGridBuilder {
        CalendarGridBuilder::new(starting_date, reference_time)
    }

    pub fn starting_date(&self) -> NaiveDate {
        self.starting_date
    }

    pub fn reference_time(&self) -> ReferenceTime {
        self.reference_time
    }

    pub fn header_span(&self) -> usize {
        self.header_span.get()
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    pub fn window(&self) -> &GridWindow {
        &self.window
    }

    pub fn set_starting_date(&mut self, starting_date: NaiveDate) -> Result<(), GridError> {
        validate(starting_date, self.first_day_of_week, self.reference_time, &self.window)?;
        self.starting_date = starting_date;
        Ok(())
    }

    pub fn set_reference_time(&mut self, reference_time: ReferenceTime) -> Result<(), GridError> {
        validate(self.starting_date, self.first_day_of_week, reference_time, &self.window)?;
        self.reference_time = reference_time;
        Ok(())
    }

    pub fn set_header_span(&mut self, header_span: usize) -> Result<(), GridError> {
        self.header_span = NonZeroUsize::new(header_span).ok_or(GridError::ZeroHeaderSpan)?;
        Ok(())
    }

    /// Move the grid by whole weeks; negative values go back.
    pub fn shift_weeks(&mut self, weeks: i64) -> Result<(), GridError> {
        let target = self
            .starting_date
            .checked_add_signed(Duration::weeks(weeks))
            .ok_or(GridError::DateOutOfRange(self.starting_date))?;
        self.set_starting_date(target)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        compute_days(self.starting_date, self.first_day_of_week)
    }

    pub fn starting_time(&self) -> NaiveDateTime {
        self.reference_time.anchor() + self.window.start_offset()
    }

    pub fn ending_time(&self) -> NaiveDateTime {
        self.reference_time.anchor() + self.window.end_offset()
    }

    pub fn time_slots(&self) -> Vec<TimeSlot> {
        compute_time_slots(self.reference_time, &self.window)
            .into_iter()
            .enumerate()
            .map(|(index, time)| TimeSlot {
                index,
                time,
                show_header: show_header(index, self.header_span),
            })
            .collect()
    }

    pub fn show_header(&self, slot: &TimeSlot) -> bool {
        show_header(slot.index, self.header_span)
    }

    pub fn cell_value(&self, day: NaiveDate, slot: &TimeSlot) -> NaiveDateTime {
        cell_value(day, slot.time, self.reference_time)
    }

    pub fn cell(&self, day: NaiveDate, slot: &TimeSlot) -> GridCell {
        GridCell::derive(day, slot, self.reference_time)
    }

    /// One row of the grid: the cells of `slot` for every displayed day.
    pub fn dates(&self, slot: &TimeSlot) -> Vec<GridCell> {
        self.days()
            .into_iter()
            .map(|day| self.cell(day, slot))
            .collect()
    }

    /// All rows, slot-major.
    pub fn cells(&self) -> Vec<Vec<GridCell>> {
        let days = self.days();
        self.time_slots()
            .iter()
            .map(|slot| days.iter().map(|day| self.cell(*day, slot)).collect())
            .collect()
    }

    /// Store the value of a selected cell for the caller to read back.
    pub fn set_value(&mut self, value: NaiveDateTime) {
        log::debug!("Calendar grid value set to {}", value);
        self.value = Some(value);
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }
}

/// Builder for grids with non-default settings
pub struct CalendarGridBuilder {
    starting_date: NaiveDate,
    reference_time: ReferenceTime,
    header_span: usize,
    first_day_of_week: u8,
    window: GridWindow,
}

impl CalendarGridBuilder {
    pub fn new(starting_date: NaiveDate, reference_time: ReferenceTime) -> Self {
        Self {
            starting_date,
            reference_time,
            header_span: DEFAULT_HEADER_SPAN,
            first_day_of_week: DEFAULT_FIRST_DAY_OF_WEEK,
            window: GridWindow::default(),
        }
    }

    pub fn header_span(mut self, header_span: usize) -> Self {
        self.header_span = header_span;
        self
    }

    pub fn first_day_of_week(mut self, first_day_of_week: u8) -> Self {
        self.first_day_of_week = first_day_of_week % 7;
        self
    }

    pub fn window(mut self, window: GridWindow) -> Self {
        self.window = window;
        self
    }

    pub fn build(self) -> Result<CalendarGrid, GridError> {
        let header_span = NonZeroUsize::new(self.header_span).ok_or(GridError::ZeroHeaderSpan)?;
        validate(
            self.starting_date,
            self.first_day_of_week,
            self.reference_time,
            &self.window,
        )?;

        log::debug!(
            "Built calendar grid: week of {}, reference {}, header span {}",
            self.starting_date,
            self.reference_time.anchor(),
            header_span
        );

        Ok(CalendarGrid {
            starting_date: self.starting_date,
            reference_time: self.reference_time,
            header_span,
            first_day_of_week: self.first_day_of_week,
            window: self.window,
            value: None,
        })
    }
}

/// Reject inputs whose days, slots or cells chrono cannot represent.
fn validate(
    starting_date: NaiveDate,
    first_day_of_week: u8,
    reference: ReferenceTime,
    window: &GridWindow,
) -> Result<(), GridError> {
    let out_of_range = GridError::DateOutOfRange(starting_date);
    let first = checked_week_start(starting_date, first_day_of_week).ok_or(out_of_range.clone())?;
    let last = first
        .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))
        .ok_or(out_of_range.clone())?;

    reference
        .anchor()
        .checked_add_signed(window.start_offset())
        .and_then(|_| reference.anchor().checked_add_signed(window.end_offset()))
        .ok_or(GridError::ReferenceOutOfRange(reference.anchor()))?;

    start_of_day(first)
        .checked_add_signed(window.start_offset())
        .and_then(|_| start_of_day(last).checked_add_signed(window.end_offset()))
        .ok_or(out_of_range)?;

    Ok(())
}
