// Calendar service
// Builds grids from settings and a clock

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::calendar_grid::{CalendarGrid, GridWindow, ReferenceTime};
use crate::models::settings::CalendarSettings;
use crate::services::clock::Clock;
use crate::services::settings::grid_window;

pub struct CalendarService {
    settings: CalendarSettings,
    window: GridWindow,
    clock: Box<dyn Clock>,
}

impl CalendarService {
    pub fn new(settings: CalendarSettings, clock: Box<dyn Clock>) -> Result<Self> {
        let window = grid_window(&settings).context("Invalid calendar day window")?;
        Ok(Self {
            settings,
            window,
            clock,
        })
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Grid for the current week, anchored at today's midnight.
    pub fn grid_for_today(&self) -> Result<CalendarGrid> {
        self.grid_for_week(self.today())
    }

    /// Grid for the week containing `date`, anchored at today's midnight.
    pub fn grid_for_week(&self, date: NaiveDate) -> Result<CalendarGrid> {
        let reference = ReferenceTime::start_of(self.today());
        let grid = CalendarGrid::builder(date, reference)
            .header_span(self.settings.header_span)
            .first_day_of_week(self.settings.first_day_of_week)
            .window(self.window)
            .build()
            .with_context(|| format!("Failed to build calendar grid for week of {}", date))?;
        Ok(grid)
    }
}
