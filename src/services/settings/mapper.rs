use anyhow::{anyhow, Result};
use chrono_tz::Tz;

use crate::models::calendar_grid::{GridError, GridWindow};
use crate::models::scrollbar::ScrollbarOptions;
use crate::models::settings::{CalendarSettings, ScrollbarSettings};

pub fn grid_window(settings: &CalendarSettings) -> Result<GridWindow, GridError> {
    GridWindow::from_hours(
        settings.day_start_offset_hours,
        settings.day_end_offset_hours,
        settings.slot_minutes,
    )
}

pub fn time_zone(settings: &CalendarSettings) -> Result<Option<Tz>> {
    settings
        .timezone
        .as_deref()
        .map(|zone| {
            zone.parse::<Tz>()
                .map_err(|err| anyhow!("Unknown time zone '{}': {}", zone, err))
        })
        .transpose()
}

pub fn scrollbar_options(settings: &ScrollbarSettings) -> ScrollbarOptions {
    ScrollbarOptions {
        handle_size: settings.handle_size,
        horizontal: settings.horizontal,
        show_handle: settings.show_handle,
        ..ScrollbarOptions::default()
    }
}
