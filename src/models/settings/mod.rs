// Settings module
// User-editable widget configuration, persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::calendar_grid::{
    DEFAULT_END_OFFSET_HOURS, DEFAULT_FIRST_DAY_OF_WEEK, DEFAULT_HEADER_SPAN,
    DEFAULT_SLOT_MINUTES, DEFAULT_START_OFFSET_HOURS,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub calendar: CalendarSettings,
    pub scrollbar: ScrollbarSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub header_span: usize,
    pub day_start_offset_hours: u32,
    pub day_end_offset_hours: u32,
    pub slot_minutes: u32,
    /// IANA zone name; local time when absent
    pub timezone: Option<String>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: DEFAULT_FIRST_DAY_OF_WEEK,
            header_span: DEFAULT_HEADER_SPAN,
            day_start_offset_hours: DEFAULT_START_OFFSET_HOURS,
            day_end_offset_hours: DEFAULT_END_OFFSET_HOURS,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            timezone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarSettings {
    pub horizontal: bool,
    pub handle_size: f32,
    pub show_handle: bool,
}

impl Default for ScrollbarSettings {
    fn default() -> Self {
        Self {
            horizontal: false,
            handle_size: 40.0,
            show_handle: true,
        }
    }
}

impl Settings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        self.calendar.validate()?;
        self.scrollbar.validate()
    }
}

impl CalendarSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if self.header_span == 0 {
            return Err("header_span must be at least 1".to_string());
        }

        if self.slot_minutes == 0 {
            return Err("slot_minutes must be positive".to_string());
        }

        if self.day_end_offset_hours < self.day_start_offset_hours {
            return Err(format!(
                "day_end_offset_hours ({}) must not be before day_start_offset_hours ({})",
                self.day_end_offset_hours, self.day_start_offset_hours
            ));
        }

        if let Some(ref zone) = self.timezone {
            zone.parse::<chrono_tz::Tz>()
                .map_err(|err| format!("Unknown time zone '{}': {}", zone, err))?;
        }

        Ok(())
    }
}

impl ScrollbarSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.handle_size.is_finite() || self.handle_size < 0.0 {
            return Err(format!(
                "handle_size must be a non-negative number, got {}",
                self.handle_size
            ));
        }
        Ok(())
    }
}
