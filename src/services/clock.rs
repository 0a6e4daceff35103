//! Wall-clock access for "now"-based defaults.
//!
//! Grids never read the system time themselves; callers pass a [`Clock`] so
//! the current week can be pinned in tests and demos.

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::models::settings::CalendarSettings;
use crate::services::settings::time_zone;

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system time in the local or a configured zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemClock {
    #[default]
    Local,
    Zone(Tz),
}

impl SystemClock {
    pub fn from_settings(settings: &CalendarSettings) -> Result<Self> {
        Ok(time_zone(settings)?.map_or(SystemClock::Local, SystemClock::Zone))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            SystemClock::Local => Local::now().naive_local(),
            SystemClock::Zone(zone) => Utc::now().with_timezone(zone).naive_local(),
        }
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
