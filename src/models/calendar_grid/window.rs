use chrono::Duration;

use super::GridError;

pub const DEFAULT_START_OFFSET_HOURS: u32 = 7;
pub const DEFAULT_END_OFFSET_HOURS: u32 = 22;
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// Daily window of the grid, expressed as offsets from the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWindow {
    start_offset: Duration,
    end_offset: Duration,
    slot_interval: Duration,
}

impl GridWindow {
    pub fn new(
        start_offset: Duration,
        end_offset: Duration,
        slot_interval: Duration,
    ) -> Result<Self, GridError> {
        // Grid times have minute resolution
        if slot_interval < Duration::minutes(1) {
            return Err(GridError::InvalidSlotInterval(slot_interval.num_minutes()));
        }
        if end_offset < start_offset {
            return Err(GridError::InvertedWindow {
                start_minutes: start_offset.num_minutes(),
                end_minutes: end_offset.num_minutes(),
            });
        }

        Ok(Self {
            start_offset,
            end_offset,
            slot_interval,
        })
    }

    /// Window in whole hours with the slot length in minutes, as stored in config files.
    pub fn from_hours(start_hours: u32, end_hours: u32, slot_minutes: u32) -> Result<Self, GridError> {
        Self::new(
            Duration::hours(start_hours as i64),
            Duration::hours(end_hours as i64),
            Duration::minutes(slot_minutes as i64),
        )
    }

    pub fn start_offset(&self) -> Duration {
        self.start_offset
    }

    pub fn end_offset(&self) -> Duration {
        self.end_offset
    }

    pub fn slot_interval(&self) -> Duration {
        self.slot_interval
    }

    /// Number of slots in the inclusive range `start..=end`.
    pub fn slot_count(&self) -> usize {
        let span = (self.end_offset - self.start_offset).num_seconds();
        let step = self.slot_interval.num_seconds().max(1);
        (span / step) as usize + 1
    }
}

impl Default for GridWindow {
    fn default() -> Self {
        Self {
            start_offset: Duration::hours(DEFAULT_START_OFFSET_HOURS as i64),
            end_offset: Duration::hours(DEFAULT_END_OFFSET_HOURS as i64),
            slot_interval: Duration::minutes(DEFAULT_SLOT_MINUTES as i64),
        }
    }
}
