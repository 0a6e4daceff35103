// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday Jan 15, 2025
    pub fn mid_week_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Wednesday Jan 1, 2025; its ISO week starts in 2024
    pub fn new_years_day_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Sunday Mar 30, 2025 (UK clocks go forward)
    pub fn dst_sunday_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 30).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Scrollbar geometry used by the interaction fixtures
pub mod geometry {
    use schedule_widgets::models::scrollbar::{Point, Scrollbar, ScrollbarOptions, Track};

    pub const LEFT: f32 = 8.0;
    pub const TOP: f32 = 8.0;
    pub const HANDLE_OFFSET: f32 = 10.0;
    pub const HANDLE_SIZE: f32 = 40.0;

    /// Handle of 40 at offset 10 in a 50 long track
    pub fn scrollbar(horizontal: bool) -> Scrollbar {
        scrollbar_with(ScrollbarOptions {
            handle_offset: HANDLE_OFFSET,
            handle_size: HANDLE_SIZE,
            horizontal,
            show_handle: true,
            ..ScrollbarOptions::default()
        })
    }

    pub fn scrollbar_with(options: ScrollbarOptions) -> Scrollbar {
        Scrollbar::new(
            options,
            Track {
                origin: Point::new(LEFT, TOP),
                size: 50.0,
                thickness: 10.0,
            },
        )
    }

    /// A point `delta` along the primary axis from the track origin
    pub fn along(horizontal: bool, delta: f32) -> Point {
        if horizontal {
            Point::new(LEFT + delta, TOP + 2.0)
        } else {
            Point::new(LEFT + 2.0, TOP + delta)
        }
    }
}
