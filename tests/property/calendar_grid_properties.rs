// Property-based tests for the calendar grid
// Checks the week, slot and cell invariants over random inputs

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use schedule_widgets::models::calendar_grid::{
    compute_days, compute_time_slots, CalendarGrid, GridWindow, ReferenceTime,
};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 .. ~2150
    (0i64..91_000).prop_map(|days| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(days))
}

proptest! {
    /// Property: the days are 7 consecutive dates of the ISO week of the start date
    #[test]
    fn prop_days_span_one_iso_week(date in any_date()) {
        let days = compute_days(date, 1);

        prop_assert_eq!(days.len(), 7);
        prop_assert_eq!(days[0].weekday(), chrono::Weekday::Mon);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        for day in &days {
            prop_assert_eq!(day.iso_week(), date.iso_week());
        }
        prop_assert!(days.contains(&date));
    }

    /// Property: any configured week start still yields a week containing the date
    #[test]
    fn prop_days_contain_start_for_any_week_start(date in any_date(), first in 0u8..7) {
        let days = compute_days(date, first);
        prop_assert_eq!(days.len(), 7);
        prop_assert_eq!(days[0].weekday().num_days_from_sunday(), first as u32);
        prop_assert!(days.contains(&date));
    }

    /// Property: 31 half-hour slots from +7h to +22h
    #[test]
    fn prop_time_slots_window(date in any_date(), hour in 0u32..24, minute in 0u32..60) {
        let reference = ReferenceTime::new(date.and_hms_opt(hour, minute, 0).unwrap());
        let slots = compute_time_slots(reference, &GridWindow::default());

        prop_assert_eq!(slots.len(), 31);
        prop_assert_eq!(slots[0], reference.anchor() + Duration::hours(7));
        prop_assert!(*slots.last().unwrap() <= reference.anchor() + Duration::hours(22));
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::minutes(30));
        }
    }

    /// Property: a cell keeps its slot's offset from the reference on every day
    #[test]
    fn prop_cell_offset_preserved(
        start in any_date(),
        anchor_day in any_date(),
        hour in 0u32..24,
        span in 1usize..6,
    ) {
        let reference = ReferenceTime::new(anchor_day.and_hms_opt(hour, 0, 0).unwrap());
        let grid = CalendarGrid::builder(start, reference)
            .header_span(span)
            .build()
            .unwrap();

        for slot in grid.time_slots() {
            prop_assert_eq!(slot.show_header, slot.index % span == 0);
            for cell in grid.dates(&slot) {
                let day_start = cell.day.and_hms_opt(0, 0, 0).unwrap();
                prop_assert_eq!(cell.value - day_start, slot.time - reference.anchor());
            }
        }
    }
}
