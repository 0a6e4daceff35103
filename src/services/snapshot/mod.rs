//! JSON snapshots of a calendar grid for embedders outside Rust.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::calendar_grid::{CalendarGrid, GridCell, TimeSlot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub starting_date: NaiveDate,
    pub reference_time: NaiveDateTime,
    pub header_span: usize,
    pub days: Vec<NaiveDate>,
    pub time_slots: Vec<TimeSlot>,
    pub cells: Vec<Vec<GridCell>>,
    pub value: Option<NaiveDateTime>,
}

impl From<&CalendarGrid> for GridSnapshot {
    fn from(grid: &CalendarGrid) -> Self {
        Self {
            starting_date: grid.starting_date(),
            reference_time: grid.reference_time().anchor(),
            header_span: grid.header_span(),
            days: grid.days(),
            time_slots: grid.time_slots(),
            cells: grid.cells(),
            value: grid.value(),
        }
    }
}

pub fn to_json(grid: &CalendarGrid) -> Result<String> {
    serde_json::to_string_pretty(&GridSnapshot::from(grid)).context("failed to serialize grid snapshot")
}

pub fn save_snapshot(path: &Path, grid: &CalendarGrid) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = to_json(grid)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write grid snapshot to {}", path.display()))?;
    log::info!("Saved grid snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar_grid::ReferenceTime;
    use serde_json::Value;

    fn grid() -> CalendarGrid {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        CalendarGrid::new(date, ReferenceTime::start_of(date)).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let json: Value = serde_json::from_str(&to_json(&grid()).unwrap()).unwrap();
        assert_eq!(json["days"].as_array().unwrap().len(), 7);
        assert_eq!(json["days"][0], "2025-01-13");
        assert_eq!(json["time_slots"][0]["time"], "2025-01-15T07:00:00");
        assert_eq!(json["time_slots"][1]["show_header"], false);
        assert_eq!(json["cells"][1][6]["value"], "2025-01-19T07:30:00");
        assert_eq!(json["cells"][1][6]["offset_minutes"], 450);
        assert!(json["value"].is_null());
    }

    #[test]
    fn test_save_snapshot_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("grid.json");
        let mut grid = grid();
        grid.set_value(grid.cells()[0][0].value);

        save_snapshot(&path, &grid).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["value"], "2025-01-13T07:00:00");
    }
}
