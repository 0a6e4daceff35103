//! Calendar grid rendering.
//!
//! Draws a day header row and one row per visible time slot. Clicking a cell
//! stores its value on the grid.

use std::ops::Range;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::GridPalette;
use crate::models::calendar_grid::CalendarGrid;
use crate::utils::date::is_same_day;

pub const TIME_LABEL_WIDTH: f32 = 50.0;
pub const SLOT_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 28.0;
pub const COLUMN_SPACING: f32 = 1.0;

/// Render the rows of `grid` in `rows` and return the value of a clicked cell.
pub fn render_calendar_grid(
    ui: &mut egui::Ui,
    grid: &mut CalendarGrid,
    rows: Range<usize>,
    now: NaiveDateTime,
    palette: &GridPalette,
) -> Option<NaiveDateTime> {
    let days = grid.days();
    let slots = grid.time_slots();
    let selected = grid.value();
    let mut clicked = None;

    if days.is_empty() {
        return None;
    }

    let col_width = ((ui.available_width() - TIME_LABEL_WIDTH) / days.len() as f32
        - COLUMN_SPACING)
        .max(20.0);

    ui.spacing_mut().item_spacing = Vec2::ZERO;

    ui.horizontal(|ui| {
        ui.add_space(TIME_LABEL_WIDTH);
        for day in &days {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(col_width, HEADER_HEIGHT), Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, palette.header_bg);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                day.format("%a %d/%m").to_string(),
                FontId::proportional(12.0),
                if *day == now.date() { palette.text } else { palette.weak_text },
            );
            ui.add_space(COLUMN_SPACING);
        }
    });

    let end = rows.end.min(slots.len());
    let start = rows.start.min(end);
    for slot in &slots[start..end] {
        ui.horizontal(|ui| {
            let (label_rect, _) =
                ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT), Sense::hover());
            if slot.show_header {
                ui.painter().text(
                    Pos2::new(label_rect.right() - 5.0, label_rect.center().y),
                    Align2::RIGHT_CENTER,
                    slot.label(),
                    FontId::proportional(12.0),
                    palette.weak_text,
                );
            }

            for day in &days {
                let cell = grid.cell(*day, slot);
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(col_width, SLOT_HEIGHT), Sense::click());

                let bg = if selected == Some(cell.value) {
                    palette.selected_bg
                } else if is_same_day(cell.value, now) {
                    palette.today_bg
                } else if is_weekend(*day) {
                    palette.weekend_bg
                } else {
                    palette.regular_bg
                };
                paint_cell(ui, rect, bg, slot.show_header, palette);

                if response.hovered() {
                    ui.painter().rect_filled(rect, 0.0, palette.hover_overlay);
                }

                let response =
                    response.on_hover_text(cell.value.format("%A %d %B, %H:%M").to_string());
                if response.clicked() {
                    clicked = Some(cell.value);
                }

                ui.add_space(COLUMN_SPACING);
            }
        });
    }

    if let Some(value) = clicked {
        grid.set_value(value);
    }
    clicked
}

fn paint_cell(ui: &egui::Ui, rect: Rect, bg: egui::Color32, header_row: bool, palette: &GridPalette) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, bg);
    let line = if header_row {
        palette.header_line
    } else {
        palette.slot_line
    };
    painter.line_segment([rect.left_top(), rect.right_top()], Stroke::new(1.0, line));
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}
