use std::rc::Rc;

use anyhow::Result;
use egui::{Context, Id, Vec2};

use super::calendar_grid::{render_calendar_grid, HEADER_HEIGHT, SLOT_HEIGHT};
use super::palette::{GridPalette, ScrollbarPalette};
use super::scrollbar::{render_scrollbar, EguiCapture};
use crate::models::calendar_grid::CalendarGrid;
use crate::models::schedule_interaction::{InteractionQueue, Navigable, Validatable};
use crate::models::scrollbar::{Orientation, Scrollbar, ScrollbarEvent, Track};
use crate::models::settings::ScrollbarSettings;
use crate::services::calendar::CalendarService;
use crate::services::settings::scrollbar_options;

const SCROLLBAR_THICKNESS: f32 = 12.0;
const MIN_HANDLE_SIZE: f32 = 16.0;
const EVENT_LOG_LEN: usize = 8;

pub struct ScheduleApp {
    service: CalendarService,
    grid: CalendarGrid,
    scrollbar: Scrollbar,
    capture_id: Id,
    queue: InteractionQueue,
    /// Last scrollbar notifications, newest last
    event_log: Vec<String>,
    status: Option<String>,
}

impl ScheduleApp {
    pub fn new(
        service: CalendarService,
        scrollbar_settings: &ScrollbarSettings,
        queue: InteractionQueue,
    ) -> Result<Self> {
        let grid = service.grid_for_today()?;
        let scrollbar = Scrollbar::new(scrollbar_options(scrollbar_settings), Track::default());

        Ok(Self {
            service,
            grid,
            scrollbar,
            capture_id: Id::new("schedule_scrollbar_capture"),
            queue,
            event_log: Vec::new(),
            status: None,
        })
    }

    /// Route scrollbar pointer capture through `ctx`.
    pub fn with_egui_context(mut self, ctx: &Context) -> Self {
        let capture = EguiCapture::new(ctx.clone(), self.capture_id);
        self.scrollbar.set_capture(Rc::new(capture));
        self
    }

    fn render_week_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut shift = None;
            if ui.button("◀ Previous week").clicked() {
                shift = Some(-1);
            }
            if ui.button("Today").clicked() {
                if let Err(err) = self.grid.set_starting_date(self.service.today()) {
                    self.status = Some(err.to_string());
                }
            }
            if ui.button("Next week ▶").clicked() {
                shift = Some(1);
            }
            if let Some(weeks) = shift {
                if let Err(err) = self.grid.shift_weeks(weeks) {
                    self.status = Some(err.to_string());
                }
            }

            let days = self.grid.days();
            if let (Some(first), Some(last)) = (days.first(), days.last()) {
                ui.separator();
                ui.label(format!("{} – {}", first.format("%d %b"), last.format("%d %b %Y")));
            }

            ui.separator();
            ui.label(format!("Header every {} slots", self.grid.header_span()));
            if ui.small_button("−").clicked() {
                self.step_header_span(false);
            }
            if ui.small_button("+").clicked() {
                self.step_header_span(true);
            }
        });
    }

    fn step_header_span(&mut self, grow: bool) {
        let current = self.grid.header_span();
        let span = if grow {
            current.saturating_add(1)
        } else {
            current.saturating_sub(1)
        };
        if let Err(err) = self.grid.set_header_span(span) {
            self.status = Some(err.to_string());
        }
    }

    fn render_interaction_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("To schedule");
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.queue.has_previous(), egui::Button::new("◀"))
                .clicked()
            {
                self.queue.previous();
            }
            if let Some(position) = self.queue.position() {
                ui.label(format!("{} of {}", position + 1, self.queue.len()));
            }
            if ui
                .add_enabled(self.queue.has_next(), egui::Button::new("▶"))
                .clicked()
            {
                self.queue.next();
            }
        });
        ui.separator();

        let Some(current) = self.queue.current_mut() else {
            ui.label("Nothing selected");
            return;
        };

        ui.label(egui::RichText::new(current.title.clone()).strong());
        ui.label("Speak dial-in");
        let dial_in = current.speak_dial_in.get_or_insert_with(String::new);
        ui.text_edit_singleline(dial_in);
        if let Err(message) = current.validate() {
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
        if let Some(at) = current.scheduled_at {
            ui.label(format!("Scheduled {}", at.format("%a %d %b %H:%M")));
        }

        ui.add_space(8.0);
        let selected = self.grid.value();
        let label = match selected {
            Some(value) => format!("Schedule at {}", value.format("%a %H:%M")),
            None => "Pick a slot in the grid".to_string(),
        };
        if ui
            .add_enabled(selected.is_some(), egui::Button::new(label))
            .clicked()
        {
            if let Some(value) = selected {
                self.status = self.queue.schedule_current(value).err();
            }
        }
        if ui.button("Close").clicked() {
            self.queue.close();
        }
    }

    fn render_schedule(&mut self, ui: &mut egui::Ui) {
        let now = self.service.now();
        let grid_palette = GridPalette::from_visuals(ui.visuals());
        let scrollbar_palette = ScrollbarPalette::from_visuals(ui.visuals());

        let height = ui.available_height();
        let visible_rows = (((height - HEADER_HEIGHT) / SLOT_HEIGHT).floor().max(1.0)) as usize;
        let total_rows = self.grid.time_slots().len().max(1);
        let hidden_rows = total_rows.saturating_sub(visible_rows);
        let first_row = (self.scrollbar.drag_fraction() * hidden_rows as f32).round() as usize;
        let rows = first_row..first_row + visible_rows;
        let visible_share = visible_rows.min(total_rows) as f32 / total_rows as f32;

        let grid = &mut self.grid;
        let scrollbar = &mut self.scrollbar;
        let events = match scrollbar.orientation() {
            Orientation::Vertical => {
                ui.horizontal_top(|ui| {
                    let grid_size = Vec2::new(ui.available_width() - SCROLLBAR_THICKNESS - 4.0, height);
                    ui.allocate_ui(grid_size, |ui| {
                        ui.vertical(|ui| render_calendar_grid(ui, grid, rows, now, &grid_palette));
                    });
                    let length = height.max(1.0);
                    scrollbar.set_handle_size((length * visible_share).max(MIN_HANDLE_SIZE));
                    render_scrollbar(ui, scrollbar, length, SCROLLBAR_THICKNESS, &scrollbar_palette)
                })
                .inner
            }
            Orientation::Horizontal => {
                ui.vertical(|ui| {
                    let length = ui.available_width().max(1.0);
                    let grid_size = Vec2::new(length, height - SCROLLBAR_THICKNESS - 4.0);
                    ui.allocate_ui(grid_size, |ui| {
                        ui.vertical(|ui| render_calendar_grid(ui, grid, rows, now, &grid_palette));
                    });
                    scrollbar.set_handle_size((length * visible_share).max(MIN_HANDLE_SIZE));
                    render_scrollbar(ui, scrollbar, length, SCROLLBAR_THICKNESS, &scrollbar_palette)
                })
                .inner
            }
        };

        for event in events {
            self.on_scrollbar_event(event);
        }
    }

    fn on_scrollbar_event(&mut self, event: ScrollbarEvent) {
        if let ScrollbarEvent::JumpTo { towards_anchor } = event {
            let handle = self.scrollbar.handle();
            let page = if towards_anchor { -handle.size } else { handle.size };
            let offset = (handle.offset + page).clamp(0.0, self.scrollbar.max_offset());
            self.scrollbar.set_handle_offset(offset);
        }

        match serde_json::to_string(&event) {
            Ok(line) => self.event_log.push(line),
            Err(err) => log::warn!("Failed to record scrollbar event: {}", err),
        }
        if self.event_log.len() > EVENT_LOG_LEN {
            self.event_log.remove(0);
        }
    }

    fn render_status(&self, ui: &mut egui::Ui, ctx: &Context) {
        ui.horizontal(|ui| {
            let captured = EguiCapture::is_captured(ctx, self.capture_id);
            ui.label(if captured { "Dragging" } else { "Idle" });
            ui.separator();
            ui.label(format!("Scroll {:.0}%", self.scrollbar.drag_fraction() * 100.0));
            if let Some(status) = &self.status {
                ui.separator();
                ui.colored_label(ui.visuals().warn_fg_color, status.as_str());
            }
        });
        for line in self.event_log.iter().rev() {
            ui.monospace(line);
        }
    }
}

impl eframe::App for ScheduleApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("week_nav").show(ctx, |ui| self.render_week_nav(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.render_status(ui, ctx));
        egui::SidePanel::right("interactions")
            .default_width(220.0)
            .show(ctx, |ui| self.render_interaction_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_schedule(ui));

        if ctx.input(|i| !i.focused) {
            if let Some(event) = self.scrollbar.cancel_drag() {
                self.on_scrollbar_event(event);
            }
        }
    }
}
