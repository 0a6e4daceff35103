// Schedule Widgets demo
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use schedule_widgets::models::schedule_interaction::{InteractionQueue, ScheduleInteraction};
use schedule_widgets::services::calendar::CalendarService;
use schedule_widgets::services::clock::SystemClock;
use schedule_widgets::services::settings::{load_settings_or_default, SettingsService};
use schedule_widgets::services::snapshot::save_snapshot;
use schedule_widgets::ui_egui::ScheduleApp;

const CONFIG_ENV: &str = "SCHEDULE_WIDGETS_CONFIG";

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Schedule Widgets");

    let settings_service = match std::env::var_os(CONFIG_ENV) {
        Some(path) => Some(SettingsService::new(PathBuf::from(path))),
        None => SettingsService::from_project_dirs(),
    };
    let settings = settings_service
        .as_ref()
        .map(load_settings_or_default)
        .unwrap_or_default();

    let clock = SystemClock::from_settings(&settings.calendar).unwrap_or_else(|e| {
        log::warn!("{:#}, falling back to local time", e);
        SystemClock::Local
    });
    let service = CalendarService::new(settings.calendar.clone(), Box::new(clock))?;

    // `--snapshot <path>` writes the current week as JSON instead of opening a window
    let mut args = std::env::args().skip(1);
    if let Some(flag) = args.next() {
        if flag != "--snapshot" {
            return Err(anyhow!("unknown argument '{}'", flag));
        }
        let path = args
            .next()
            .ok_or_else(|| anyhow!("--snapshot needs an output path"))?;
        return save_snapshot(&PathBuf::from(path), &service.grid_for_today()?);
    }

    let app = ScheduleApp::new(service, &settings.scrollbar, demo_queue())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Schedule Widgets",
        options,
        Box::new(move |cc| Ok(Box::new(app.with_egui_context(&cc.egui_ctx)))),
    )
    .map_err(|e| anyhow!("failed to run window: {}", e))
}

fn demo_queue() -> InteractionQueue {
    InteractionQueue::new(vec![
        ScheduleInteraction::new(1, "Kick-off with Acme").with_dial_in("+1 555 0100"),
        ScheduleInteraction::new(2, "Quarterly review"),
        ScheduleInteraction::new(3, "Vendor follow-up").with_dial_in("+44 20 7946 0000"),
    ])
}
