mod mapper;
mod service;

pub use mapper::{grid_window, scrollbar_options, time_zone};
pub use service::{load_settings_or_default, SettingsService};
