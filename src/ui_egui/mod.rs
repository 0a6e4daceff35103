mod app;
mod calendar_grid;
mod palette;
mod scrollbar;

pub use app::ScheduleApp;
