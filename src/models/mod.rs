// Module exports for models

pub mod calendar_grid;
pub mod schedule_interaction;
pub mod scrollbar;
pub mod settings;
