// Service module exports

pub mod calendar;
pub mod clock;
pub mod settings;
pub mod snapshot;
