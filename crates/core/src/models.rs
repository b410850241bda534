pub mod availability;
pub mod booking;
pub mod busy_interval;
pub mod slot;
pub mod working_hours;
