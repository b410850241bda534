//! # FitBook Core
//!
//! Domain types and the availability computation for trainer bookings.
//!
//! Everything in this crate is synchronous and free of I/O. Callers fetch
//! bookings and unavailability blocks elsewhere, normalize them into
//! [`models::busy_interval::BusyInterval`]s and hand that snapshot to
//! [`slots::generate_slots`].

pub mod errors;
pub mod models;
pub mod slots;
