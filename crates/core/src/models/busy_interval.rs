use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::booking::{Booking, UnavailabilityBlock};

/// Time during which a trainer cannot take a new booking.
///
/// Both confirmed bookings and manually declared unavailability blocks are
/// reduced to this shape before slot generation; the generator never needs to
/// know which one it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    /// Inclusive.
    pub start_time: DateTime<Utc>,
    /// Exclusive.
    pub end_time: DateTime<Utc>,
}

impl BusyInterval {
    pub const fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Strict half-open overlap with `[start, end)`. Touching intervals do not
    /// overlap.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end_time && end > self.start_time
    }
}

impl From<&Booking> for BusyInterval {
    fn from(booking: &Booking) -> Self {
        Self::new(booking.start_time, booking.end_time)
    }
}

impl From<&UnavailabilityBlock> for BusyInterval {
    fn from(block: &UnavailabilityBlock) -> Self {
        Self::new(block.start_time, block.end_time)
    }
}

/// Merges both busy sources into one list for the slot generator.
///
/// Bookings that no longer hold the trainer's time (cancelled or rejected) are
/// dropped. Overlapping or duplicate entries are kept as they are.
pub fn busy_intervals(
    bookings: &[Booking],
    blocks: &[UnavailabilityBlock],
) -> Vec<BusyInterval> {
    bookings
        .iter()
        .filter(|booking| booking.status.occupies_trainer())
        .map(BusyInterval::from)
        .chain(blocks.iter().map(BusyInterval::from))
        .collect()
}
