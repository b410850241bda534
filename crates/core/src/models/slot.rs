use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_available: bool,
}

/// Outcome of checking a requested booking start against generated slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCheck {
    /// A slot starts at the requested time and is free.
    Available(Slot),
    /// A slot starts at the requested time but overlaps a busy interval.
    Blocked(Slot),
    /// No slot starts at the requested time: off the step lattice, outside
    /// working hours, or already in the past.
    NotOffered,
}

impl SlotCheck {
    pub fn is_bookable(&self) -> bool {
        matches!(self, SlotCheck::Available(_))
    }

    pub fn slot(&self) -> Option<&Slot> {
        match self {
            SlotCheck::Available(slot) | SlotCheck::Blocked(slot) => Some(slot),
            SlotCheck::NotOffered => None,
        }
    }
}
