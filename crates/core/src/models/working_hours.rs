use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// A trainer's daily availability window, in local hours of the day.
///
/// The window is the same for every day. `start < end` is expected; an
/// inverted window is accepted and simply offers no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: u32,
    pub end: u32,
}

impl WorkingHours {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self { start: 8, end: 20 }
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parses the `"start-end"` form used in configuration, e.g. `"8-20"`.
impl FromStr for WorkingHours {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::Validation(format!("Invalid working hours '{}'", s));

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;

        Ok(Self { start, end })
    }
}
