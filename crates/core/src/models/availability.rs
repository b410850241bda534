use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    booking::{Booking, UnavailabilityBlock},
    busy_interval::BusyInterval,
    slot::{Slot, SlotCheck},
    working_hours::WorkingHours,
};

/// Request for the slots of one trainer on one day.
///
/// Busy time may be given in any mix of the three forms; they are merged
/// before generation. `working_hours`, `timezone` and `now` fall back to
/// server defaults and the wall clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsRequest {
    pub day: NaiveDate,
    pub duration_minutes: i64,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub unavailability: Vec<UnavailabilityBlock>,
    #[serde(default)]
    pub busy_intervals: Vec<BusyInterval>,
    pub working_hours: Option<WorkingHours>,
    pub timezone: Option<String>,
    pub now: Option<DateTime<Utc>>,
    #[serde(default)]
    pub available_only: bool,
}

impl SlotsRequest {
    /// All busy sources of the request as one list.
    pub fn all_busy_intervals(&self) -> Vec<BusyInterval> {
        let mut intervals =
            super::busy_interval::busy_intervals(&self.bookings, &self.unavailability);
        intervals.extend_from_slice(&self.busy_intervals);
        intervals
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub day: NaiveDate,
    pub timezone: String,
    pub step_minutes: i64,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCheckRequest {
    #[serde(flatten)]
    pub query: SlotsRequest,
    pub requested_start: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotCheckStatus {
    Available,
    Blocked,
    NotOffered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCheckResponse {
    pub requested_start: DateTime<Utc>,
    pub status: SlotCheckStatus,
    pub slot: Option<Slot>,
}

impl SlotCheckResponse {
    pub fn new(requested_start: DateTime<Utc>, check: SlotCheck) -> Self {
        let status = match check {
            SlotCheck::Available(_) => SlotCheckStatus::Available,
            SlotCheck::Blocked(_) => SlotCheckStatus::Blocked,
            SlotCheck::NotOffered => SlotCheckStatus::NotOffered,
        };

        Self {
            requested_start,
            status,
            slot: check.slot().copied(),
        }
    }
}
