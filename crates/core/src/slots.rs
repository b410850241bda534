//! # Slot Generation
//!
//! Computes the bookable time slots of one trainer for one calendar day.
//!
//! ## Algorithm
//!
//! 1. Pick the step between candidate starts: 30 minutes when the service
//!    duration is a multiple of 30, otherwise 15 minutes
//! 2. Resolve the working-hours window on the requested day in the trainer's
//!    timezone
//! 3. Walk the lattice `day_start, day_start + step, ...` while the candidate
//!    still ends within the window
//! 4. Drop candidates that already started today, mark the rest available
//!    unless they overlap a busy interval
//!
//! Busy intervals are scanned linearly for every candidate. A day has at most
//! a hundred or so candidates and a trainer a handful of commitments, so no
//! sorting or indexing is done.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::{
    errors::{BookingError, BookingResult},
    models::{
        busy_interval::BusyInterval,
        slot::{Slot, SlotCheck},
        working_hours::WorkingHours,
    },
};

/// Spacing between candidate slot starts for a service of `duration_minutes`.
pub fn step_minutes(duration_minutes: i64) -> i64 {
    if duration_minutes % 30 == 0 { 30 } else { 15 }
}

/// Generates the slots of `day` for a service lasting `duration_minutes`.
///
/// The working-hours window is interpreted in `tz`. Slots overlapping any of
/// `busy_intervals` are returned with `is_available == false`; slots on the
/// same local day as `now` that start at or before `now` are left out.
///
/// Degenerate input (non-positive duration, empty or inverted working hours)
/// yields an empty list. Working hours that do not resolve to a real local
/// time on `day` are an [`BookingError::InvalidTime`].
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use fitbook_core::models::{busy_interval::BusyInterval, working_hours::WorkingHours};
/// use fitbook_core::slots::generate_slots;
///
/// let day = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
/// let busy = [BusyInterval::new(
///     Utc.with_ymd_and_hms(2025, 12, 3, 10, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 12, 3, 11, 0, 0).unwrap(),
/// )];
/// let now = Utc.with_ymd_and_hms(2025, 12, 3, 0, 0, 0).unwrap();
///
/// let slots = generate_slots(day, 60, &busy, WorkingHours::default(), &Utc, now)?;
/// assert_eq!(slots.len(), 23);
/// assert!(!slots[3].is_available); // 09:30
/// # Ok::<(), fitbook_core::errors::BookingError>(())
/// ```
pub fn generate_slots<Tz: TimeZone>(
    day: NaiveDate,
    duration_minutes: i64,
    busy_intervals: &[BusyInterval],
    working_hours: WorkingHours,
    tz: &Tz,
    now: DateTime<Utc>,
) -> BookingResult<Vec<Slot>> {
    if duration_minutes <= 0 {
        return Ok(Vec::new());
    }

    let day_start = local_instant(day, working_hours.start, tz)?;
    let day_end = local_instant(day, working_hours.end, tz)?;

    // Also covers inverted windows, and keeps the duration arithmetic in range.
    if duration_minutes > (day_end - day_start).num_minutes() {
        return Ok(Vec::new());
    }

    let duration = Duration::minutes(duration_minutes);
    let step = Duration::minutes(step_minutes(duration_minutes));
    let is_today = now.with_timezone(tz).date_naive() == day;

    let mut slots = Vec::new();
    let mut start = day_start;
    while let Some(end) = start
        .checked_add_signed(duration)
        .filter(|end| *end <= day_end)
    {
        if !(is_today && start <= now) {
            let is_available = !busy_intervals.iter().any(|busy| busy.overlaps(start, end));
            slots.push(Slot {
                start,
                end,
                is_available,
            });
        }

        match start.checked_add_signed(step) {
            Some(next) => start = next,
            None => break,
        }
    }

    debug!(
        "Generated {} slots for {} ({} min, hours {}): {} available, {} busy intervals",
        slots.len(),
        day,
        duration_minutes,
        working_hours,
        slots.iter().filter(|slot| slot.is_available).count(),
        busy_intervals.len()
    );

    Ok(slots)
}

/// [`generate_slots`] evaluated against the current wall clock.
pub fn generate_slots_now<Tz: TimeZone>(
    day: NaiveDate,
    duration_minutes: i64,
    busy_intervals: &[BusyInterval],
    working_hours: WorkingHours,
    tz: &Tz,
) -> BookingResult<Vec<Slot>> {
    generate_slots(
        day,
        duration_minutes,
        busy_intervals,
        working_hours,
        tz,
        Utc::now(),
    )
}

/// Looks up the slot starting exactly at `requested_start`.
pub fn check_slot(slots: &[Slot], requested_start: DateTime<Utc>) -> SlotCheck {
    match slots.iter().find(|slot| slot.start == requested_start) {
        Some(slot) if slot.is_available => SlotCheck::Available(*slot),
        Some(slot) => SlotCheck::Blocked(*slot),
        None => SlotCheck::NotOffered,
    }
}

pub fn available_slots(slots: &[Slot]) -> Vec<Slot> {
    slots.iter().filter(|slot| slot.is_available).copied().collect()
}

/// `day` at `hour`:00 local time in `tz`, as a UTC instant.
///
/// Hour 24 is the following midnight. A local time skipped by a DST change is
/// an error; a repeated one resolves to its earlier occurrence.
fn local_instant<Tz: TimeZone>(day: NaiveDate, hour: u32, tz: &Tz) -> BookingResult<DateTime<Utc>> {
    if hour > 24 {
        return Err(BookingError::InvalidTime(format!("hour {} is outside of a day", hour)));
    }

    let naive = day
        .and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::hours(i64::from(hour)))
        .ok_or_else(|| {
            BookingError::InvalidTime(format!("{} at hour {} is out of range", day, hour))
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            BookingError::InvalidTime(format!("{} does not exist in the requested timezone", naive))
        })
}
