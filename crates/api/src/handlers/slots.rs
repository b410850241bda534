//! # Slot Handlers
//!
//! Endpoints exposing the slot generator. Both endpoints are stateless: the
//! caller sends the trainer's bookings and unavailability blocks along with
//! the query, and nothing is stored.

use axum::{Json, extract::State};
use chrono::Utc;
use chrono_tz::Tz;
use fitbook_core::{
    errors::BookingError,
    models::{
        availability::{SlotCheckRequest, SlotCheckResponse, SlotsRequest, SlotsResponse},
        slot::Slot,
    },
    slots::{available_slots, check_slot, generate_slots, step_minutes},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists the slots of one day.
///
/// # Endpoint
///
/// ```text
/// POST /api/slots
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - Unknown timezone name
/// * `BookingError::InvalidTime` - Working hours that do not exist on the requested day
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SlotsRequest>,
) -> Result<Json<SlotsResponse>, AppError> {
    info!(
        "Listing slots for {} ({} min)",
        request.day, request.duration_minutes
    );

    let (tz, slots) = compute_slots(&state, &request)?;
    let slots = if request.available_only {
        available_slots(&slots)
    } else {
        slots
    };

    Ok(Json(SlotsResponse {
        day: request.day,
        timezone: tz.name().to_string(),
        step_minutes: step_minutes(request.duration_minutes),
        slots,
    }))
}

/// Checks whether a booking may start at `requested_start`.
///
/// # Endpoint
///
/// ```text
/// POST /api/slots/check
/// ```
#[axum::debug_handler]
pub async fn check_booking_slot(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SlotCheckRequest>,
) -> Result<Json<SlotCheckResponse>, AppError> {
    let (_, slots) = compute_slots(&state, &request.query)?;
    let check = check_slot(&slots, request.requested_start);

    info!(
        "Booking check at {}: bookable={}",
        request.requested_start,
        check.is_bookable()
    );

    Ok(Json(SlotCheckResponse::new(request.requested_start, check)))
}

fn compute_slots(state: &ApiState, request: &SlotsRequest) -> Result<(Tz, Vec<Slot>), AppError> {
    let tz = resolve_timezone(state, request.timezone.as_deref())?;
    let working_hours = request.working_hours.unwrap_or(state.default_working_hours);
    let now = request.now.unwrap_or_else(Utc::now);
    let busy = request.all_busy_intervals();

    debug!(
        "Resolved {} in {} with hours {} and {} busy intervals",
        request.day,
        tz.name(),
        working_hours,
        busy.len()
    );

    let slots = generate_slots(
        request.day,
        request.duration_minutes,
        &busy,
        working_hours,
        &tz,
        now,
    )
    .inspect_err(|e| warn!("Slot generation failed: {}", e))?;

    Ok((tz, slots))
}

fn resolve_timezone(state: &ApiState, name: Option<&str>) -> Result<Tz, AppError> {
    match name {
        Some(name) => name.parse::<Tz>().map_err(|_| {
            warn!("Rejected unknown timezone '{}'", name);
            AppError(BookingError::Validation(format!("Unknown timezone '{}'", name)))
        }),
        None => Ok(state.default_timezone),
    }
}
