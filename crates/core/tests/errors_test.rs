use fitbook_core::errors::{BookingError, BookingResult};
use std::error::Error;

#[test]
fn test_booking_error_display() {
    let validation = BookingError::Validation("Unknown timezone".to_string());
    let invalid_time = BookingError::InvalidTime("2025-03-09 02:00:00 does not exist".to_string());
    let internal = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(validation.to_string(), "Validation error: Unknown timezone");
    assert_eq!(
        invalid_time.to_string(),
        "Invalid time: 2025-03-09 02:00:00 does not exist"
    );
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let booking_error = BookingError::Internal(Box::new(io_error));

    assert!(booking_error.source().is_some());
    assert!(booking_error.to_string().contains("IO error"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let booking_error: BookingError = boxed_error.into();

    assert!(matches!(booking_error, BookingError::Internal(_)));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::Validation("Bad input".to_string()));
    assert!(result.is_err());
}
