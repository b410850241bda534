use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use fitbook_api::middleware::error_handling::AppError;
use fitbook_core::errors::BookingError;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case(BookingError::Validation("Unknown timezone".to_string()), StatusCode::BAD_REQUEST)]
#[case(
    BookingError::InvalidTime("hour 25 is outside of a day".to_string()),
    StatusCode::BAD_REQUEST
)]
#[case(
    BookingError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: BookingError, #[case] status: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), status);
}

#[tokio::test]
async fn test_error_body_is_json() {
    let response = AppError(BookingError::Validation("Unknown timezone 'Mars/Base'".to_string()))
        .into_response();

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: Value = serde_json::from_slice(&body).expect("Body is not JSON");

    assert_eq!(
        json["error"],
        "Validation error: Unknown timezone 'Mars/Base'"
    );
}

#[test]
fn test_eyre_report_becomes_internal() {
    let error: AppError = eyre::eyre!("unexpected").into();

    assert!(matches!(error.0, BookingError::Internal(_)));
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
