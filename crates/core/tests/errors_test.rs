use std::error::Error;

use carebook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let validation = BookingError::Validation("Patient ID must be a valid UUID".to_string());
    let invalid_schedule =
        BookingError::InvalidSchedule("Appointment must be scheduled for a future date".to_string());
    let not_found = BookingError::NotFound("Appointment not found".to_string());
    let graphql = BookingError::GraphQLOperation(eyre::eyre!("connection refused"));

    assert_eq!(
        validation.to_string(),
        "Validation error: Patient ID must be a valid UUID"
    );
    assert_eq!(
        invalid_schedule.to_string(),
        "Invalid schedule: Appointment must be scheduled for a future date"
    );
    assert_eq!(
        not_found.to_string(),
        "Resource not found: Appointment not found"
    );
    assert!(graphql.to_string().contains("GraphQL operation failed:"));
    assert!(graphql.to_string().contains("connection refused"));
}

#[test]
fn test_create_appointment_wraps_root_cause() {
    let cause = BookingError::GraphQLOperation(eyre::eyre!("connection refused"));
    let wrapped = BookingError::CreateAppointment(Box::new(cause));

    assert!(wrapped.to_string().starts_with("Failed to create appointment:"));
    assert!(wrapped.to_string().contains("connection refused"));
    assert!(wrapped.source().is_some());
}

#[test]
fn test_fetch_appointments_wraps_root_cause() {
    let cause = BookingError::GraphQLOperation(eyre::eyre!("timeout"));
    let wrapped = BookingError::FetchAppointments(Box::new(cause));

    assert!(wrapped
        .to_string()
        .starts_with("Failed to fetch scheduled appointments:"));
    assert!(wrapped.to_string().contains("timeout"));
    assert!(wrapped.source().is_some());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("transport failure");
    let err = BookingError::from(report);

    assert!(matches!(err, BookingError::GraphQLOperation(_)));
    assert!(err.to_string().contains("transport failure"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("missing".to_string()));
    assert!(result.is_err());
}
