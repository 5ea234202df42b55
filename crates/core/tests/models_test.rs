use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_str, to_string, to_value};
use uuid::Uuid;

use carebook_core::models::appointment::{
    Appointment, AppointmentResponse, AppointmentStatus, CreateAppointmentRequest, ReminderPayload,
};

fn sample_appointment() -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        schedule_to: "2999-01-01T10:00:00Z".parse().unwrap(),
        status: AppointmentStatus::Scheduled,
        created_at: Utc::now(),
    }
}

#[test]
fn test_status_wire_form() {
    let json = to_string(&AppointmentStatus::Scheduled).expect("Failed to serialize status");
    assert_eq!(json, "\"scheduled\"");

    let status: AppointmentStatus = from_str("\"scheduled\"").expect("Failed to parse status");
    assert_eq!(status, AppointmentStatus::Scheduled);
    assert_eq!(status.as_str(), "scheduled");
}

#[test]
fn test_appointment_serialization() {
    let appointment = sample_appointment();

    let json = to_string(&appointment).expect("Failed to serialize appointment");
    let deserialized: Appointment = from_str(&json).expect("Failed to deserialize appointment");

    assert_eq!(deserialized.id, appointment.id);
    assert_eq!(deserialized.patient_id, appointment.patient_id);
    assert_eq!(deserialized.schedule_to, appointment.schedule_to);
    assert_eq!(deserialized.status, appointment.status);
    assert_eq!(deserialized.created_at, appointment.created_at);
}

#[test]
fn test_schedule_to_round_trips_iso8601() {
    let appointment = sample_appointment();

    let value = to_value(&appointment).expect("Failed to serialize appointment");
    assert_eq!(
        value.get("schedule_to").and_then(|v| v.as_str()),
        Some("2999-01-01T10:00:00Z")
    );
}

#[test]
fn test_response_projection_field_set() {
    let appointment = sample_appointment();
    let response = AppointmentResponse::from(appointment.clone());

    assert_eq!(response.id, appointment.id);
    assert_eq!(response.patient_id, appointment.patient_id);
    assert_eq!(response.schedule_to, appointment.schedule_to);
    assert_eq!(response.status, appointment.status);
    assert_eq!(response.created_at, appointment.created_at);

    // Exactly the five documented fields on the wire
    let value = to_value(&response).expect("Failed to serialize response");
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("Response is not a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["created_at", "id", "patient_id", "schedule_to", "status"]
    );
}

#[test]
fn test_create_request_deserialization() {
    let request: CreateAppointmentRequest = from_str(
        r#"{"patient_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "schedule_to": "2999-01-01T10:00:00Z"}"#,
    )
    .expect("Failed to deserialize request");

    assert_eq!(request.patient_id, "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    assert_eq!(request.schedule_to, "2999-01-01T10:00:00Z");
}

#[test]
fn test_reminder_payload_from_appointment() {
    let appointment = sample_appointment();
    let payload = ReminderPayload::appointment_reminder(&appointment);

    assert_eq!(payload.appointment_id, appointment.id);
    assert_eq!(payload.patient_id, appointment.patient_id);
    assert_eq!(payload.scheduled_for, appointment.schedule_to);
    assert_eq!(payload.reminder_type, "appointment_reminder");
}

#[test]
fn test_reminder_payload_serialization() {
    let appointment = sample_appointment();
    let payload = ReminderPayload::appointment_reminder(&appointment);

    let json = to_string(&payload).expect("Failed to serialize reminder payload");
    let deserialized: ReminderPayload = from_str(&json).expect("Failed to deserialize payload");

    assert_eq!(deserialized.appointment_id, payload.appointment_id);
    assert_eq!(deserialized.patient_id, payload.patient_id);
    assert_eq!(deserialized.scheduled_for, payload.scheduled_for);
    assert_eq!(deserialized.reminder_type, payload.reminder_type);
}

#[test]
fn test_appointment_parses_hasura_row() {
    let appointment: Appointment = from_str(
        r#"{
            "id": "7f2c8e41-9a3b-4c2d-8e1f-6a5b4c3d2e1f",
            "patient_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "schedule_to": "2999-01-01T10:00:00+00:00",
            "status": "scheduled",
            "created_at": "2026-08-25T09:00:00.123456+00:00"
        }"#,
    )
    .expect("Failed to parse Hasura row");

    let expected: DateTime<Utc> = "2999-01-01T10:00:00Z".parse().unwrap();
    assert_eq!(appointment.schedule_to, expected);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
}
