use axum::Json;
use pretty_assertions::assert_eq;
use serde_json::json;

use carebook_api::handlers::webhook::{
    appointment_created, appointment_reminder, scheduled_appointments_cron,
    AppointmentCreatedPayload, CronTriggerPayload, ReminderTriggerPayload,
};

fn created_payload() -> AppointmentCreatedPayload {
    serde_json::from_value(json!({
        "event": {
            "session_variables": {"x-hasura-role": "admin"},
            "op": "INSERT",
            "data": {
                "old": null,
                "new": {
                    "id": "7f2c8e41-9a3b-4c2d-8e1f-6a5b4c3d2e1f",
                    "patient_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                    "schedule_to": "2999-01-01T10:00:00Z",
                    "status": "scheduled",
                    "created_at": "2026-08-25T09:00:00Z"
                }
            }
        },
        "created_at": "2026-08-25T09:00:00.000000Z",
        "id": "d5f3b2a1-0c9e-4f8a-b7d6-e5c4b3a2f1e0",
        "delivery_info": {"max_retries": 0, "current_retry": 0},
        "trigger": {"name": "appointment_created"},
        "table": {"schema": "public", "name": "appointment"}
    }))
    .expect("Failed to build appointment-created payload")
}

#[tokio::test]
async fn test_appointment_created_returns_fixed_ack() {
    let Json(ack) = appointment_created(Json(created_payload()))
        .await
        .expect("Expected receiver to succeed");

    assert_eq!(ack.message, "Appointment creation logged successfully");
}

#[tokio::test]
async fn test_cron_trigger_returns_fixed_ack() {
    let payload: CronTriggerPayload = serde_json::from_value(json!({
        "scheduled_time": "2026-08-25T10:00:00Z",
        "payload": {},
        "created_at": "2026-08-25T10:00:00Z",
        "id": "cron-event-1"
    }))
    .expect("Failed to build cron payload");

    let Json(ack) = scheduled_appointments_cron(Json(payload))
        .await
        .expect("Expected receiver to succeed");

    assert_eq!(ack.message, "Scheduled appointments processed successfully");
}

#[tokio::test]
async fn test_reminder_with_serialized_payload_returns_fixed_ack() {
    let embedded = json!({
        "appointment_id": "7f2c8e41-9a3b-4c2d-8e1f-6a5b4c3d2e1f",
        "patient_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "scheduled_for": "2999-01-01T10:00:00Z",
        "reminder_type": "appointment_reminder"
    });
    let payload: ReminderTriggerPayload = serde_json::from_value(json!({
        "id": "event_1756112400000",
        "scheduled_time": "2999-01-01T09:55:00Z",
        "payload": embedded.to_string()
    }))
    .expect("Failed to build reminder payload");

    let Json(ack) = appointment_reminder(Json(payload))
        .await
        .expect("Expected receiver to succeed");

    assert_eq!(ack.message, "Appointment reminder processed successfully");
}

#[tokio::test]
async fn test_reminder_with_malformed_embedded_payload_still_succeeds() {
    let payload: ReminderTriggerPayload = serde_json::from_value(json!({
        "id": "event_1756112400000",
        "scheduled_time": "2999-01-01T09:55:00Z",
        "payload": "{not json at all"
    }))
    .expect("Failed to build reminder payload");

    let Json(ack) = appointment_reminder(Json(payload))
        .await
        .expect("Expected malformed payload to degrade, not fail");

    assert_eq!(ack.message, "Appointment reminder processed successfully");
}

#[tokio::test]
async fn test_reminder_with_missing_fields_still_succeeds() {
    let payload: ReminderTriggerPayload =
        serde_json::from_value(json!({})).expect("Failed to build empty reminder payload");

    let Json(ack) = appointment_reminder(Json(payload))
        .await
        .expect("Expected missing fields to degrade, not fail");

    assert_eq!(ack.message, "Appointment reminder processed successfully");
}
