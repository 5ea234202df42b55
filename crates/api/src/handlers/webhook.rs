//! Webhook receivers for notifications from the external store/scheduler.
//!
//! All three receivers are logging-only: they record the payload and answer
//! 200 with a fixed acknowledgment. Unexpected internal errors propagate to
//! the error-handling middleware instead of being swallowed, unlike the
//! reminder-scheduling path in the booking workflow.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use carebook_core::models::appointment::Appointment;

use crate::middleware::error_handling::AppError;

/// Fixed acknowledgment body returned by every receiver.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookAck {
    pub message: String,
}

/// Hasura event-trigger envelope delivered when an appointment row is
/// inserted.
#[derive(Debug, Deserialize)]
pub struct AppointmentCreatedPayload {
    pub event: TriggerEvent,
    pub created_at: String,
    pub id: String,
    pub delivery_info: DeliveryInfo,
    pub trigger: TriggerInfo,
    pub table: TableInfo,
}

#[derive(Debug, Deserialize)]
pub struct TriggerEvent {
    pub session_variables: Value,
    pub op: String,
    pub data: RowChange,
}

#[derive(Debug, Deserialize)]
pub struct RowChange {
    pub old: Option<Value>,
    pub new: Appointment,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryInfo {
    pub max_retries: u32,
    pub current_retry: u32,
}

#[derive(Debug, Deserialize)]
pub struct TriggerInfo {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TableInfo {
    pub schema: String,
    pub name: String,
}

/// Cron-trigger envelope.
#[derive(Debug, Deserialize)]
pub struct CronTriggerPayload {
    pub scheduled_time: String,
    pub payload: Value,
    pub created_at: String,
    pub id: String,
}

/// Reminder envelope. Loosely typed: the scheduler delivers the reminder
/// payload as a serialized string, and every field may be absent.
#[derive(Debug, Deserialize)]
pub struct ReminderTriggerPayload {
    pub id: Option<String>,
    pub scheduled_time: Option<String>,
    pub payload: Option<Value>,
}

#[axum::debug_handler]
pub async fn appointment_created(
    Json(payload): Json<AppointmentCreatedPayload>,
) -> Result<Json<WebhookAck>, AppError> {
    info!("=== APPOINTMENT CREATED WEBHOOK ===");
    info!("Trigger: {}", payload.trigger.name);
    info!("Event ID: {}", payload.id);
    info!("Operation: {}", payload.event.op);
    info!("Table: {}.{}", payload.table.schema, payload.table.name);

    let row = &payload.event.data.new;
    info!("Appointment details:");
    info!("- ID: {}", row.id);
    info!("- Patient ID: {}", row.patient_id);
    info!("- Scheduled To: {}", row.schedule_to);
    info!("- Status: {}", row.status.as_str());
    info!("- Created At: {}", row.created_at);

    Ok(Json(WebhookAck {
        message: "Appointment creation logged successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn scheduled_appointments_cron(
    Json(payload): Json<CronTriggerPayload>,
) -> Result<Json<WebhookAck>, AppError> {
    info!("=== SCHEDULED APPOINTMENTS CRON TRIGGER ===");
    info!("Event ID: {}", payload.id);
    info!("Scheduled Time: {}", payload.scheduled_time);
    info!("Created At: {}", payload.created_at);

    // Receipt is recorded only; querying and processing the pending
    // appointments is a placeholder capability of this trigger.
    info!("Processing all appointments with status \"scheduled\"");

    Ok(Json(WebhookAck {
        message: "Scheduled appointments processed successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn appointment_reminder(
    Json(payload): Json<ReminderTriggerPayload>,
) -> Result<Json<WebhookAck>, AppError> {
    info!("=== APPOINTMENT REMINDER WEBHOOK ===");
    info!("Event ID: {}", payload.id.as_deref().unwrap_or("N/A"));
    info!(
        "Scheduled Time: {}",
        payload.scheduled_time.as_deref().unwrap_or("N/A")
    );

    if let Some(raw) = &payload.payload {
        let details = decode_reminder(raw);
        info!("Reminder details:");
        info!("- Appointment ID: {}", details.appointment_id);
        info!("- Patient ID: {}", details.patient_id);
        info!("- Scheduled For: {}", details.scheduled_for);
        info!("- Reminder Type: {}", details.reminder_type);
    }

    // Integration point for outbound notification delivery (email, SMS,
    // push); currently a no-op.

    Ok(Json(WebhookAck {
        message: "Appointment reminder processed successfully".to_string(),
    }))
}

struct ReminderDetails {
    appointment_id: String,
    patient_id: String,
    scheduled_for: String,
    reminder_type: String,
}

// Defensive decoding: the payload may arrive as a serialized string or an
// inline object, and missing or malformed fields degrade to "N/A".
fn decode_reminder(raw: &Value) -> ReminderDetails {
    let parsed: Value = match raw {
        Value::String(text) => serde_json::from_str(text).unwrap_or(Value::Null),
        other => other.clone(),
    };

    let field = |name: &str| {
        parsed
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string()
    };

    ReminderDetails {
        appointment_id: field("appointment_id"),
        patient_id: field("patient_id"),
        scheduled_for: field("scheduled_for"),
        reminder_type: field("reminder_type"),
    }
}
