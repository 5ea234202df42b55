use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an appointment. Only `Scheduled` is ever produced by
/// this service; the enum exists so the wire form stays a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
        }
    }
}

/// An appointment record as persisted by the external store.
///
/// `id` and `created_at` are assigned server-side at insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub schedule_to: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Incoming booking request.
///
/// Both fields are carried as strings so the booking workflow owns their
/// validation (UUIDv4 and ISO 8601 well-formedness) instead of the
/// deserializer rejecting them at the transport boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: String,
    pub schedule_to: String,
}

/// Caller-facing projection of an appointment. Exactly these five fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub schedule_to: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            patient_id: appointment.patient_id,
            schedule_to: appointment.schedule_to,
            status: appointment.status,
            created_at: appointment.created_at,
        }
    }
}

/// Body of the one-off scheduled event fired shortly before an appointment.
/// Not a stored entity; delivered back to us on the reminder webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderPayload {
    pub appointment_id: Uuid,
    pub patient_id: Uuid,
    pub scheduled_for: DateTime<Utc>,
    pub reminder_type: String,
}

impl ReminderPayload {
    pub const APPOINTMENT_REMINDER: &'static str = "appointment_reminder";

    pub fn appointment_reminder(appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.id,
            patient_id: appointment.patient_id,
            scheduled_for: appointment.schedule_to,
            reminder_type: Self::APPOINTMENT_REMINDER.to_string(),
        }
    }
}
