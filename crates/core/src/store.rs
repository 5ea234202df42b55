use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::BookingResult;
use crate::models::appointment::{Appointment, AppointmentStatus, ReminderPayload};

/// Access to the external appointment store and its scheduling capability.
///
/// The booking workflow depends on this trait only; the Hasura GraphQL
/// adapter implements it against the real endpoint, and tests substitute a
/// mock.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Inserts an appointment and returns the full persisted record,
    /// including the server-assigned `id` and `created_at`.
    async fn insert_appointment(
        &self,
        patient_id: Uuid,
        schedule_to: DateTime<Utc>,
        status: AppointmentStatus,
    ) -> BookingResult<Appointment>;

    /// Registers a one-off timed webhook call with the external scheduler
    /// and returns an opaque event identifier.
    async fn create_scheduled_event(
        &self,
        webhook_url: String,
        scheduled_time: DateTime<Utc>,
        payload: ReminderPayload,
    ) -> BookingResult<String>;

    /// Fetches all appointments with status `scheduled`, in endpoint order.
    async fn list_scheduled_appointments(&self) -> BookingResult<Vec<Appointment>>;
}
