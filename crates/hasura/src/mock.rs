//! Mock appointment store for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use carebook_core::errors::BookingResult;
use carebook_core::models::appointment::{Appointment, AppointmentStatus, ReminderPayload};
use carebook_core::store::AppointmentStore;

mock! {
    pub Store {}

    #[async_trait]
    impl AppointmentStore for Store {
        async fn insert_appointment(
            &self,
            patient_id: Uuid,
            schedule_to: DateTime<Utc>,
            status: AppointmentStatus,
        ) -> BookingResult<Appointment>;

        async fn create_scheduled_event(
            &self,
            webhook_url: String,
            scheduled_time: DateTime<Utc>,
            payload: ReminderPayload,
        ) -> BookingResult<String>;

        async fn list_scheduled_appointments(&self) -> BookingResult<Vec<Appointment>>;
    }
}
