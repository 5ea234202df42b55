use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::{
    Appointment, AppointmentResponse, AppointmentStatus, CreateAppointmentRequest, ReminderPayload,
};
use crate::store::AppointmentStore;

/// Minutes before `schedule_to` at which the reminder event fires.
const REMINDER_LEAD_MINUTES: i64 = 5;

/// The booking workflow: validates input, persists appointments through the
/// store, and schedules best-effort reminders.
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn AppointmentStore>,
    reminder_webhook_url: String,
}

impl BookingService {
    pub fn new(store: Arc<dyn AppointmentStore>, reminder_webhook_url: impl Into<String>) -> Self {
        Self {
            store,
            reminder_webhook_url: reminder_webhook_url.into(),
        }
    }

    /// Creates an appointment with status `scheduled`.
    ///
    /// Input is validated before any external call; `schedule_to` must be
    /// strictly in the future. Once the insert succeeds, a reminder event is
    /// scheduled on a fire-and-forget basis: a scheduling failure is logged
    /// and never fails the creation.
    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> BookingResult<AppointmentResponse> {
        let (patient_id, schedule_to) = validate_request(&request)?;

        if schedule_to <= Utc::now() {
            return Err(BookingError::InvalidSchedule(
                "Appointment must be scheduled for a future date".to_string(),
            ));
        }

        info!(
            "Creating appointment for patient {} at {}",
            patient_id, schedule_to
        );

        let appointment = self
            .store
            .insert_appointment(patient_id, schedule_to, AppointmentStatus::Scheduled)
            .await
            .map_err(|err| BookingError::CreateAppointment(Box::new(err)))?;

        self.schedule_reminder(&appointment).await;

        info!(
            "Appointment created successfully with ID: {}",
            appointment.id
        );
        Ok(AppointmentResponse::from(appointment))
    }

    /// Looks up a single appointment by identifier.
    ///
    /// The external store integration defines no backing query for this path
    /// yet, so the lookup always resolves to `None`.
    pub async fn get_appointment_by_id(
        &self,
        id: Uuid,
    ) -> BookingResult<Option<AppointmentResponse>> {
        info!("Fetching appointment with ID: {}", id);
        Ok(None)
    }

    /// Returns all appointments with status `scheduled`, preserving the
    /// order delivered by the store.
    pub async fn get_scheduled_appointments(&self) -> BookingResult<Vec<AppointmentResponse>> {
        info!("Fetching all scheduled appointments");

        let appointments = self
            .store
            .list_scheduled_appointments()
            .await
            .map_err(|err| BookingError::FetchAppointments(Box::new(err)))?;

        info!("Found {} scheduled appointments", appointments.len());
        Ok(appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect())
    }

    // Reminder scheduling is isolated from the creation outcome: a reminder
    // instant already in the past is skipped, and any scheduling failure is
    // downgraded to a warning.
    async fn schedule_reminder(&self, appointment: &Appointment) {
        let reminder_at = appointment.schedule_to - Duration::minutes(REMINDER_LEAD_MINUTES);

        if reminder_at <= Utc::now() {
            warn!(
                "Cannot schedule reminder for appointment {} - reminder time is in the past",
                appointment.id
            );
            return;
        }

        info!(
            "Scheduling reminder event for appointment {} at {}",
            appointment.id, reminder_at
        );

        let payload = ReminderPayload::appointment_reminder(appointment);

        match self
            .store
            .create_scheduled_event(self.reminder_webhook_url.clone(), reminder_at, payload)
            .await
        {
            Ok(event_id) => info!(
                "Reminder scheduled: event {} created for appointment {}",
                event_id, appointment.id
            ),
            Err(err) => warn!(
                "Failed to schedule reminder for appointment {}: {}",
                appointment.id, err
            ),
        }
    }
}

fn validate_request(request: &CreateAppointmentRequest) -> BookingResult<(Uuid, DateTime<Utc>)> {
    if request.patient_id.trim().is_empty() {
        return Err(BookingError::Validation(
            "Patient ID is required".to_string(),
        ));
    }

    let patient_id = Uuid::parse_str(request.patient_id.trim())
        .ok()
        .filter(|id| id.get_version_num() == 4)
        .ok_or_else(|| BookingError::Validation("Patient ID must be a valid UUID".to_string()))?;

    if request.schedule_to.trim().is_empty() {
        return Err(BookingError::Validation(
            "Schedule date is required".to_string(),
        ));
    }

    let schedule_to = DateTime::parse_from_rfc3339(request.schedule_to.trim())
        .map_err(|_| {
            BookingError::Validation(
                "Schedule date must be a valid ISO 8601 date string".to_string(),
            )
        })?
        .with_timezone(&Utc);

    Ok((patient_id, schedule_to))
}
