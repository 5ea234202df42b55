use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::eyre;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use carebook_core::errors::{BookingError, BookingResult};
use carebook_core::models::appointment::{Appointment, AppointmentStatus, ReminderPayload};
use carebook_core::store::AppointmentStore;

use crate::queries;

/// Connection settings for the Hasura endpoint, read once at startup and
/// handed to the client at construction.
#[derive(Debug, Clone)]
pub struct HasuraConfig {
    pub endpoint: String,
    pub admin_secret: String,
}

/// GraphQL client for the external appointment store.
///
/// Requests are single POSTs of `{query, variables}`; no retries. The admin
/// secret is only ever written to the request header, never to logs.
pub struct HasuraClient {
    http: reqwest::Client,
    config: HasuraConfig,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct InsertAppointmentData {
    insert_appointment_one: Appointment,
}

#[derive(Debug, Deserialize)]
struct ScheduledAppointmentsData {
    appointment: Vec<Appointment>,
}

impl HasuraClient {
    pub fn new(config: HasuraConfig) -> Self {
        info!(
            "GraphQL client initialized with endpoint: {}",
            config.endpoint
        );

        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: Option<Value>,
    ) -> BookingResult<T> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .header("x-hasura-admin-secret", &self.config.admin_secret)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|err| BookingError::GraphQLOperation(eyre!(err)))?;

        let body: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|err| BookingError::GraphQLOperation(eyre!(err)))?;

        decode_response(body)
    }
}

/// Maps a GraphQL response envelope to the operation result. A non-empty
/// `errors` list fails the operation with the serialized list as the cause.
fn decode_response<T>(body: GraphQlResponse<T>) -> BookingResult<T> {
    if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
        let serialized =
            serde_json::to_string(&errors).unwrap_or_else(|_| format!("{:?}", errors));
        return Err(BookingError::GraphQLOperation(eyre!(
            "GraphQL error: {}",
            serialized
        )));
    }

    body.data
        .ok_or_else(|| BookingError::GraphQLOperation(eyre!("GraphQL response carried no data")))
}

#[async_trait]
impl AppointmentStore for HasuraClient {
    async fn insert_appointment(
        &self,
        patient_id: Uuid,
        schedule_to: DateTime<Utc>,
        status: AppointmentStatus,
    ) -> BookingResult<Appointment> {
        info!(
            "Creating appointment for patient {} at {}",
            patient_id, schedule_to
        );

        let variables = serde_json::json!({
            "patient_id": patient_id,
            "schedule_to": schedule_to,
            "status": status,
        });

        let data: InsertAppointmentData = self
            .execute(queries::CREATE_APPOINTMENT_MUTATION, Some(variables))
            .await?;

        info!(
            "Appointment created with ID: {}",
            data.insert_appointment_one.id
        );
        Ok(data.insert_appointment_one)
    }

    // Hasura exposes one-off scheduled event creation through its metadata
    // REST API, not GraphQL; this is the seam where a faithful deployment
    // would call it. The registration is simulated and an opaque event id
    // returned.
    async fn create_scheduled_event(
        &self,
        webhook_url: String,
        scheduled_time: DateTime<Utc>,
        payload: ReminderPayload,
    ) -> BookingResult<String> {
        info!("Creating scheduled event for {}", scheduled_time);

        let serialized =
            serde_json::to_string(&payload).map_err(|err| BookingError::GraphQLOperation(eyre!(err)))?;
        debug!(
            "Scheduled event would call {} at {} with payload: {}",
            webhook_url, scheduled_time, serialized
        );

        let event_id = format!("event_{}", Utc::now().timestamp_millis());
        info!("Simulated scheduled event created with ID: {}", event_id);
        Ok(event_id)
    }

    async fn list_scheduled_appointments(&self) -> BookingResult<Vec<Appointment>> {
        info!("Fetching scheduled appointments");

        let data: ScheduledAppointmentsData = self
            .execute(queries::GET_SCHEDULED_APPOINTMENTS_QUERY, None)
            .await?;

        info!("Found {} scheduled appointments", data.appointment.len());
        Ok(data.appointment)
    }
}
