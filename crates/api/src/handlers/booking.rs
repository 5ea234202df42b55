use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use carebook_core::models::appointment::{AppointmentResponse, CreateAppointmentRequest};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let response = state.booking.create_appointment(payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<AppointmentResponse>>, AppError> {
    let appointment = state.booking.get_appointment_by_id(id).await?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn get_scheduled_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = state.booking.get_scheduled_appointments().await?;

    Ok(Json(appointments))
}
