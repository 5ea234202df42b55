use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/webhooks/appointment-created",
            post(handlers::webhook::appointment_created),
        )
        .route(
            "/webhooks/scheduled-appointments-cron",
            post(handlers::webhook::scheduled_appointments_cron),
        )
        .route(
            "/webhooks/appointment-reminder",
            post(handlers::webhook::appointment_reminder),
        )
}
