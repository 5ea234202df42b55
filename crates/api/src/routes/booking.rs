use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/booking/appointments",
            post(handlers::booking::create_appointment),
        )
        .route(
            "/booking/appointments/scheduled",
            get(handlers::booking::get_scheduled_appointments),
        )
        .route(
            "/booking/appointments/:id",
            get(handlers::booking::get_appointment),
        )
}
