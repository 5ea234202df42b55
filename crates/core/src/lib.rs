//! # Carebook Core
//!
//! Domain types and the booking workflow for the carebook appointment
//! service. This crate has no transport dependencies: the external store is
//! reached through the [`store::AppointmentStore`] trait, implemented by the
//! Hasura adapter crate and mocked in tests.

/// Booking workflow: validation, persistence orchestration, reminders
pub mod booking;
/// Error taxonomy shared across the workspace
pub mod errors;
/// Domain and wire-facing models
pub mod models;
/// Seam to the external appointment store
pub mod store;
