//! # Carebook Hasura Adapter
//!
//! Stateless GraphQL client for the external Hasura data layer. Translates
//! the [`carebook_core::store::AppointmentStore`] operations into requests
//! against a single GraphQL endpoint, authenticated with the
//! `x-hasura-admin-secret` header.

pub mod client;
pub mod mock;
pub mod queries;

pub use client::{HasuraClient, HasuraConfig};
