//! # API Configuration Module
//!
//! This module handles loading configuration for the carebook API server.
//! Values come from environment variables, with defaults applied where the
//! original deployment defines them.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `HASURA_GRAPHQL_ENDPOINT`: GraphQL endpoint of the external store
//!   (default: "http://localhost:8080/v1/graphql")
//! - `HASURA_GRAPHQL_ADMIN_SECRET`: Shared secret for the
//!   `x-hasura-admin-secret` header (default: "12345", a placeholder that
//!   must be overridden in any real deployment)
//! - `REMINDER_WEBHOOK_URL`: URL the scheduler calls back when a reminder
//!   fires (default: "http://host.docker.internal:3000/webhooks/appointment-reminder")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the carebook API server.
///
/// All values are read once at startup; the Hasura values are handed to the
/// GraphQL adapter at construction as an immutable config.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// GraphQL endpoint of the external Hasura data layer
    pub hasura_endpoint: String,

    /// Admin secret sent on every GraphQL request
    pub hasura_admin_secret: String,

    /// Webhook URL delivered to the external scheduler for reminder events
    pub reminder_webhook_url: String,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables, applying the
    /// documented defaults when a variable is absent.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // External store settings
        let hasura_endpoint = env::var("HASURA_GRAPHQL_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8080/v1/graphql".to_string());
        let hasura_admin_secret =
            env::var("HASURA_GRAPHQL_ADMIN_SECRET").unwrap_or_else(|_| "12345".to_string());
        let reminder_webhook_url = env::var("REMINDER_WEBHOOK_URL").unwrap_or_else(|_| {
            "http://host.docker.internal:3000/webhooks/appointment-reminder".to_string()
        });

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            hasura_endpoint,
            hasura_admin_secret,
            reminder_webhook_url,
        })
    }

    /// Returns the server address as a string (e.g., "0.0.0.0:3000").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
