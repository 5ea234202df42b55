use std::sync::Arc;

use carebook_api::config::ApiConfig;
use carebook_core::booking::BookingService;
use carebook_hasura::{HasuraClient, HasuraConfig};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Construct the GraphQL adapter for the external store
    let hasura = HasuraClient::new(HasuraConfig {
        endpoint: config.hasura_endpoint.clone(),
        admin_secret: config.hasura_admin_secret.clone(),
    });

    // Wire the booking workflow to the adapter
    let booking = BookingService::new(Arc::new(hasura), config.reminder_webhook_url.clone());

    // Start API server
    carebook_api::start_server(config, booking).await?;

    Ok(())
}
