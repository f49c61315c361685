use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use scheduler_api::{ApiState, config::AppConfig};
use scheduler_integrations::{FixtureCalendar, FixtureMailer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration; an unparseable value stops startup here
    let config = Arc::new(AppConfig::from_env()?);

    // Calendar and mail providers
    let state = ApiState::new(
        config,
        Arc::new(FixtureCalendar::new()),
        Arc::new(FixtureMailer::new()),
    );

    // Start API server
    scheduler_api::start_server(state).await?;

    Ok(())
}
