use datalens_core::AppConfig;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize the application (telemetry, directories, routes)
    let (_state, router) = datalens_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    datalens_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
