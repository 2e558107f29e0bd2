use relay_service::config::RelayConfig;
use relay_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = RelayConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("relay-service", "info", config.otlp_endpoint.as_deref());
    init_metrics()?;

    let app = Application::build(config).await?;
    tracing::info!("Relay service running at http://localhost:{}", app.port());

    app.run_until_stopped().await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
