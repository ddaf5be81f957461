use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState, RestConfig};

/// Main entry point for the Hale REST API server
///
/// Resolves configuration from the environment once at startup and serves
/// the assessment API on the configured address.
///
/// # Environment Variables
/// - `HALE_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `API_TOKEN`: Bearer token expected on `/api` requests (required)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - `API_TOKEN` is not set,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("hale=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HALE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let api_token = std::env::var("API_TOKEN")
        .map_err(|_| anyhow::anyhow!("API_TOKEN must be set in the environment"))?;

    tracing::info!("++ Starting Hale REST API on {}", addr);

    let state = AppState::new(RestConfig::new(api_token));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
