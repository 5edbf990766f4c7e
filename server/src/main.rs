use search_server::{AppState, Dataset, ServerConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let dataset = Dataset::from_path(&config.dataset_path)?;
    info!(
        records = dataset.len(),
        path = %config.dataset_path.display(),
        "dataset loaded"
    );
    if dataset.is_empty() {
        warn!("dataset is empty, every search will return no users");
    }

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);

    let state = AppState::new(dataset, &config.access_token, config.max_limit);
    search_server::run(listener, state).await?;
    Ok(())
}
