use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use name_indexer::{lifecycle, Dependencies, IndexingError};

#[tokio::main]
async fn main() -> Result<(), IndexingError> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting name indexer");

    let deps = Dependencies::new().await?;

    if let Err(e) = lifecycle::run(&deps.search_client).await {
        error!(error = %e, "Lifecycle run failed");
        return Err(e);
    }

    info!("Name indexer finished");
    Ok(())
}
