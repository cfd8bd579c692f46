use std::sync::Arc;

use anyhow::Context;

use storehook_api::app::{build_app, services::build_services};
use storehook_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storehook_observability::init();

    let config = AppConfig::from_env()?;
    let services = Arc::new(build_services(&config)?);
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
