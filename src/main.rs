use std::sync::Arc;

use tracing::info;

use research_collab::adapters::{build_router, EventHandlers, InMemoryEventRepository};
use research_collab::config::AppConfig;
use research_collab::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server)?;

    let repository = Arc::new(InMemoryEventRepository::new());
    let handlers = EventHandlers::from_repository(repository, config.events.draft_limits());
    let app = build_router(handlers, &config.server);

    let addr = config.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        %addr,
        environment = ?config.server.environment,
        max_sessions = config.events.max_sessions_per_event,
        "server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
