use std::net::SocketAddr;
use std::sync::Arc;
use todoapp::{
    InMemoryStorage, SqliteStorage, Storage, UserService, build_router, config::CONFIG, telemetry::init_tracing,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&CONFIG.log_level);
    info!("Starting with {:?}", *CONFIG);

    let storage: Box<dyn Storage> = match &CONFIG.database_url {
        Some(url) => Box::new(SqliteStorage::connect(url).await?),
        None => {
            info!("DATABASE_URL not set, keeping users in memory");
            Box::new(InMemoryStorage::new())
        }
    };
    let service = Arc::new(UserService::new(storage).with_store_timeout(CONFIG.store_timeout));

    let app = build_router(service, CONFIG.request_timeout);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
