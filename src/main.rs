//! Order Gateway entry point
//!
//! Boot sequence: parse `--env`, load `config/{env}.yaml`, initialize
//! logging, connect the PostgreSQL pool, serve the gateway.

use std::sync::Arc;

use order_gateway::config::AppConfig;
use order_gateway::db::Database;
use order_gateway::gateway::{self, state::AppState};
use order_gateway::logging;
use order_gateway::orders::OrderService;
use order_gateway::store::postgres::PgStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = logging::init_logging(&config);

    tracing::info!(env = %env, "starting order gateway");

    let db = Database::connect(
        &config.database.postgres_url,
        config.database.max_connections,
    )
    .await?;
    db.health_check().await?;

    let store = Arc::new(PgStore::new(db.pool().clone()));
    let service = OrderService::new(store);
    let state = Arc::new(AppState::new(service));

    gateway::run_server(&config.gateway.host, config.gateway.port, state).await?;
    Ok(())
}
