use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::chain::rpc::RpcLedgerOracle;
use backend::config::ActionConfig;
use backend::middleware::cors::cors_middleware;
use backend::routes;
use backend::state::AppState;
use backend::store::RedisGameStore;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or sourced locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let config = match ActionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load action configuration: {e}");
            std::process::exit(1);
        }
    };

    let store = match RedisGameStore::from_env() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to configure the game record store: {e}");
            std::process::exit(1);
        }
    };

    let oracle = RpcLedgerOracle::new(config.rpc_url.clone());

    println!("🚀 Starting Two Truths One Lie backend on http://{host}:{port}");
    println!("✅ Ledger RPC: {}", config.rpc_url);

    let data = web::Data::new(AppState::new(config, Arc::new(store), Arc::new(oracle)));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
