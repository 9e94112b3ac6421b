use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mamacare::service::notifier::{AfricasTalkingClient, NoopNotifier, Notifier};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &mamacare::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        sms_endpoint = %cfg.sms_endpoint
    );

    let storage = mamacare::db::spawn(&cfg.database_url).await?;

    let notifier: Arc<dyn Notifier> = match AfricasTalkingClient::from_config(cfg) {
        Some(client) => Arc::new(client),
        None => {
            warn!("AT_USERNAME/AT_API_KEY not configured; SMS notifications disabled");
            Arc::new(NoopNotifier)
        }
    };

    let state = mamacare::router::CareState::new(storage, notifier);
    let app = mamacare::router::care_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
