use std::sync::Arc;
use std::time::Duration;

use lexi_api::{DictApiClient, Dictionary};
use lexi_config::Config;
use lexi_ocr::{CameraDevice, NullCamera};
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod state;
mod ui;


use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::new();

    let dict: Arc<dyn Dictionary> = Arc::new(DictApiClient::new(
        config.api.base_url.clone(),
        config.api.app_id.clone(),
        config.api.app_key.clone(),
        Duration::from_secs(config.api.timeout_seconds),
    )?);
    let camera: Arc<dyn CameraDevice> = Arc::new(NullCamera);

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(dict, camera);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}
