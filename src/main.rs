use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use freshscanner::api;
use freshscanner::config::{self, AppConfig};
use freshscanner::core_state::CoreState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let app_config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("FreshScanner starting v{}", config::APP_VERSION);

    let addr = match app_config.server.socket_addr() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address: {e}");
            std::process::exit(1);
        }
    };

    let core = Arc::new(CoreState::new(app_config));

    // Probe Ollama in the background; startup proceeds either way — the
    // model may be pulled or the daemon started after we are up.
    let dispatcher = core.dispatcher();
    tokio::task::spawn_blocking(move || match dispatcher.check_model() {
        Ok(true) => tracing::info!(model = %dispatcher.model(), "Ollama model confirmed"),
        Ok(false) => tracing::warn!(
            model = %dispatcher.model(),
            "Model not found on Ollama; chat will fail until it is pulled"
        ),
        Err(e) => tracing::warn!(error = %e, "Cannot reach Ollama; chat will fail until it is running"),
    });

    let mut server = match api::server::start_server(core, addr).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.addr(), "FreshScanner ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
}
