//! Infrastructure Inventory API binary

use actix_web::{App, HttpServer, middleware, web};
use infra_inventory::{AppState, Config, LogFormat, Result, controllers};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Config::load();

    initialize_tracing(&config);

    info!("Starting Infrastructure Inventory API v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    info!(
        "Inventory configuration - Bind: {}:{}, Seed: {}, Snapshot: {}",
        config.bind_host,
        config.port,
        config.seed_sample_data,
        config
            .data_file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string())
    );

    let state = match AppState::from_config(&config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            error!("Failed to open inventory: {}", e);
            std::process::exit(1);
        }
    };

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .configure(controllers::configure)
    });

    if config.workers > 0 {
        server = server.workers(config.workers);
    }

    info!("Server is live at http://{}:{}", config.bind_host, config.port);
    server.bind(config.bind_address())?.run().await?;

    info!("Inventory API shutdown complete");
    Ok(())
}

/// Initialize structured logging
fn initialize_tracing(config: &Config) {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter_layer);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init(),
    }
}
