//! Catalogue JSON API Server

use std::{io, process::ExitCode};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use thiserror::Error;
use tracing::{error, info};

use catalogue_app::context::{AppContext, AppInitError};

use crate::{config::ServerConfig, state::State, uploads::UploadDir};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod extensions;
mod healthcheck;
mod messages;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
mod tasks;
#[cfg(test)]
mod test_helpers;
mod uploads;

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to create upload directory: {0}")]
    UploadDir(#[source] io::Error),

    #[error("failed to initialize app context: {0}")]
    App(#[from] AppInitError),

    #[error("failed to bind server: {0}")]
    Bind(#[source] salvo::Error),
}

/// Catalogue JSON API Server entry point
#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(config_error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {config_error}");
            }

            return ExitCode::FAILURE;
        }
    };

    if let Err(observability_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing failed to initialize, stderr is the only sink left"
        )]
        {
            eprintln!("{observability_error}");
        }

        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(startup_error) => {
            error!("{startup_error}");

            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig) -> Result<(), StartupError> {
    let uploads = UploadDir::new(config.uploads.upload_dir.clone());

    uploads.ensure().await.map_err(StartupError::UploadDir)?;

    let app = AppContext::from_database_url(
        &config.database.database_url,
        &config.database.database_name,
    )
    .await?;

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let acceptor = TcpListener::new(addr)
        .try_bind()
        .await
        .map_err(StartupError::Bind)?;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::shared(app, uploads)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::app_router());

    let doc = OpenApi::new("Catalogue API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("api-docs"));

    let server = Server::new(acceptor);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    Ok(())
}
