mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use vidtrack_gateway::{App, AppState};
use vidtrack_storage::{CsvRepository, InMemoryRepository, Repository};
use vidtrack_tracker::TrackerService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    vidtrack_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        data_file = %config.data_file.display(),
        "starting video tracker gateway"
    );

    match config.storage {
        StorageBackendArg::Csv => {
            run_server(config.listen_addr, CsvRepository::new(config.data_file)).await?;
        }
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, InMemoryRepository::new()).await?;
        }
    }

    Ok(())
}

async fn run_server<R: Repository>(
    listen_addr: SocketAddr,
    repository: R,
) -> anyhow::Result<()> {
    let state = AppState::new(Arc::new(TrackerService::new(repository)));
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
