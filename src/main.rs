mod actions;
mod app_system;
mod clients;
mod config;
mod console;
mod controller;
mod domain;
mod error;
mod form;
mod rest_framework;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, FormSystem};
use crate::config::{Cli, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing();

    let config = Config::load(&cli)?;
    info!(base_url = %config.base_url, "Starting order form");

    let system = FormSystem::new(&config);

    if let Err(e) = console::run(system.controller.clone()).await {
        error!(error = %e, "Console failed");
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Order form closed");
    Ok(())
}
