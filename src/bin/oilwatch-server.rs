// ABOUTME: Server binary for the Oilwatch restaurant registry
// ABOUTME: Loads configuration, opens the store, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Oilwatch Server Binary

use anyhow::Result;
use clap::Parser;
use oilwatch_server::{
    config::{DatabaseUrl, ServerConfig},
    database_plugins::factory::Database,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "oilwatch-server")]
#[command(about = "Oilwatch - restaurant cooking-oil registry with allergy risk search")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override store location (sqlite:<path>, sqlite::memory:, memory:)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }

    info!("Starting Oilwatch server");
    info!("{}", config.summary());

    let database = Database::new(&config.database).await?;
    info!(
        "Store initialized successfully: {}",
        database.backend_info()
    );

    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
