// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run Club API Server
//!
//! Serves synthetic, reproducible activity data for the club roster.

use run_club_api::{
    config::Config,
    services::{LogoChallengeService, RosterService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        default_start = %config.default_range.start,
        default_end = %config.default_range.end,
        "Starting Run Club API"
    );

    // Load roster
    let roster = match &config.roster_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading roster from file");
            RosterService::load_from_file(path)?
        }
        None => RosterService::builtin()?,
    };
    tracing::info!(count = roster.athletes().len(), "Roster loaded");

    let logo_challenge = LogoChallengeService::builtin()?;

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        roster,
        logo_challenge,
    });

    // Build router
    let app = run_club_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("run_club_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
