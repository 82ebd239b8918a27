// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Run Club API: synthetic fitness-activity data for a fictitious club.
//!
//! Activity histories are derived on every request from hash-seeded
//! generators, so the API behaves like a stable dataset without storing
//! anything.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod num_utils;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{LogoChallengeService, RosterService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub roster: RosterService,
    pub logo_challenge: LogoChallengeService,
}
