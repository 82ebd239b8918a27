// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logo challenge showcase records.

use crate::models::SportType;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Static logo challenge entry, keyed by athlete display name.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoChallengeEntry {
    pub athlete_name: String,
    pub activity_id: String,
    pub park: String,
    pub city: String,
    pub distance_miles: f64,
    /// Encoded polyline (precision 5)
    pub polyline: String,
}

/// Logo challenge activity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogoChallenge {
    pub activity_id: String,
    pub athlete_id: String,
    pub athlete_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub sport_type: SportType,
    pub start_date: String,
    pub distance_miles: f64,
    pub park: String,
    pub city: String,
    pub is_logo_challenge: bool,
    pub summary_polyline: String,
    /// First point of the route as `[lat, lng]`
    pub start_latlng: Option<[f64; 2]>,
    /// Last point of the route as `[lat, lng]`
    pub end_latlng: Option<[f64; 2]>,
}
