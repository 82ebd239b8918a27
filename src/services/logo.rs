// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logo challenge showcase.
//!
//! A handful of hand-drawn runs tracing the club logo, joined with the
//! roster by athlete name.

use crate::models::{LogoChallenge, LogoChallengeEntry, SportType};
use crate::services::RosterService;

const BUILTIN_ENTRIES: &str = include_str!("../../data/logo_challenge.json");

/// Fixed start time shared by every logo challenge run.
pub const LOGO_CHALLENGE_START: &str = "2025-12-15T09:00:00Z";

#[derive(Debug, Default, Clone)]
pub struct LogoChallengeService {
    entries: Vec<LogoChallengeEntry>,
}

impl LogoChallengeService {
    pub fn builtin() -> Result<Self, LogoError> {
        Self::load_from_json(BUILTIN_ENTRIES)
    }

    pub fn load_from_json(json_data: &str) -> Result<Self, LogoError> {
        let entries: Vec<LogoChallengeEntry> =
            serde_json::from_str(json_data).map_err(|e| LogoError::ParseError(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Challenge records for entries whose athlete is on the roster.
    pub fn challenges(&self, roster: &RosterService) -> Vec<LogoChallenge> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let Some(athlete) = roster.find_by_name(&entry.athlete_name) else {
                    tracing::debug!(athlete = %entry.athlete_name, "Logo challenge athlete not on roster");
                    return None;
                };

                let (start_latlng, end_latlng) = match route_endpoints(&entry.polyline) {
                    Ok(endpoints) => endpoints,
                    Err(e) => {
                        tracing::warn!(
                            activity_id = %entry.activity_id,
                            error = %e,
                            "Could not decode logo challenge polyline"
                        );
                        (None, None)
                    }
                };

                Some(LogoChallenge {
                    activity_id: entry.activity_id.clone(),
                    athlete_id: athlete.athlete_id.clone(),
                    athlete_name: athlete.name.clone(),
                    name: format!("Peregrine Logo Challenge - {}", entry.park),
                    sport_type: SportType::Run,
                    start_date: LOGO_CHALLENGE_START.to_string(),
                    distance_miles: entry.distance_miles,
                    park: entry.park.clone(),
                    city: entry.city.clone(),
                    is_logo_challenge: true,
                    summary_polyline: entry.polyline.clone(),
                    start_latlng,
                    end_latlng,
                })
            })
            .collect()
    }
}

type LatLng = Option<[f64; 2]>;

/// First and last points of an encoded polyline (precision 5), as `[lat, lng]`.
fn route_endpoints(encoded: &str) -> Result<(LatLng, LatLng), LogoError> {
    let line =
        polyline::decode_polyline(encoded, 5).map_err(|e| LogoError::PolylineError(e.to_string()))?;
    let start = line.0.first().map(|c| [c.y, c.x]);
    let end = line.0.last().map(|c| [c.y, c.x]);
    Ok((start, end))
}

/// Errors from logo challenge data.
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("Failed to parse logo challenge data: {0}")]
    ParseError(String),

    #[error("Failed to decode polyline: {0}")]
    PolylineError(String),
}
