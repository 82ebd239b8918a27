// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public club API routes.

use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, Athlete, LogoChallenge, StatsSummary};
use crate::services::club::{self, AthleteProfile};
use crate::services::OfficeCount;
use crate::time_utils::{parse_date, DateRange};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1000;

/// Club API routes. All are read-only and unauthenticated.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_root))
        .route("/athletes", get(get_athletes))
        .route("/athletes/{athlete_id}", get(get_athlete))
        .route("/athletes/{athlete_id}/activities", get(get_athlete_activities))
        .route("/activities", get(get_activities))
        .route("/stats", get(get_stats))
        .route("/logo-challenge", get(get_logo_challenge))
        .route("/offices", get(get_offices))
}

/// Treat `?param=` the same as an absent parameter.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve the requested range, filling gaps from the configured default and
/// bounding its length.
fn date_range(state: &AppState, start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
    let defaults = state.config.default_range;
    let start = start
        .map(|raw| parse_date("start_date", raw))
        .transpose()?
        .unwrap_or(defaults.start);
    let end = end
        .map(|raw| parse_date("end_date", raw))
        .transpose()?
        .unwrap_or(defaults.end);
    Ok(DateRange::new(start, end).within(state.config.max_range_days)?)
}

/// Run CPU-bound generation off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Generation task failed: {}", e)))
}

// ─── Service Info ────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub athletes: u32,
    pub date_range: String,
}

async fn get_root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    let range = state.config.default_range;
    Json(RootResponse {
        name: "Peregrine Run Club API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        athletes: state.roster.athletes().len() as u32,
        date_range: format!("{} to {}", range.start, range.end),
    })
}

// ─── Athletes ────────────────────────────────────────────────

#[derive(Deserialize)]
struct OfficeQuery {
    /// Filter by office (case-insensitive)
    office: Option<String>,
}

/// List athletes, optionally filtered by office.
async fn get_athletes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OfficeQuery>,
) -> Json<Vec<Athlete>> {
    let office = non_empty(params.office);
    Json(state.roster.by_office(office.as_deref()).cloned().collect())
}

/// Get one athlete with their sports.
async fn get_athlete(
    State(state): State<Arc<AppState>>,
    Path(athlete_id): Path<String>,
) -> Result<Json<AthleteProfile>> {
    club::athlete_profile(&state.roster, &athlete_id)
        .map(Json)
        .ok_or(AppError::UnknownAthlete(athlete_id))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct AthleteActivitiesQuery {
    /// Start date (YYYY-MM-DD), inclusive
    start_date: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    end_date: Option<String>,
    /// Filter by activity type (case-insensitive)
    activity_type: Option<String>,
}

/// Activities for one athlete. Unknown athletes have no activities.
async fn get_athlete_activities(
    State(state): State<Arc<AppState>>,
    Path(athlete_id): Path<String>,
    Query(params): Query<AthleteActivitiesQuery>,
) -> Result<Json<Vec<ActivityRecord>>> {
    let range = date_range(
        &state,
        non_empty(params.start_date).as_deref(),
        non_empty(params.end_date).as_deref(),
    )?;
    let activity_type = non_empty(params.activity_type);

    tracing::debug!(
        athlete_id = %athlete_id,
        start = %range.start,
        end = %range.end,
        activity_type = ?activity_type,
        "Fetching athlete activities"
    );

    let activities = run_blocking(move || {
        club::athlete_activities(&state.roster, &athlete_id, range, activity_type.as_deref())
    })
    .await?;

    Ok(Json(activities))
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    office: Option<String>,
    activity_type: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    /// Maximum number of activities returned
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Most recent activities across the club, newest first.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<ActivityRecord>>> {
    if params.limit > MAX_LIMIT {
        return Err(AppError::BadRequest(format!(
            "'limit' must be at most {}",
            MAX_LIMIT
        )));
    }

    let range = date_range(
        &state,
        non_empty(params.start_date).as_deref(),
        non_empty(params.end_date).as_deref(),
    )?;
    let office = non_empty(params.office);
    let activity_type = non_empty(params.activity_type);
    let limit = params.limit as usize;
    if limit == 0 {
        return Ok(Json(Vec::new()));
    }

    tracing::debug!(
        office = ?office,
        activity_type = ?activity_type,
        start = %range.start,
        end = %range.end,
        limit,
        "Fetching club activities"
    );

    let activities = run_blocking(move || {
        club::club_activities(
            &state.roster,
            office.as_deref(),
            activity_type.as_deref(),
            range,
            limit,
        )
    })
    .await?;

    Ok(Json(activities))
}

// ─── Stats ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct StatsQuery {
    office: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Aggregate distance and time, grouped by activity type and office.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsSummary>> {
    let range = date_range(
        &state,
        non_empty(params.start_date).as_deref(),
        non_empty(params.end_date).as_deref(),
    )?;
    let office = non_empty(params.office);

    let stats =
        run_blocking(move || club::club_stats(&state.roster, office.as_deref(), range)).await?;

    Ok(Json(stats.summary()))
}

// ─── Static Showcase ─────────────────────────────────────────

async fn get_logo_challenge(State(state): State<Arc<AppState>>) -> Json<Vec<LogoChallenge>> {
    Json(state.logo_challenge.challenges(&state.roster))
}

async fn get_offices(State(state): State<Arc<AppState>>) -> Json<Vec<OfficeCount>> {
    Json(state.roster.offices())
}
