// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roster-wide queries over generated histories.
//!
//! Every query regenerates the histories it needs. Unknown athletes have no
//! history rather than being an error.

use crate::models::{ActivityRecord, Athlete, ClubStats, SportType};
use crate::services::capability::resolve;
use crate::services::synthesizer::generate_history;
use crate::services::RosterService;
use crate::time_utils::DateRange;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Athlete with the sports they practice.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteProfile {
    #[serde(flatten)]
    pub athlete: Athlete,
    pub sports: Vec<SportType>,
}

/// Case-insensitive sport filter; `None` matches everything and an unknown
/// sport matches nothing.
fn matches_sport(activity: &ActivityRecord, sport_type: Option<&str>) -> bool {
    match sport_type {
        None => true,
        Some(raw) => raw
            .parse::<SportType>()
            .is_ok_and(|s| s == activity.sport_type),
    }
}

pub fn athlete_profile(roster: &RosterService, athlete_id: &str) -> Option<AthleteProfile> {
    let athlete = roster.get(athlete_id)?;
    Some(AthleteProfile {
        athlete: athlete.clone(),
        sports: resolve(athlete_id).into(),
    })
}

/// History for one athlete, optionally filtered by sport.
pub fn athlete_activities(
    roster: &RosterService,
    athlete_id: &str,
    range: DateRange,
    sport_type: Option<&str>,
) -> Vec<ActivityRecord> {
    let Some(athlete) = roster.get(athlete_id) else {
        tracing::debug!(athlete_id, "Unknown athlete, returning empty history");
        return Vec::new();
    };

    let mut activities = generate_history(athlete, range);
    activities.retain(|a| matches_sport(a, sport_type));

    tracing::debug!(
        athlete_id,
        days = range.num_days(),
        count = activities.len(),
        "Generated athlete activities"
    );
    activities
}

fn roster_activities(
    roster: &RosterService,
    office: Option<&str>,
    sport_type: Option<&str>,
    range: DateRange,
) -> Vec<ActivityRecord> {
    roster
        .by_office(office)
        .flat_map(|athlete| generate_history(athlete, range))
        .filter(|a| matches_sport(a, sport_type))
        .collect()
}

/// Most recent activities across the roster, newest first.
///
/// Ties on start time keep roster order.
pub fn club_activities(
    roster: &RosterService,
    office: Option<&str>,
    sport_type: Option<&str>,
    range: DateRange,
    limit: usize,
) -> Vec<ActivityRecord> {
    let mut activities = roster_activities(roster, office, sport_type, range);
    let total = activities.len();

    // Canonical timestamps sort chronologically as strings.
    activities.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    activities.truncate(limit);

    tracing::debug!(
        office = ?office,
        sport_type = ?sport_type,
        total,
        returned = activities.len(),
        "Generated club activities"
    );
    activities
}

/// Aggregate over every matching activity.
pub fn club_stats(roster: &RosterService, office: Option<&str>, range: DateRange) -> ClubStats {
    let stats: ClubStats = roster_activities(roster, office, None, range)
        .iter()
        .collect();

    tracing::debug!(
        office = ?office,
        total_activities = stats.total_activities,
        "Computed club stats"
    );
    stats
}
