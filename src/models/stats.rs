// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Club-wide statistics aggregates.
//!
//! Stats are folded from generated activities on every request; nothing is
//! stored between requests.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{ActivityRecord, Office, SportType};
use crate::num_utils::round_to;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Count and distance for one grouping key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GroupTotals {
    pub count: u32,
    pub distance_miles: f64,
}

impl GroupTotals {
    fn add(&mut self, distance_miles: f64) {
        self.count += 1;
        self.distance_miles += distance_miles;
    }
}

/// Running aggregate over a set of activities.
#[derive(Debug, Clone, Default)]
pub struct ClubStats {
    // ─── Totals ──────────────────────────────────────────────────
    pub total_activities: u32,
    /// Sum of distances (miles), unrounded
    pub total_distance_miles: f64,
    /// Sum of moving time (minutes)
    pub total_moving_minutes: u64,

    // ─── Breakdowns ──────────────────────────────────────────────
    pub by_activity_type: BTreeMap<SportType, GroupTotals>,
    pub by_office: BTreeMap<Office, GroupTotals>,
}

/// Serialized form of [`ClubStats`] with rounded totals.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsSummary {
    pub total_activities: u32,
    pub total_distance_miles: f64,
    pub total_time_hours: f64,
    pub by_activity_type: BTreeMap<SportType, GroupTotals>,
    pub by_office: BTreeMap<Office, GroupTotals>,
}

impl ClubStats {
    /// Fold one activity into the aggregate.
    pub fn update_from_activity(&mut self, activity: &ActivityRecord) {
        self.total_activities += 1;
        self.total_distance_miles += activity.distance_miles;
        self.total_moving_minutes += u64::from(activity.moving_time_min);

        self.by_activity_type
            .entry(activity.sport_type)
            .or_default()
            .add(activity.distance_miles);
        self.by_office
            .entry(activity.office)
            .or_default()
            .add(activity.distance_miles);
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total_activities: self.total_activities,
            total_distance_miles: round_to(self.total_distance_miles, 1),
            total_time_hours: round_to(self.total_moving_minutes as f64 / 60.0, 1),
            by_activity_type: round_groups(&self.by_activity_type),
            by_office: round_groups(&self.by_office),
        }
    }
}

fn round_groups<K: Ord + Copy>(groups: &BTreeMap<K, GroupTotals>) -> BTreeMap<K, GroupTotals> {
    groups
        .iter()
        .map(|(key, g)| {
            let totals = GroupTotals {
                count: g.count,
                distance_miles: round_to(g.distance_miles, 2),
            };
            (*key, totals)
        })
        .collect()
}

impl<'a> FromIterator<&'a ActivityRecord> for ClubStats {
    fn from_iter<I: IntoIterator<Item = &'a ActivityRecord>>(iter: I) -> Self {
        let mut stats = ClubStats::default();
        for activity in iter {
            stats.update_from_activity(activity);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_activity(sport: SportType, office: Office, distance: f64, moving: u32) -> ActivityRecord {
        ActivityRecord {
            activity_id: "act_test".to_string(),
            athlete_id: "athlete_test".to_string(),
            athlete_name: "Test Athlete".to_string(),
            name: format!("Test {}", sport),
            sport_type: sport,
            start_date: "2024-01-15T10:00:00Z".to_string(),
            start_date_local: "2024-01-15T10:00:00".to_string(),
            distance_miles: distance,
            moving_time_min: moving,
            elapsed_time_min: moving,
            average_speed_mph: 6.0,
            max_speed_mph: 7.0,
            total_elevation_gain_ft: 0,
            calories: 100,
            is_logo_challenge: false,
            summary_polyline: None,
            office,
        }
    }

    #[test]
    fn test_update_from_activity_basic() {
        let mut stats = ClubStats::default();
        stats.update_from_activity(&make_activity(SportType::Run, Office::SanFrancisco, 5.25, 45));

        assert_eq!(stats.total_activities, 1);
        assert_eq!(stats.total_distance_miles, 5.25);
        assert_eq!(stats.total_moving_minutes, 45);
        assert_eq!(stats.by_activity_type[&SportType::Run].count, 1);
        assert_eq!(stats.by_office[&Office::SanFrancisco].distance_miles, 5.25);
        assert!(!stats.by_office.contains_key(&Office::Remote));
    }

    #[test]
    fn test_groups_by_type_and_office() {
        let activities = [
            make_activity(SportType::Run, Office::SanFrancisco, 3.0, 30),
            make_activity(SportType::Ride, Office::SanFrancisco, 20.0, 60),
            make_activity(SportType::Run, Office::NewYorkCity, 4.0, 40),
        ];
        let stats: ClubStats = activities.iter().collect();

        assert_eq!(stats.total_activities, 3);
        assert_eq!(stats.by_activity_type[&SportType::Run].count, 2);
        assert_eq!(stats.by_activity_type[&SportType::Run].distance_miles, 7.0);
        assert_eq!(stats.by_office[&Office::SanFrancisco].count, 2);
        assert_eq!(stats.by_office[&Office::NewYorkCity].count, 1);
    }

    #[test]
    fn test_summary_rounds_totals() {
        let activities = [
            make_activity(SportType::Walk, Office::Remote, 1.26, 50),
            make_activity(SportType::Walk, Office::Remote, 2.13, 40),
        ];
        let summary = ClubStats::from_iter(activities.iter()).summary();

        assert_eq!(summary.total_distance_miles, 3.4);
        assert_eq!(summary.total_time_hours, 1.5);
        assert_eq!(summary.by_activity_type[&SportType::Walk].distance_miles, 3.39);
    }

    #[test]
    fn test_summary_serializes_named_keys() {
        let stats: ClubStats = [make_activity(SportType::Swim, Office::WashingtonDc, 1.0, 30)]
            .iter()
            .collect();
        let json = serde_json::to_value(stats.summary()).unwrap();

        assert_eq!(json["by_activity_type"]["Swim"]["count"], 1);
        assert_eq!(json["by_office"]["Washington DC"]["count"], 1);
    }
}
