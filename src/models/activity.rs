// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Synthetic activity model and the static per-sport tables.

use crate::models::Office;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Sport type of an activity. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SportType {
    Run,
    Ride,
    Walk,
    Hike,
    Swim,
}

/// Inclusive distance (miles) and speed (mph) bounds for a sport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportProfile {
    pub min_dist: f64,
    pub max_dist: f64,
    pub min_speed: f64,
    pub max_speed: f64,
}

/// Time-of-day labels, indexed by a generator draw in `0..=3`.
pub const TIME_OF_DAY: [&str; 4] = ["Morning", "Lunch", "Afternoon", "Evening"];

impl SportType {
    /// All sport types, in profile-table order.
    pub const ALL: [SportType; 5] = [
        SportType::Run,
        SportType::Ride,
        SportType::Walk,
        SportType::Hike,
        SportType::Swim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SportType::Run => "Run",
            SportType::Ride => "Ride",
            SportType::Walk => "Walk",
            SportType::Hike => "Hike",
            SportType::Swim => "Swim",
        }
    }

    pub fn profile(self) -> SportProfile {
        let (min_dist, max_dist, min_speed, max_speed) = match self {
            SportType::Run => (2.0, 15.0, 5.0, 10.0),
            SportType::Ride => (5.0, 50.0, 10.0, 25.0),
            SportType::Walk => (1.0, 6.0, 2.0, 4.0),
            SportType::Hike => (3.0, 12.0, 2.0, 4.0),
            SportType::Swim => (0.25, 2.0, 1.0, 3.0),
        };
        SportProfile {
            min_dist,
            max_dist,
            min_speed,
            max_speed,
        }
    }

    /// Whether activities of this sport record elevation gain.
    pub fn has_elevation(self) -> bool {
        matches!(self, SportType::Run | SportType::Ride | SportType::Hike)
    }

    /// Title templates for this sport. The first Run/Ride/Walk entry
    /// combines the time-of-day label with the sport name.
    pub fn titles(self, time_of_day: &str) -> Vec<String> {
        let fixed: &[&str] = match self {
            SportType::Run => &["Easy Run", "Tempo Run", "Long Run", "Recovery Run"],
            SportType::Ride => &["Commute", "Weekend Ride", "Hill Climb", "Easy Spin"],
            SportType::Walk => &["Lunch Walk", "Dog Walk", "Evening Stroll"],
            SportType::Hike => &["Trail Hike", "Weekend Hike", "Mountain Trek", "Nature Walk"],
            SportType::Swim => &["Pool Swim", "Open Water", "Laps", "Recovery Swim"],
        };

        let mut titles = Vec::with_capacity(fixed.len() + 1);
        if matches!(self, SportType::Run | SportType::Ride | SportType::Walk) {
            titles.push(format!("{} {}", time_of_day, self));
        }
        titles.extend(fixed.iter().map(|t| t.to_string()));
        titles
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown activity type: {0}")]
pub struct UnknownSportType(pub String);

impl FromStr for SportType {
    type Err = UnknownSportType;

    /// Case-insensitive, matching how query filters are compared.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SportType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSportType(s.to_string()))
    }
}

/// One synthesized activity, shaped like a fitness-tracker API record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRecord {
    /// `act_{athlete_id}_{YYYYMMDD}_{index}`
    pub activity_id: String,
    pub athlete_id: String,
    pub athlete_name: String,
    /// Activity title
    pub name: String,
    #[serde(rename = "type")]
    pub sport_type: SportType,
    /// Start timestamp, RFC 3339 with `Z` suffix
    pub start_date: String,
    /// Same wall-clock time without a zone suffix
    pub start_date_local: String,
    pub distance_miles: f64,
    pub moving_time_min: u32,
    pub elapsed_time_min: u32,
    pub average_speed_mph: f64,
    pub max_speed_mph: f64,
    pub total_elevation_gain_ft: u32,
    pub calories: u32,
    pub is_logo_challenge: bool,
    pub summary_polyline: Option<String>,
    pub office: Office,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("run".parse::<SportType>().unwrap(), SportType::Run);
        assert_eq!("SWIM".parse::<SportType>().unwrap(), SportType::Swim);
        assert_eq!(" Hike ".parse::<SportType>().unwrap(), SportType::Hike);
        assert!("Rowing".parse::<SportType>().is_err());
    }

    #[test]
    fn test_profiles_are_well_formed() {
        for sport in SportType::ALL {
            let p = sport.profile();
            assert!(p.min_dist > 0.0 && p.min_dist < p.max_dist, "{sport}");
            assert!(p.min_speed > 0.0 && p.min_speed < p.max_speed, "{sport}");
        }
    }

    #[test]
    fn test_elevation_sports() {
        assert!(SportType::Run.has_elevation());
        assert!(SportType::Ride.has_elevation());
        assert!(SportType::Hike.has_elevation());
        assert!(!SportType::Walk.has_elevation());
        assert!(!SportType::Swim.has_elevation());
    }

    #[test]
    fn test_titles_use_time_of_day() {
        let titles = SportType::Ride.titles("Evening");
        assert_eq!(titles[0], "Evening Ride");
        assert_eq!(titles.len(), 5);

        let titles = SportType::Swim.titles("Evening");
        assert!(titles.iter().all(|t| !t.contains("Evening")));
        assert_eq!(titles.len(), 4);
    }

    #[test]
    fn test_sport_type_serializes_as_name() {
        let json = serde_json::to_string(&SportType::Hike).unwrap();
        assert_eq!(json, "\"Hike\"");
    }
}
