// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Club member model.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Home office of a club member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Office {
    #[serde(rename = "San Francisco")]
    SanFrancisco,
    #[serde(rename = "Washington DC")]
    WashingtonDc,
    #[serde(rename = "New York City")]
    NewYorkCity,
    #[serde(rename = "Remote")]
    Remote,
}

impl Office {
    pub fn as_str(self) -> &'static str {
        match self {
            Office::SanFrancisco => "San Francisco",
            Office::WashingtonDc => "Washington DC",
            Office::NewYorkCity => "New York City",
            Office::Remote => "Remote",
        }
    }

    /// Case-insensitive comparison against a query parameter.
    pub fn matches(self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A club member from the static roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Athlete {
    pub athlete_id: String,
    pub name: String,
    pub office: Office,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_round_trips_display_name() {
        let json = serde_json::to_string(&Office::WashingtonDc).unwrap();
        assert_eq!(json, "\"Washington DC\"");

        let office: Office = serde_json::from_str("\"New York City\"").unwrap();
        assert_eq!(office, Office::NewYorkCity);
    }

    #[test]
    fn test_office_matches_ignores_case() {
        assert!(Office::SanFrancisco.matches("san francisco"));
        assert!(Office::Remote.matches("REMOTE"));
        assert!(!Office::Remote.matches("San Francisco"));
    }
}
