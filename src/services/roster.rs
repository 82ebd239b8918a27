// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static club roster.

use crate::models::{Athlete, Office};
use serde::Serialize;
use std::fs;
use std::path::Path;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Roster bundled with the binary.
const BUILTIN_ROSTER: &str = include_str!("../../data/roster.json");

/// Number of athletes in one office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OfficeCount {
    pub office: Office,
    pub athlete_count: u32,
}

/// Lookup over the club's members.
#[derive(Debug, Default, Clone)]
pub struct RosterService {
    athletes: Vec<Athlete>,
}

impl RosterService {
    /// The roster compiled into the binary.
    pub fn builtin() -> Result<Self, RosterError> {
        Self::load_from_json(BUILTIN_ROSTER)
    }

    /// Load a roster from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| RosterError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a roster from a JSON array of athletes.
    pub fn load_from_json(json_data: &str) -> Result<Self, RosterError> {
        let athletes: Vec<Athlete> =
            serde_json::from_str(json_data).map_err(|e| RosterError::ParseError(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for athlete in &athletes {
            if !seen.insert(athlete.athlete_id.as_str()) {
                return Err(RosterError::DuplicateAthlete(athlete.athlete_id.clone()));
            }
        }

        tracing::debug!(count = athletes.len(), "Loaded roster");
        Ok(Self { athletes })
    }

    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    pub fn get(&self, athlete_id: &str) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.athlete_id == athlete_id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.name == name)
    }

    /// Athletes in an office, or everyone when `office` is `None`.
    pub fn by_office<'a>(&'a self, office: Option<&'a str>) -> impl Iterator<Item = &'a Athlete> {
        self.athletes
            .iter()
            .filter(move |a| office.map_or(true, |o| a.office.matches(o)))
    }

    /// Athlete counts per office, in first-seen roster order.
    pub fn offices(&self) -> Vec<OfficeCount> {
        let mut counts: Vec<OfficeCount> = Vec::new();
        for athlete in &self.athletes {
            match counts.iter_mut().find(|c| c.office == athlete.office) {
                Some(entry) => entry.athlete_count += 1,
                None => counts.push(OfficeCount {
                    office: athlete.office,
                    athlete_count: 1,
                }),
            }
        }
        counts
    }
}

/// Errors from roster loading.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse roster: {0}")]
    ParseError(String),

    #[error("Duplicate athlete id: {0}")]
    DuplicateAthlete(String),
}
