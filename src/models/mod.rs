// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod athlete;
pub mod logo;
pub mod stats;

pub use activity::{ActivityRecord, SportProfile, SportType};
pub use athlete::{Athlete, Office};
pub use logo::{LogoChallenge, LogoChallengeEntry};
pub use stats::{ClubStats, StatsSummary};
