// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - generation and query logic.

pub mod capability;
pub mod club;
pub mod logo;
pub mod roster;
pub mod seed;
pub mod synthesizer;

pub use capability::{resolve, CapabilitySet};
pub use logo::{LogoChallengeService, LogoError};
pub use roster::{OfficeCount, RosterError, RosterService};
pub use synthesizer::{expand_day, generate_history, synthesize};
