// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hash-derived random generators.
//!
//! Every generator is built fresh from a SHA-256 digest of a canonical
//! string key, so the same key always replays the same draw sequence and
//! no generator state is shared between calls.

use crate::models::SportType;
use crate::time_utils::format_local;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use sha2::{Digest, Sha256};

/// Generator type used for all synthetic data.
pub type SeededRng = Pcg64Mcg;

/// 128-bit seed from the leading digest bytes.
fn seed128(key: &str) -> [u8; 16] {
    let digest = Sha256::digest(key.as_bytes());
    let mut seed = [0u8; 16];
    seed.copy_from_slice(&digest[..16]);
    seed
}

/// Generator for an athlete's sport assignment.
pub fn capability_rng(athlete_id: &str) -> SeededRng {
    SeededRng::from_seed(seed128(athlete_id))
}

/// Key for the per-day decisions of one athlete.
pub fn day_key(athlete_id: &str, day: NaiveDate) -> String {
    format!("{}_{}", athlete_id, format_local(day.and_time(NaiveTime::MIN)))
}

/// Generator for the per-day decisions of one athlete.
pub fn day_rng(athlete_id: &str, day: NaiveDate) -> SeededRng {
    SeededRng::from_seed(seed128(&day_key(athlete_id, day)))
}

/// Key for a single activity.
pub fn activity_key(
    athlete_id: &str,
    start: NaiveDateTime,
    sport_type: SportType,
    index: usize,
) -> String {
    format!(
        "{}_{}_{}_{}",
        athlete_id,
        format_local(start),
        sport_type,
        index
    )
}

/// 32-bit activity seed: first four digest bytes, little-endian.
pub fn activity_seed(
    athlete_id: &str,
    start: NaiveDateTime,
    sport_type: SportType,
    index: usize,
) -> u32 {
    let digest = Sha256::digest(activity_key(athlete_id, start, sport_type, index).as_bytes());
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Generator for a single activity's metrics.
pub fn activity_rng(
    athlete_id: &str,
    start: NaiveDateTime,
    sport_type: SportType,
    index: usize,
) -> SeededRng {
    SeededRng::seed_from_u64(u64::from(activity_seed(
        athlete_id, start, sport_type, index,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_keys_are_canonical() {
        assert_eq!(day_key("athlete_001", day()), "athlete_001_2024-06-01T00:00:00");

        let start = day().and_hms_opt(7, 15, 0).unwrap();
        assert_eq!(
            activity_key("athlete_001", start, SportType::Ride, 3),
            "athlete_001_2024-06-01T07:15:00_Ride_3"
        );
    }

    #[test]
    fn test_same_key_replays_same_draws() {
        let mut a = day_rng("athlete_001", day());
        let mut b = day_rng("athlete_001", day());
        let draws_a: Vec<u64> = (0..8).map(|_| a.gen()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_different_keys_diverge() {
        let mut a = day_rng("athlete_001", day());
        let mut b = day_rng("athlete_002", day());
        let draws_a: Vec<u64> = (0..4).map(|_| a.gen()).collect();
        let draws_b: Vec<u64> = (0..4).map(|_| b.gen()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_activity_seed_depends_on_every_component() {
        let start = day().and_hms_opt(9, 0, 0).unwrap();
        let base = activity_seed("athlete_001", start, SportType::Run, 0);

        assert_eq!(base, activity_seed("athlete_001", start, SportType::Run, 0));
        assert_ne!(base, activity_seed("athlete_001", start, SportType::Run, 1));
        assert_ne!(base, activity_seed("athlete_001", start, SportType::Walk, 0));
        assert_ne!(base, activity_seed("athlete_002", start, SportType::Run, 0));
    }
}
