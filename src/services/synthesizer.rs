// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Synthetic activity generation.
//!
//! Histories are never stored. Each request re-derives them from:
//! 1. The athlete's sport set (see [`crate::services::capability`])
//! 2. One day-seeded generator per calendar day, deciding whether the day
//!    has activities, which sport, and when
//! 3. One activity-seeded generator per activity, deriving its metrics
//!
//! Draw order inside each generator is fixed. Reordering draws changes every
//! value derived from that seed.

use crate::models::activity::TIME_OF_DAY;
use crate::models::{ActivityRecord, Athlete, SportType};
use crate::num_utils::round_to;
use crate::services::capability::{resolve, CapabilitySet};
use crate::services::seed::{activity_rng, day_rng};
use crate::time_utils::{format_compact_date, format_local, format_utc, DateRange};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

/// Probability that a day has a primary activity.
pub const ACTIVITY_PROBABILITY: f64 = 0.6;
/// Probability of a second activity on a day that has one.
pub const SECOND_ACTIVITY_PROBABILITY: f64 = 0.2;
/// Latest start hour of a second activity.
pub const LATEST_SECOND_HOUR: i64 = 22;

/// Build one activity. Reproducible from its own arguments alone.
///
/// Draw order: distance, average speed, elapsed offset, elevation (Run,
/// Ride and Hike only), time of day, title, max-speed factor, calorie factor.
pub fn synthesize(
    athlete: &Athlete,
    start: NaiveDateTime,
    sport_type: SportType,
    index: usize,
) -> ActivityRecord {
    let profile = sport_type.profile();
    let mut rng = activity_rng(&athlete.athlete_id, start, sport_type, index);

    let distance_miles = round_to(rng.gen_range(profile.min_dist..=profile.max_dist), 2);
    let average_speed_mph = round_to(rng.gen_range(profile.min_speed..=profile.max_speed), 1);
    // min_speed > 0 for every profile
    let moving_time_min = (distance_miles / average_speed_mph * 60.0).round() as u32;
    let elapsed_time_min = moving_time_min + rng.gen_range(0..=15);
    let total_elevation_gain_ft = if sport_type.has_elevation() {
        rng.gen_range(50..=500)
    } else {
        0
    };

    let time_of_day = TIME_OF_DAY[rng.gen_range(0..=3)];
    let titles = sport_type.titles(time_of_day);
    let name = titles[rng.gen_range(0..titles.len())].clone();

    let max_speed_mph = round_to(average_speed_mph * rng.gen_range(1.1..=1.4), 1);
    let calories = (distance_miles * rng.gen_range(80.0..=120.0)).round() as u32;

    ActivityRecord {
        activity_id: format!(
            "act_{}_{}_{}",
            athlete.athlete_id,
            format_compact_date(start.date()),
            index
        ),
        athlete_id: athlete.athlete_id.clone(),
        athlete_name: athlete.name.clone(),
        name,
        sport_type,
        start_date: format_utc(start),
        start_date_local: format_local(start),
        distance_miles,
        moving_time_min,
        elapsed_time_min,
        average_speed_mph,
        max_speed_mph,
        total_elevation_gain_ft,
        calories,
        is_logo_challenge: false,
        summary_polyline: None,
        office: athlete.office,
    }
}

fn at_hour(day: NaiveDate, hour: i64, minute: i64) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN) + Duration::hours(hour) + Duration::minutes(minute)
}

/// Activities for one athlete on one day: zero, one or two records.
///
/// Draw order on the day generator: occurrence, sport, hour, minute, then
/// second occurrence, second sport, hour offset. The second activity starts
/// on the hour and takes index `running_index + 1`.
pub fn expand_day(
    athlete: &Athlete,
    day: NaiveDate,
    sports: &CapabilitySet,
    running_index: usize,
) -> Vec<ActivityRecord> {
    let mut rng = day_rng(&athlete.athlete_id, day);

    if !rng.gen_bool(ACTIVITY_PROBABILITY) {
        return Vec::new();
    }

    let sport_type = sports.pick(&mut rng);
    let hour: i64 = rng.gen_range(5..=20);
    let minute: i64 = rng.gen_range(0..=59);

    let mut activities = Vec::with_capacity(2);
    activities.push(synthesize(
        athlete,
        at_hour(day, hour, minute),
        sport_type,
        running_index,
    ));

    if rng.gen_bool(SECOND_ACTIVITY_PROBABILITY) {
        let second_type = sports.pick_other(&mut rng, sport_type);
        let second_hour = (hour + rng.gen_range(4..=8)).min(LATEST_SECOND_HOUR);
        activities.push(synthesize(
            athlete,
            at_hour(day, second_hour, 0),
            second_type,
            running_index + 1,
        ));
    }

    activities
}

/// Full history for one athlete over an inclusive date range.
///
/// Indices count activities within this call only; a reversed range yields
/// an empty history.
pub fn generate_history(athlete: &Athlete, range: DateRange) -> Vec<ActivityRecord> {
    let sports = resolve(&athlete.athlete_id);
    let mut activities = Vec::new();

    for day in range.days() {
        let running_index = activities.len();
        activities.extend(expand_day(athlete, day, &sports, running_index));
    }

    activities
}
