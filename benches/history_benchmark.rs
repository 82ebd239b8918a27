use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use run_club_api::services::club::{club_activities, club_stats};
use run_club_api::services::{generate_history, RosterService};
use run_club_api::time_utils::DateRange;

fn benchmark_generation(c: &mut Criterion) {
    let roster = RosterService::builtin().expect("Failed to load roster");
    let athlete = roster.get("athlete_001").expect("athlete_001 on roster").clone();

    let two_years = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    );
    let one_month = DateRange::new(
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    );

    let mut group = c.benchmark_group("history_generation");

    group.bench_function("single_athlete_two_years", |b| {
        b.iter(|| generate_history(black_box(&athlete), black_box(two_years)))
    });

    group.bench_function("club_activities_one_month", |b| {
        b.iter(|| club_activities(&roster, None, None, black_box(one_month), 100))
    });

    group.bench_function("club_stats_one_month", |b| {
        b.iter(|| club_stats(&roster, None, black_box(one_month)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_generation);
criterion_main!(benches);
