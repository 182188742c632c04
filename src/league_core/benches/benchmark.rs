use criterion::{black_box, criterion_group, criterion_main, Criterion};
use league_core::aggregate::Aggregate;
use league_core::coin::RngCoins;
use league_core::config::{LeagueConfig, RunConfig, Termination};
use league_core::report::Silent;
use league_core::runner::simulate;
use league_core::season::run_one_trial;

fn bench_single_season(c: &mut Criterion) {
    let league = LeagueConfig::default();
    let mut coins = RngCoins::chacha(Some(42));

    c.bench_function("season_5_teams_162_games", |b| {
        b.iter(|| run_one_trial(black_box(&league), Termination::AllTeams, &mut coins))
    });
}

fn bench_record_trial(c: &mut Criterion) {
    let wins = [88u32, 79, 92, 70, 76];

    c.bench_function("aggregate_record", |b| {
        let mut agg = Aggregate::new();
        b.iter(|| agg.record(black_box(&wins)))
    });
}

fn bench_runs(c: &mut Criterion) {
    let sequential = RunConfig::new(LeagueConfig::default(), 1000)
        .with_report_every(u64::MAX)
        .with_seed(42);
    let parallel = sequential.clone().with_threads(4);

    c.bench_function("run_1000_seasons_sequential", |b| {
        b.iter(|| simulate(black_box(&sequential), &mut Silent))
    });

    c.bench_function("run_1000_seasons_4_threads", |b| {
        b.iter(|| simulate(black_box(&parallel), &mut Silent))
    });
}

criterion_group!(benches, bench_single_season, bench_record_trial, bench_runs);
criterion_main!(benches);
