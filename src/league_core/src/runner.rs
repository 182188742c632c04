use log::{debug, info, warn};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

use crate::aggregate::{Aggregate, TrialVerdict};
use crate::coin::{CoinSource, RngCoins};
use crate::config::RunConfig;
use crate::constants::PARALLEL_BLOCK;
use crate::error::Result;
use crate::report::{ProgressObserver, Snapshot};
use crate::season::{run_one_trial, schedule_saturates};
use crate::stats::{confidence_interval, ConfidenceInterval};

/// What a finished run leaves behind.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub aggregate: Aggregate,
    pub elapsed: Duration,
    pub confidence: Option<ConfidenceInterval>,
}

impl RunSummary {
    pub fn expected_winning_score(&self) -> Option<f64> {
        self.aggregate.expected_winning_score()
    }
}

/// Run a full simulation with the production random source.
///
/// One thread draws every coin from a single ChaCha20 stream. More threads
/// give each trial its own generator, seeded in trial order from a master
/// stream, so a seeded parallel run is reproducible whatever the pool size.
pub fn simulate<O: ProgressObserver>(config: &RunConfig, observer: &mut O) -> Result<RunSummary> {
    if config.threads > 1 {
        run_parallel(config, observer)
    } else {
        let mut coins = RngCoins::chacha(config.seed);
        run(config, &mut coins, observer)
    }
}

/// Run every trial in sequence, drawing all coins from `coins`.
pub fn run<C: CoinSource, O: ProgressObserver>(
    config: &RunConfig,
    coins: &mut C,
    observer: &mut O,
) -> Result<RunSummary> {
    let start = begin(config)?;
    let mut agg = Aggregate::new();

    for _ in 0..config.trials {
        let wins = run_one_trial(&config.league, config.termination, coins)?;
        let verdict = agg.record(&wins);
        checkpoint(&agg, verdict, config, observer)?;
    }

    finish(agg, start, config, observer)
}

/// Run trials on a rayon pool of `config.threads` workers.
///
/// Trials are resolved in blocks; each block's verdicts are folded into the
/// aggregate in trial order, so progress snapshots fire exactly where a
/// sequential run would put them.
pub fn run_parallel<O: ProgressObserver>(config: &RunConfig, observer: &mut O) -> Result<RunSummary> {
    let start = begin(config)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let mut master = RngCoins::chacha(config.seed).into_inner();
    let mut agg = Aggregate::new();
    let mut done = 0u64;

    while done < config.trials {
        let block = (config.trials - done).min(PARALLEL_BLOCK as u64) as usize;
        let verdicts = run_block(config, &mut master, block, &pool)?;

        for verdict in verdicts {
            agg.record_verdict(verdict);
            checkpoint(&agg, verdict, config, observer)?;
        }

        done += block as u64;
        debug!(
            "block done: {}/{} trials, {} clear winners",
            done, config.trials, agg.clear_winner_trials
        );
    }

    finish(agg, start, config, observer)
}

fn run_block(
    config: &RunConfig,
    master: &mut ChaCha20Rng,
    block: usize,
    pool: &rayon::ThreadPool,
) -> Result<Vec<TrialVerdict>> {
    let seeds: Vec<u64> = (0..block).map(|_| master.gen::<u64>()).collect();

    pool.install(|| {
        seeds
            .par_iter()
            .map(|&seed| {
                let mut coins = RngCoins::chacha(Some(seed));
                run_one_trial(&config.league, config.termination, &mut coins)
                    .map(|wins| TrialVerdict::of(&wins))
            })
            .collect()
    })
}

fn begin(config: &RunConfig) -> Result<Instant> {
    config.validate()?;

    let league = &config.league;
    info!(
        "simulating {} seasons: {} teams, {} games each, {} thread(s)",
        config.trials,
        league.team_count(),
        league.games_per_team(),
        config.threads
    );
    if !schedule_saturates(league, config.termination) {
        warn!(
            "the scheduler cannot give all {} teams {} games; seasons will end with a team short",
            league.team_count(),
            league.games_per_team()
        );
    }

    Ok(Instant::now())
}

fn checkpoint<O: ProgressObserver>(
    agg: &Aggregate,
    verdict: TrialVerdict,
    config: &RunConfig,
    observer: &mut O,
) -> Result<()> {
    if agg.report_due(verdict, config.report_on, config.report_every) {
        observer.on_snapshot(&Snapshot::progress(agg))?;
    }
    Ok(())
}

fn finish<O: ProgressObserver>(
    agg: Aggregate,
    start: Instant,
    config: &RunConfig,
    observer: &mut O,
) -> Result<RunSummary> {
    observer.on_snapshot(&Snapshot::finish(&agg, config.trials))?;
    let elapsed = start.elapsed();
    observer.on_finish(elapsed)?;

    let confidence = confidence_interval(&agg, config.confidence);
    match &confidence {
        Some(ci) => info!(
            "{} of {} trials had a clear winner; {:.0}% interval [{:.3}, {:.3}] (se {:.4})",
            agg.clear_winner_trials,
            agg.trials_run,
            ci.level * 100.0,
            ci.lower,
            ci.upper,
            ci.standard_error
        ),
        None => info!(
            "{} of {} trials had a clear winner",
            agg.clear_winner_trials, agg.trials_run
        ),
    }

    Ok(RunSummary {
        aggregate: agg,
        elapsed,
        confidence,
    })
}
