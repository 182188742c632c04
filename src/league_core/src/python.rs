use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::coin::RngCoins;
use crate::config::{LeagueConfig, RunConfig};
use crate::constants::{GAMES_PER_TEAM, REPORT_EVERY, TEAM_COUNT, TRIAL_COUNT};
use crate::error::LeagueError;
use crate::report::Silent;
use crate::runner::{self, RunSummary};
use crate::season;

impl From<LeagueError> for PyErr {
    fn from(err: LeagueError) -> PyErr {
        match err {
            LeagueError::InvalidTeamCount(_)
            | LeagueError::InvalidGamesPerTeam(_)
            | LeagueError::InvalidTrialCount(_)
            | LeagueError::InvalidReportInterval(_)
            | LeagueError::InvalidThreadCount(_)
            | LeagueError::InvalidConfidenceLevel(_) => PyValueError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Totals of a finished simulation.
#[pyclass(name = "RunSummary")]
#[derive(Clone, Debug)]
pub struct PyRunSummary {
    #[pyo3(get)]
    pub trials_run: u64,

    #[pyo3(get)]
    pub clear_winner_trials: u64,

    #[pyo3(get)]
    pub total_winning_score: u64,

    /// None if no trial had a clear winner
    #[pyo3(get)]
    pub expected_winning_score: Option<f64>,

    #[pyo3(get)]
    pub ci_lower: Option<f64>,

    #[pyo3(get)]
    pub ci_upper: Option<f64>,

    #[pyo3(get)]
    pub elapsed_ms: u64,
}

#[pymethods]
impl PyRunSummary {
    fn __repr__(&self) -> String {
        match self.expected_winning_score {
            Some(expected) => format!(
                "RunSummary(expected_winning_score={:.4}, clear_winner_trials={}, trials_run={})",
                expected, self.clear_winner_trials, self.trials_run
            ),
            None => format!("RunSummary(no clear winner, trials_run={})", self.trials_run),
        }
    }
}

impl From<RunSummary> for PyRunSummary {
    fn from(summary: RunSummary) -> Self {
        let agg = &summary.aggregate;
        PyRunSummary {
            trials_run: agg.trials_run,
            clear_winner_trials: agg.clear_winner_trials,
            total_winning_score: agg.total_winning_score,
            expected_winning_score: agg.expected_winning_score(),
            ci_lower: summary.confidence.map(|ci| ci.lower),
            ci_upper: summary.confidence.map(|ci| ci.upper),
            elapsed_ms: summary.elapsed.as_millis() as u64,
        }
    }
}

/// Simulate one season and return the per-team win counts.
#[pyfunction]
#[pyo3(name = "run_one_trial", signature = (team_count = TEAM_COUNT, games_per_team = GAMES_PER_TEAM, seed = None))]
fn py_run_one_trial(team_count: usize, games_per_team: u32, seed: Option<u64>) -> PyResult<Vec<u32>> {
    let league = LeagueConfig::new(team_count, games_per_team)?;
    let mut coins = RngCoins::chacha(seed);
    Ok(season::run_one_trial(&league, Default::default(), &mut coins)?)
}

/// Run a full simulation without console output. Releases the GIL while running.
#[pyfunction]
#[pyo3(name = "simulate", signature = (
    team_count = TEAM_COUNT,
    games_per_team = GAMES_PER_TEAM,
    trials = TRIAL_COUNT,
    seed = None,
    threads = 1,
    report_every = REPORT_EVERY
))]
fn py_simulate(
    py: Python<'_>,
    team_count: usize,
    games_per_team: u32,
    trials: u64,
    seed: Option<u64>,
    threads: usize,
    report_every: u64,
) -> PyResult<PyRunSummary> {
    let league = LeagueConfig::new(team_count, games_per_team)?;
    let mut config = RunConfig::new(league, trials)
        .with_threads(threads)
        .with_report_every(report_every);
    config.seed = seed;

    let summary = py.allow_threads(move || runner::simulate(&config, &mut Silent))?;
    Ok(summary.into())
}

/// Python module definition
#[pymodule]
fn league_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRunSummary>()?;

    m.add_function(wrap_pyfunction!(py_run_one_trial, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate, m)?)?;

    m.add("TEAM_COUNT", TEAM_COUNT)?;
    m.add("GAMES_PER_TEAM", GAMES_PER_TEAM)?;
    m.add("TRIAL_COUNT", TRIAL_COUNT)?;
    m.add("REPORT_EVERY", REPORT_EVERY)?;

    Ok(())
}
