//! League Core - Monte Carlo estimate of a division winner's expected wins.
//!
//! A division of equally matched teams plays a greedy round-robin season
//! where every game is a fair coin flip. Repeating the season many times
//! gives the expected win total of the team that finishes alone in first.
//!
//! Python bindings are available behind the `python` feature.

pub mod aggregate;
pub mod coin;
pub mod config;
pub mod constants;
pub mod error;
#[cfg(feature = "python")]
pub mod python;
pub mod report;
pub mod runner;
pub mod season;
pub mod stats;

pub use aggregate::{Aggregate, TrialVerdict};
pub use coin::{CoinSource, RngCoins, ScriptedCoins};
pub use config::{LeagueConfig, ReportTrigger, RunConfig, Termination};
pub use constants::{CONFIDENCE_LEVEL, GAMES_PER_TEAM, REPORT_EVERY, TEAM_COUNT, TRIAL_COUNT};
pub use error::{LeagueError, Result};
pub use report::{ConsoleReporter, ProgressObserver, Silent, Snapshot, SnapshotKind};
pub use runner::{run, run_parallel, simulate, RunSummary};
pub use season::{play_season, run_one_trial, schedule_saturates, SeasonRecord};
pub use stats::{confidence_interval, ConfidenceInterval};
