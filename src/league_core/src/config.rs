use clap::ValueEnum;

use crate::constants::{
    CONFIDENCE_LEVEL, GAMES_PER_TEAM, REPORT_EVERY, TEAM_COUNT, TRIAL_COUNT,
};
use crate::error::{LeagueError, Result};

/// Shape of the division: how many teams, and how many games each plays.
///
/// Construct through [`LeagueConfig::new`], which rejects leagues that
/// cannot hold a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeagueConfig {
    team_count: usize,
    games_per_team: u32,
}

impl LeagueConfig {
    pub fn new(team_count: usize, games_per_team: u32) -> Result<Self> {
        if team_count < 2 {
            return Err(LeagueError::InvalidTeamCount(team_count));
        }
        if games_per_team < 1 {
            return Err(LeagueError::InvalidGamesPerTeam(games_per_team));
        }
        Ok(LeagueConfig {
            team_count,
            games_per_team,
        })
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    pub fn games_per_team(&self) -> u32 {
        self.games_per_team
    }

    /// Games in a fully saturated season (each game involves two teams).
    pub fn total_games(&self) -> u64 {
        self.team_count as u64 * self.games_per_team as u64 / 2
    }
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig {
            team_count: TEAM_COUNT,
            games_per_team: GAMES_PER_TEAM,
        }
    }
}

/// When a season is considered finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Termination {
    /// Every team has played its full quota (or no further game can be scheduled).
    #[default]
    AllTeams,
    /// Legacy loop: only the highest-indexed team is checked, and a team that
    /// is already full keeps playing while it scans, so it can exceed its quota.
    LastTeam,
}

/// Which counter decides that a progress snapshot is due.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportTrigger {
    /// Number of clear-winner trials seen so far.
    #[default]
    ClearWinners,
    /// 1-based ordinal of the trial just completed.
    TrialOrdinal,
}

/// Everything a run needs besides the random source.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub league: LeagueConfig,
    pub trials: u64,
    pub report_every: u64,
    pub seed: Option<u64>,
    pub threads: usize,
    pub termination: Termination,
    pub report_on: ReportTrigger,
    pub confidence: f64,
}

impl RunConfig {
    pub fn new(league: LeagueConfig, trials: u64) -> Self {
        RunConfig {
            league,
            trials,
            ..RunConfig::default()
        }
    }

    /// Check the run-level settings. The league shape is already valid by construction.
    pub fn validate(&self) -> Result<()> {
        if self.trials < 1 {
            return Err(LeagueError::InvalidTrialCount(self.trials));
        }
        if self.report_every < 1 {
            return Err(LeagueError::InvalidReportInterval(self.report_every));
        }
        if self.threads < 1 {
            return Err(LeagueError::InvalidThreadCount(self.threads));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(LeagueError::InvalidConfidenceLevel(self.confidence));
        }
        Ok(())
    }

    pub fn with_report_every(mut self, report_every: u64) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    pub fn with_report_on(mut self, report_on: ReportTrigger) -> Self {
        self.report_on = report_on;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            league: LeagueConfig::default(),
            trials: TRIAL_COUNT,
            report_every: REPORT_EVERY,
            seed: None,
            threads: 1,
            termination: Termination::default(),
            report_on: ReportTrigger::default(),
            confidence: CONFIDENCE_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let config = RunConfig::default();
        assert_eq!(config.league.team_count(), 5);
        assert_eq!(config.league.games_per_team(), 162);
        assert_eq!(config.trials, 1_000_000);
        assert_eq!(config.report_every, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_leagues() {
        assert!(matches!(
            LeagueConfig::new(1, 162),
            Err(LeagueError::InvalidTeamCount(1))
        ));
        assert!(matches!(
            LeagueConfig::new(0, 162),
            Err(LeagueError::InvalidTeamCount(0))
        ));
        assert!(matches!(
            LeagueConfig::new(5, 0),
            Err(LeagueError::InvalidGamesPerTeam(0))
        ));
        assert!(LeagueConfig::new(2, 1).is_ok());
    }

    #[test]
    fn test_rejects_bad_run_settings() {
        let league = LeagueConfig::default();
        assert!(matches!(
            RunConfig::new(league, 0).validate(),
            Err(LeagueError::InvalidTrialCount(0))
        ));
        assert!(matches!(
            RunConfig::new(league, 10).with_report_every(0).validate(),
            Err(LeagueError::InvalidReportInterval(0))
        ));
        assert!(matches!(
            RunConfig::new(league, 10).with_threads(0).validate(),
            Err(LeagueError::InvalidThreadCount(0))
        ));

        let mut config = RunConfig::new(league, 10);
        config.confidence = 1.0;
        assert!(matches!(
            config.validate(),
            Err(LeagueError::InvalidConfidenceLevel(_))
        ));
    }

    #[test]
    fn test_total_games() {
        assert_eq!(LeagueConfig::default().total_games(), 405);
        assert_eq!(LeagueConfig::new(2, 1).unwrap().total_games(), 1);
    }
}
