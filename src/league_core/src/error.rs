use thiserror::Error;

/// Everything that can go wrong between startup and the final report.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("a league needs at least 2 teams, got {0}")]
    InvalidTeamCount(usize),

    #[error("each team must play at least 1 game, got {0}")]
    InvalidGamesPerTeam(u32),

    #[error("at least 1 trial is required, got {0}")]
    InvalidTrialCount(u64),

    #[error("report interval must be at least 1, got {0}")]
    InvalidReportInterval(u64),

    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    #[error("confidence level must lie strictly between 0 and 1, got {0}")]
    InvalidConfidenceLevel(f64),

    /// The random source ran dry. Fatal: a trial cannot be resolved without coins.
    #[error("random source exhausted after {0} outcomes")]
    CoinsExhausted(u64),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
