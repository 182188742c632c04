/// Teams in the canonical division (the "AL East")
pub const TEAM_COUNT: usize = 5;

/// Games each team plays in a regular season
pub const GAMES_PER_TEAM: u32 = 162;

/// Seasons simulated in a default run
pub const TRIAL_COUNT: u64 = 1_000_000;

/// Progress snapshot interval
pub const REPORT_EVERY: u64 = 10_000;

/// Confidence level for the interval logged at the end of a run
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Trials handed to the thread pool per block in parallel runs
pub const PARALLEL_BLOCK: usize = 4_096;
