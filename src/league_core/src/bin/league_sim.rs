use clap::Parser;
use league_core::{
    simulate, ConsoleReporter, LeagueConfig, LeagueError, ReportTrigger, RunConfig, Termination,
    CONFIDENCE_LEVEL, GAMES_PER_TEAM, REPORT_EVERY, TEAM_COUNT, TRIAL_COUNT,
};

/// Expected wins of the first-place team in a division of evenly matched teams
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Simulates full seasons of a division where every game is a coin flip \
                  and reports the mean win total of seasons with a sole first-place team."
)]
struct Args {
    /// Teams in the division
    #[arg(short = 't', long = "teams", env = "LEAGUE_TEAMS", default_value_t = TEAM_COUNT)]
    teams: usize,

    /// Games each team plays
    #[arg(short = 'g', long = "games", env = "LEAGUE_GAMES", default_value_t = GAMES_PER_TEAM)]
    games: u32,

    /// Seasons to simulate
    #[arg(short = 'n', long = "trials", env = "LEAGUE_TRIALS", default_value_t = TRIAL_COUNT)]
    trials: u64,

    /// Progress line interval
    #[arg(short = 'r', long = "report-every", env = "LEAGUE_REPORT_EVERY", default_value_t = REPORT_EVERY)]
    report_every: u64,

    /// Counter the progress interval applies to
    #[arg(long = "report-on", env = "LEAGUE_REPORT_ON", value_enum, default_value_t = ReportTrigger::ClearWinners)]
    report_on: ReportTrigger,

    /// When a season counts as finished
    #[arg(long = "termination", env = "LEAGUE_TERMINATION", value_enum, default_value_t = Termination::AllTeams)]
    termination: Termination,

    /// Optional random seed for reproducibility
    #[arg(short = 's', long = "seed", env = "LEAGUE_SEED")]
    seed: Option<u64>,

    /// Worker threads; more than one runs trials in parallel
    #[arg(short = 'j', long = "threads", env = "LEAGUE_THREADS", default_value_t = 1)]
    threads: usize,

    /// Confidence level of the interval logged at the end
    #[arg(long = "confidence", env = "LEAGUE_CONFIDENCE", default_value_t = CONFIDENCE_LEVEL)]
    confidence: f64,
}

impl TryFrom<Args> for RunConfig {
    type Error = LeagueError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let league = LeagueConfig::new(args.teams, args.games)?;
        let config = RunConfig {
            league,
            trials: args.trials,
            report_every: args.report_every,
            seed: args.seed,
            threads: args.threads,
            termination: args.termination,
            report_on: args.report_on,
            confidence: args.confidence,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);
    let config = RunConfig::try_from(args)?;

    let mut reporter = ConsoleReporter::stdout();
    simulate(&config, &mut reporter)?;

    Ok(())
}
