use std::io::Write;
use std::time::Duration;

use crate::aggregate::Aggregate;
use crate::error::Result;

/// Where in the run a snapshot was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Periodic checkpoint after a clear-winner trial
    Progress,
    /// End of the run
    Final,
}

/// Point-in-time view of the aggregate, handed to observers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub kind: SnapshotKind,

    /// Mean winning score, `None` if no trial had a clear winner yet
    pub expected_winning_score: Option<f64>,

    /// Trial count printed as "based on N trials": the 1-based ordinal of the
    /// triggering trial for progress snapshots, the requested trial count for
    /// the final one
    pub based_on: u64,

    /// Clear-winner trials folded in when the snapshot was taken
    pub clear_winner_trials: u64,
}

impl Snapshot {
    pub fn progress(agg: &Aggregate) -> Self {
        Snapshot {
            kind: SnapshotKind::Progress,
            expected_winning_score: agg.expected_winning_score(),
            based_on: agg.trials_run,
            clear_winner_trials: agg.clear_winner_trials,
        }
    }

    pub fn finish(agg: &Aggregate, trials: u64) -> Self {
        Snapshot {
            kind: SnapshotKind::Final,
            expected_winning_score: agg.expected_winning_score(),
            based_on: trials,
            clear_winner_trials: agg.clear_winner_trials,
        }
    }

    /// Human-readable line for this snapshot.
    pub fn line(&self) -> String {
        match self.expected_winning_score {
            Some(expected) => format!(
                "Expected winning score {:.2} based on {} trials",
                expected, self.based_on
            ),
            None => format!("No clear winner in {} trials", self.based_on),
        }
    }
}

/// Receives the running statistics of a simulation as it progresses.
pub trait ProgressObserver {
    fn on_snapshot(&mut self, snapshot: &Snapshot) -> Result<()>;

    fn on_finish(&mut self, _elapsed: Duration) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl ProgressObserver for Silent {
    fn on_snapshot(&mut self, _snapshot: &Snapshot) -> Result<()> {
        Ok(())
    }
}

/// Writes progress lines and the elapsed time to a stream (normally stdout).
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReporter::new(std::io::stdout())
    }
}

impl<W: Write> ProgressObserver for ConsoleReporter<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        writeln!(self.out, "{}", snapshot.line())?;
        Ok(())
    }

    fn on_finish(&mut self, elapsed: Duration) -> Result<()> {
        writeln!(self.out, "Elapsed time {} ms", elapsed.as_millis())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &mut O {
    fn on_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        (**self).on_snapshot(snapshot)
    }

    fn on_finish(&mut self, elapsed: Duration) -> Result<()> {
        (**self).on_finish(elapsed)
    }
}
