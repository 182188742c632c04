use crate::config::ReportTrigger;

/// How a single trial was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrialVerdict {
    /// One team finished strictly ahead of everyone else.
    ClearWinner { score: u32 },
    /// Two or more teams share the top win count. Excluded from the aggregate.
    Tied { score: u32 },
}

impl TrialVerdict {
    /// Classify a trial from its per-team win counts.
    pub fn of(wins: &[u32]) -> Self {
        let mut sorted = wins.to_vec();
        sorted.sort_unstable();

        let top = sorted.last().copied().unwrap_or(0);
        match sorted.len().checked_sub(2).map(|i| sorted[i]) {
            Some(second) if second == top => TrialVerdict::Tied { score: top },
            _ => TrialVerdict::ClearWinner { score: top },
        }
    }

    pub fn winning_score(&self) -> Option<u32> {
        match *self {
            TrialVerdict::ClearWinner { score } => Some(score),
            TrialVerdict::Tied { .. } => None,
        }
    }
}

/// Running totals across all trials of a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregate {
    /// Trials folded in so far, ties included
    pub trials_run: u64,

    /// Trials with a sole first-place team
    pub clear_winner_trials: u64,

    /// Sum of winning scores over clear-winner trials
    pub total_winning_score: u64,

    /// Sum of squared winning scores, for the standard error
    pub total_squared_score: u128,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial's win counts into the totals.
    pub fn record(&mut self, wins: &[u32]) -> TrialVerdict {
        let verdict = TrialVerdict::of(wins);
        self.record_verdict(verdict);
        verdict
    }

    /// Fold an already-classified trial into the totals.
    pub fn record_verdict(&mut self, verdict: TrialVerdict) {
        self.trials_run += 1;
        if let Some(score) = verdict.winning_score() {
            self.clear_winner_trials += 1;
            self.total_winning_score += score as u64;
            self.total_squared_score += (score as u128) * (score as u128);
        }
    }

    /// Mean winning score over clear-winner trials; `None` until there is one.
    pub fn expected_winning_score(&self) -> Option<f64> {
        if self.clear_winner_trials == 0 {
            return None;
        }
        Some(self.total_winning_score as f64 / self.clear_winner_trials as f64)
    }

    /// Whether the trial just recorded should produce a progress snapshot.
    ///
    /// Only clear-winner trials can trigger a report, so the expected
    /// score is always defined when this returns `true`.
    pub fn report_due(&self, verdict: TrialVerdict, trigger: ReportTrigger, every: u64) -> bool {
        if verdict.winning_score().is_none() || every == 0 {
            return false;
        }
        let counter = match trigger {
            ReportTrigger::ClearWinners => self.clear_winner_trials,
            ReportTrigger::TrialOrdinal => self.trials_run,
        };
        counter % every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_clear_winner() {
        assert_eq!(
            TrialVerdict::of(&[80, 95, 70, 81, 79]),
            TrialVerdict::ClearWinner { score: 95 }
        );
        assert_eq!(TrialVerdict::of(&[0, 1]), TrialVerdict::ClearWinner { score: 1 });
    }

    #[test]
    fn test_verdict_tie_at_top() {
        assert_eq!(
            TrialVerdict::of(&[90, 70, 90, 80, 75]),
            TrialVerdict::Tied { score: 90 }
        );
        // A tie lower down does not matter
        assert_eq!(
            TrialVerdict::of(&[70, 70, 91, 80, 80]),
            TrialVerdict::ClearWinner { score: 91 }
        );
    }

    #[test]
    fn test_record_does_not_reorder_input() {
        let wins = vec![3, 1, 2];
        let mut agg = Aggregate::new();
        agg.record(&wins);
        assert_eq!(wins, vec![3, 1, 2]);
    }

    #[test]
    fn test_tie_excluded() {
        let mut agg = Aggregate::new();
        agg.record(&[90, 80, 70, 60, 105]);
        let before = agg.clone();

        let verdict = agg.record(&[88, 88, 80, 75, 74]);

        assert_eq!(verdict, TrialVerdict::Tied { score: 88 });
        assert_eq!(agg.trials_run, before.trials_run + 1);
        assert_eq!(agg.clear_winner_trials, before.clear_winner_trials);
        assert_eq!(agg.total_winning_score, before.total_winning_score);
        assert_eq!(agg.expected_winning_score(), Some(105.0));
    }

    #[test]
    fn test_expected_undefined_until_clear_winner() {
        let mut agg = Aggregate::new();
        assert_eq!(agg.expected_winning_score(), None);

        agg.record(&[5, 5]);
        assert_eq!(agg.expected_winning_score(), None);

        agg.record(&[4, 6]);
        agg.record(&[8, 2]);
        assert_eq!(agg.expected_winning_score(), Some(7.0));
    }

    #[test]
    fn test_report_due_by_clear_winners() {
        let mut agg = Aggregate::new();
        let mut due = Vec::new();
        // Trial 2 is a tie, so the second clear winner is trial 3
        for wins in [[1, 0], [1, 1], [0, 1], [1, 0]] {
            let verdict = agg.record(&wins);
            due.push(agg.report_due(verdict, ReportTrigger::ClearWinners, 2));
        }
        assert_eq!(due, vec![false, false, true, false]);
    }

    #[test]
    fn test_report_due_by_trial_ordinal() {
        let mut agg = Aggregate::new();
        let mut due = Vec::new();
        // Trial 2 is a tie and is never reported, trial 4 is
        for wins in [[1, 0], [1, 1], [0, 1], [1, 0]] {
            let verdict = agg.record(&wins);
            due.push(agg.report_due(verdict, ReportTrigger::TrialOrdinal, 2));
        }
        assert_eq!(due, vec![false, false, false, true]);
    }
}
