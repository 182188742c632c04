use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{LeagueError, Result};

/// A lazy, non-restartable stream of fair-coin outcomes.
///
/// `true` means the lower-indexed team of a pairing wins the game,
/// `false` means the higher-indexed team does.
pub trait CoinSource {
    fn flip(&mut self) -> Result<bool>;
}

impl<C: CoinSource + ?Sized> CoinSource for &mut C {
    fn flip(&mut self) -> Result<bool> {
        (**self).flip()
    }
}

/// Coins drawn from a random number generator. Never runs dry.
#[derive(Clone, Debug)]
pub struct RngCoins<R> {
    rng: R,
}

impl<R: Rng> RngCoins<R> {
    pub fn new(rng: R) -> Self {
        RngCoins { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngCoins<ChaCha20Rng> {
    /// ChaCha20 seeded from `seed`, or from OS entropy when `None`.
    pub fn chacha(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha20Rng::seed_from_u64(s),
            None => ChaCha20Rng::from_entropy(),
        };
        RngCoins::new(rng)
    }
}

impl<R: Rng> CoinSource for RngCoins<R> {
    fn flip(&mut self) -> Result<bool> {
        Ok(self.rng.gen_range(0..2u8) == 1)
    }
}

/// A fixed, finite sequence of outcomes, replayed once.
///
/// Used to drive the scheduler through a known trace. Reading past the end
/// is an error rather than a wrap-around.
#[derive(Clone, Debug)]
pub struct ScriptedCoins {
    outcomes: Vec<bool>,
    cursor: usize,
}

impl ScriptedCoins {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        ScriptedCoins {
            outcomes: outcomes.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Outcomes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.cursor
    }
}

impl CoinSource for ScriptedCoins {
    fn flip(&mut self) -> Result<bool> {
        let outcome = self
            .outcomes
            .get(self.cursor)
            .copied()
            .ok_or(LeagueError::CoinsExhausted(self.cursor as u64))?;
        self.cursor += 1;
        Ok(outcome)
    }
}
