//! Game engine: starts and resets games
//!
//! The engine owns nothing but its random source. Game state lives in the
//! `GameState` values it hands out.

use super::digits::Secret;
use super::game::GameState;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Creates games from a random source
pub struct GameEngine<R: Rng = ThreadRng> {
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Engine backed by the thread-local generator
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for GameEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine<StdRng> {
    /// Engine with reproducible secrets
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded engine when a seed is given, OS-seeded otherwise
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self {
                rng: StdRng::from_os_rng(),
            },
        }
    }
}

impl<R: Rng> GameEngine<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Start a new game with a freshly drawn secret
    pub fn start_game(&mut self) -> GameState {
        let secret = Secret::generate(&mut self.rng);
        debug!(%secret, "new game started");
        GameState::with_secret(secret)
    }

    /// Throw away whatever game was running and start over
    ///
    /// Identical to [`Self::start_game`]; asking for confirmation is the
    /// caller's business.
    pub fn reset_game(&mut self) -> GameState {
        self.start_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Phase;

    #[test]
    fn start_game_is_fresh() {
        let mut engine = GameEngine::seeded(1);
        let game = engine.start_game();

        assert_eq!(game.attempts(), 0);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn seeded_engines_agree() {
        let mut a = GameEngine::seeded(99);
        let mut b = GameEngine::seeded(99);

        for _ in 0..10 {
            assert_eq!(a.start_game().secret(), b.start_game().secret());
        }
    }

    #[test]
    fn reset_discards_won_game() {
        let mut engine = GameEngine::seeded(3);
        let mut game = engine.start_game();
        let answer = game.secret().to_string();
        game.submit_guess(&answer).unwrap();
        assert_eq!(game.phase(), Phase::Won);

        game = engine.reset_game();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn thread_engine_produces_valid_secrets() {
        let mut engine = GameEngine::new();
        for _ in 0..50 {
            let game = engine.start_game();
            assert!(Secret::from_digits(*game.secret().digits()).is_some());
        }
    }

    #[test]
    fn optional_seed_is_respected() {
        let mut a = GameEngine::from_optional_seed(Some(5));
        let mut b = GameEngine::seeded(5);
        assert_eq!(a.start_game().secret(), b.start_game().secret());

        let mut c = GameEngine::from_optional_seed(None);
        assert_eq!(c.reset_game().attempts(), 0);
    }
}
