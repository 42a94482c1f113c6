use number_baseball::core::{GameEngine, GameState, Guess, Score, Secret, SubmitError};
use proptest::prelude::*;

fn distinct_digits(digits: &[u8; 3]) -> bool {
    digits[0] != digits[1] && digits[0] != digits[2] && digits[1] != digits[2]
}

proptest! {
    /// Property: every generated secret is three distinct decimal digits
    #[test]
    fn generated_secret_invariant(seed in any::<u64>()) {
        let mut engine = GameEngine::seeded(seed);
        let game = engine.start_game();
        let digits = game.secret().digits();

        prop_assert!(digits.iter().all(|&d| d <= 9));
        prop_assert!(distinct_digits(digits), "repeated digit in {:?}", digits);
        prop_assert_eq!(game.attempts(), 0);
        prop_assert!(!game.is_over());
    }

    /// Property: strikes + balls never exceed 3, and 3 strikes means equality
    #[test]
    fn score_bounds(guess_index in 0usize..720, secret_index in 0usize..720) {
        let guess = Guess::all()[guess_index];
        let secret = Secret::all()[secret_index];
        let score = Score::calculate(&guess, &secret);

        prop_assert!(score.strikes() + score.balls() <= 3);
        prop_assert_eq!(score.strikes() == 3, guess.matches(&secret));
        prop_assert!(!(score.strikes() == 2 && score.balls() == 1));
    }

    /// Property: scoring is symmetric in guess and secret
    #[test]
    fn score_is_symmetric(a in 0usize..720, b in 0usize..720) {
        let (guesses, secrets) = (Guess::all(), Secret::all());

        let forward = Score::calculate(&guesses[a], &secrets[b]);
        let backward = Score::calculate(&guesses[b], &secrets[a]);
        prop_assert_eq!(forward, backward);
    }

    /// Property: two resets yield two fresh, valid games
    #[test]
    fn reset_twice_gives_fresh_games(seed in any::<u64>()) {
        let mut engine = GameEngine::seeded(seed);
        let mut first = engine.start_game();
        first.submit_guess("012").ok();

        let second = engine.reset_game();
        let third = engine.reset_game();

        for game in [&second, &third] {
            prop_assert_eq!(game.attempts(), 0);
            prop_assert!(!game.is_over());
            prop_assert!(distinct_digits(game.secret().digits()));
        }
    }

    /// Property: a won game refuses any input and keeps its count
    #[test]
    fn won_game_rejects_everything(secret_index in 0usize..720, input in ".{0,6}") {
        let secret = Secret::all()[secret_index];
        let mut game = GameState::with_secret(secret);
        game.submit_guess(&secret.to_string()).unwrap();

        prop_assert_eq!(game.submit_guess(&input), Err(SubmitError::GameOver));
        prop_assert_eq!(game.attempts(), 1);
    }

    /// Property: rejected input never changes the game
    #[test]
    fn invalid_input_leaves_state(seed in any::<u64>(), input in "[0-9a-z]{0,5}") {
        let mut game = GameEngine::seeded(seed).start_game();
        let before = game.clone();

        if let Err(err) = game.submit_guess(&input) {
            prop_assert!(matches!(err, SubmitError::Validation(_)));
            prop_assert_eq!(game, before);
        } else {
            prop_assert_eq!(game.attempts(), 1);
        }
    }
}
