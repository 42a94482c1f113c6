//! Strike/ball scoring
//!
//! A score compares a guess against a secret position by position:
//! - Strike: same digit in the same position
//! - Ball: digit present in the secret, but elsewhere
//!
//! Since both sides hold distinct digits, strikes + balls never exceeds 3.

use super::digits::{DIGIT_COUNT, Guess, Secret};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    strikes: u8,
    balls: u8,
}

impl Score {
    /// Three strikes (solved)
    pub const PERFECT: Self = Self {
        strikes: DIGIT_COUNT as u8,
        balls: 0,
    };

    /// No strikes and no balls
    pub const OUT: Self = Self {
        strikes: 0,
        balls: 0,
    };

    /// Create a score from raw counts
    ///
    /// Returns `None` if the counts cannot come from any guess, either
    /// because they sum above 3 or because they describe 2 strikes and
    /// 1 ball (the last digit would have to be a strike too).
    #[must_use]
    pub const fn new(strikes: u8, balls: u8) -> Option<Self> {
        let total = strikes as usize + balls as usize;
        if total > DIGIT_COUNT || (strikes == 2 && balls == 1) {
            None
        } else {
            Some(Self { strikes, balls })
        }
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use number_baseball::core::{Guess, Score, Secret};
    ///
    /// let secret = Secret::from_digits([1, 2, 3]).unwrap();
    /// let guess = Guess::parse("321").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// assert_eq!(score.strikes(), 1); // the 2 in the middle
    /// assert_eq!(score.balls(), 2); // 3 and 1, misplaced
    /// ```
    #[must_use]
    pub fn calculate(guess: &Guess, secret: &Secret) -> Self {
        let mut strikes = 0;
        let mut balls = 0;

        for i in 0..DIGIT_COUNT {
            let digit = guess.digit_at(i);
            if digit == secret.digit_at(i) {
                strikes += 1;
            } else if secret.contains(digit) {
                balls += 1;
            }
        }

        Self { strikes, balls }
    }

    #[inline]
    #[must_use]
    pub const fn strikes(self) -> u8 {
        self.strikes
    }

    #[inline]
    #[must_use]
    pub const fn balls(self) -> u8 {
        self.balls
    }

    /// Three strikes
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.strikes as usize == DIGIT_COUNT
    }

    /// Nothing matched at all
    #[inline]
    #[must_use]
    pub const fn is_out(self) -> bool {
        self.strikes == 0 && self.balls == 0
    }

    /// Compact notation such as "1S 2B" or "OUT"
    #[must_use]
    pub fn notation(self) -> String {
        if self.is_out() {
            return "OUT".to_string();
        }
        format!("{}S {}B", self.strikes, self.balls)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
