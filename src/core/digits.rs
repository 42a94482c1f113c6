//! Secret and guess representation
//!
//! Both are ordered triples of mutually distinct decimal digits. The only way
//! to obtain either is through a validating constructor, so every value in
//! circulation already satisfies the distinctness invariant.

use super::error::ValidationError;
use rand::Rng;
use std::fmt;

/// Number of digits in a secret or a guess
pub const DIGIT_COUNT: usize = 3;

/// Number of distinct secrets: 10 × 9 × 8
pub const SECRET_SPACE: usize = 720;

const fn all_distinct(digits: &[u8; DIGIT_COUNT]) -> bool {
    digits[0] != digits[1] && digits[0] != digits[2] && digits[1] != digits[2]
}

const fn all_decimal(digits: &[u8; DIGIT_COUNT]) -> bool {
    digits[0] <= 9 && digits[1] <= 9 && digits[2] <= 9
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8; DIGIT_COUNT]) -> fmt::Result {
    for &d in digits {
        write!(f, "{d}")?;
    }
    Ok(())
}

/// The hidden target of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Secret([u8; DIGIT_COUNT]);

impl Secret {
    /// Build a secret from raw digit values
    ///
    /// Returns `None` if any value is above 9 or two values repeat.
    ///
    /// # Examples
    /// ```
    /// use number_baseball::core::Secret;
    ///
    /// assert!(Secret::from_digits([1, 2, 3]).is_some());
    /// assert!(Secret::from_digits([1, 1, 3]).is_none());
    /// assert!(Secret::from_digits([1, 2, 10]).is_none());
    /// ```
    #[must_use]
    pub const fn from_digits(digits: [u8; DIGIT_COUNT]) -> Option<Self> {
        if all_decimal(&digits) && all_distinct(&digits) {
            Some(Self(digits))
        } else {
            None
        }
    }

    /// Draw a fresh secret
    ///
    /// Samples a uniform digit and keeps it only if it is not already taken,
    /// until three digits are collected.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; DIGIT_COUNT];
        let mut filled = 0;

        while filled < DIGIT_COUNT {
            let candidate: u8 = rng.random_range(0..10);
            if !digits[..filled].contains(&candidate) {
                digits[filled] = candidate;
                filled += 1;
            }
        }

        Self(digits)
    }

    /// Every possible secret in lexicographic order
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut secrets = Vec::with_capacity(SECRET_SPACE);
        for a in 0..10u8 {
            for b in 0..10u8 {
                for c in 0..10u8 {
                    if let Some(secret) = Self::from_digits([a, b, c]) {
                        secrets.push(secret);
                    }
                }
            }
        }
        secrets
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }

    /// Digit at a position (0-2)
    ///
    /// # Panics
    /// Panics if position >= 3
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

/// A validated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guess([u8; DIGIT_COUNT]);

impl Guess {
    /// Validate raw user input
    ///
    /// Checks run in a fixed order so the caller can report the most basic
    /// problem first: length, then digit content, then repetition.
    ///
    /// # Errors
    /// - `WrongLength` if the input is not exactly 3 characters
    /// - `NonDigit` if any character is not an ASCII decimal digit
    /// - `DuplicateDigit` if a digit appears more than once
    ///
    /// # Examples
    /// ```
    /// use number_baseball::core::{Guess, ValidationError};
    ///
    /// assert!(Guess::parse("123").is_ok());
    /// assert_eq!(Guess::parse("12"), Err(ValidationError::WrongLength(2)));
    /// assert_eq!(Guess::parse("1a2"), Err(ValidationError::NonDigit('a')));
    /// assert_eq!(Guess::parse("112"), Err(ValidationError::DuplicateDigit(1)));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let length = input.chars().count();
        if length != DIGIT_COUNT {
            return Err(ValidationError::WrongLength(length));
        }

        if let Some(bad) = input.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ValidationError::NonDigit(bad));
        }

        let mut digits = [0u8; DIGIT_COUNT];
        for (slot, byte) in digits.iter_mut().zip(input.bytes()) {
            *slot = byte - b'0';
        }

        for (i, &digit) in digits.iter().enumerate() {
            if digits[..i].contains(&digit) {
                return Err(ValidationError::DuplicateDigit(digit));
            }
        }

        Ok(Self(digits))
    }

    /// Build a guess from raw digit values
    #[must_use]
    pub const fn from_digits(digits: [u8; DIGIT_COUNT]) -> Option<Self> {
        if all_decimal(&digits) && all_distinct(&digits) {
            Some(Self(digits))
        } else {
            None
        }
    }

    /// Every legal guess in lexicographic order
    #[must_use]
    pub fn all() -> Vec<Self> {
        Secret::all().into_iter().map(Self::from).collect()
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }

    /// Digit at a position (0-2)
    ///
    /// # Panics
    /// Panics if position >= 3
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Whether this guess names exactly the given secret
    #[must_use]
    pub fn matches(&self, secret: &Secret) -> bool {
        self.0 == *secret.digits()
    }
}

impl From<Secret> for Guess {
    fn from(secret: Secret) -> Self {
        Self(secret.0)
    }
}

impl std::str::FromStr for Guess {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::str::FromStr for Secret {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guess::parse(s).map(|guess| Self(guess.0))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_valid_guess() {
        let guess = Guess::parse("123").unwrap();
        assert_eq!(guess.digits(), &[1, 2, 3]);
        assert_eq!(guess.to_string(), "123");
    }

    #[test]
    fn parse_leading_zero() {
        let guess = Guess::parse("012").unwrap();
        assert_eq!(guess.digits(), &[0, 1, 2]);
        assert_eq!(guess.to_string(), "012");
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(Guess::parse(""), Err(ValidationError::WrongLength(0)));
        assert_eq!(Guess::parse("12"), Err(ValidationError::WrongLength(2)));
        assert_eq!(Guess::parse("1234"), Err(ValidationError::WrongLength(4)));
    }

    #[test]
    fn parse_length_checked_before_content() {
        // Too long and non-numeric: length wins
        assert_eq!(Guess::parse("abcd"), Err(ValidationError::WrongLength(4)));
        // Too short and repeated: length wins
        assert_eq!(Guess::parse("11"), Err(ValidationError::WrongLength(2)));
    }

    #[test]
    fn parse_content_checked_before_duplicates() {
        assert_eq!(Guess::parse("1a1"), Err(ValidationError::NonDigit('a')));
    }

    #[test]
    fn parse_non_digit() {
        assert_eq!(Guess::parse("1a2"), Err(ValidationError::NonDigit('a')));
        assert_eq!(Guess::parse("12 "), Err(ValidationError::NonDigit(' ')));
        assert_eq!(Guess::parse("-12"), Err(ValidationError::NonDigit('-')));
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        // Three characters, six bytes
        assert_eq!(Guess::parse("１２３"), Err(ValidationError::NonDigit('１')));
        assert_eq!(Guess::parse("é1"), Err(ValidationError::WrongLength(2)));
    }

    #[test]
    fn parse_duplicate_digit() {
        assert_eq!(Guess::parse("112"), Err(ValidationError::DuplicateDigit(1)));
        assert_eq!(Guess::parse("121"), Err(ValidationError::DuplicateDigit(1)));
        assert_eq!(Guess::parse("999"), Err(ValidationError::DuplicateDigit(9)));
    }

    #[test]
    fn from_digits_rejects_invalid() {
        assert!(Secret::from_digits([0, 0, 1]).is_none());
        assert!(Secret::from_digits([3, 4, 11]).is_none());
        assert!(Guess::from_digits([5, 6, 5]).is_none());
        assert!(Guess::from_digits([7, 8, 9]).is_some());
    }

    #[test]
    fn all_secrets_enumerated() {
        let secrets = Secret::all();
        assert_eq!(secrets.len(), SECRET_SPACE);
        assert_eq!(secrets[0].digits(), &[0, 1, 2]);
        assert_eq!(secrets[SECRET_SPACE - 1].digits(), &[9, 8, 7]);

        let unique: std::collections::HashSet<_> = secrets.iter().collect();
        assert_eq!(unique.len(), SECRET_SPACE);
    }

    #[test]
    fn generate_produces_distinct_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let secret = Secret::generate(&mut rng);
            let d = secret.digits();
            assert!(d.iter().all(|&x| x <= 9));
            assert!(d[0] != d[1] && d[0] != d[2] && d[1] != d[2]);
        }
    }

    #[test]
    fn generate_is_deterministic_for_seed() {
        let a = Secret::generate(&mut StdRng::seed_from_u64(42));
        let b = Secret::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn secret_from_str() {
        let secret: Secret = "408".parse().unwrap();
        assert_eq!(secret.digits(), &[4, 0, 8]);
        assert!(secret.contains(8));
        assert!(!secret.contains(1));
        assert!("44".parse::<Secret>().is_err());
    }

    #[test]
    fn guess_matches_secret() {
        let secret = Secret::from_digits([1, 2, 3]).unwrap();
        assert!(Guess::parse("123").unwrap().matches(&secret));
        assert!(!Guess::parse("321").unwrap().matches(&secret));
        assert!(Guess::from(secret).matches(&secret));
    }
}
