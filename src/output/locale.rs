//! User-facing text in English and Korean
//!
//! All strings a player sees go through here, so the core never has to know
//! which language is active.

use crate::core::{Score, SubmitError, ValidationError};
use std::fmt;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Korean,
}

/// Keys into the message table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Title,
    Instructions,
    InputPrompt,
    AlertThreeDigits,
    AlertNumbersOnly,
    AlertNoDuplicates,
    AlertGameOver,
    Strike,
    Ball,
    Out,
    Attempts,
    GameOverTitle,
    GameOverMsg,
    GameOverAttempts,
    ShareText,
    ConfirmReset,
    NewGame,
    Hint,
    NoHint,
    Goodbye,
}

impl Language {
    /// Parse a language code such as `en` or `ko`
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "ko" | "kor" | "korean" => Some(Self::Korean),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Korean => "ko",
        }
    }

    /// The other language
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Korean,
            Self::Korean => Self::English,
        }
    }

    /// Look up a message in this language
    ///
    /// Falls back to English when a translation is missing.
    #[must_use]
    pub fn text(self, key: MessageKey) -> &'static str {
        match self {
            Self::Korean => korean(key).unwrap_or_else(|| english(key)),
            Self::English => english(key),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unsupported language: {s} (use 'en' or 'ko')"))
    }
}

const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Number Baseball",
        MessageKey::Instructions => "Guess the 3 distinct digits. Strike = right digit, right spot. Ball = right digit, wrong spot.",
        MessageKey::InputPrompt => "Enter 3 digits",
        MessageKey::AlertThreeDigits => "Please enter exactly 3 digits.",
        MessageKey::AlertNumbersOnly => "Only numbers are allowed.",
        MessageKey::AlertNoDuplicates => "Digits must not repeat.",
        MessageKey::AlertGameOver => "The game is over. Start a new game!",
        MessageKey::Strike => "S",
        MessageKey::Ball => "B",
        MessageKey::Out => "OUT",
        MessageKey::Attempts => "Attempts",
        MessageKey::GameOverTitle => "🎉 Congratulations!",
        MessageKey::GameOverMsg => "You found the number!",
        MessageKey::GameOverAttempts => "Total attempts:",
        MessageKey::ShareText => "I cleared Number Baseball in",
        MessageKey::ConfirmReset => "Start a new game? Current progress will be lost. (y/n)",
        MessageKey::NewGame => "New game started!",
        MessageKey::Hint => "Hint: try",
        MessageKey::NoHint => "No number fits the results so far.",
        MessageKey::Goodbye => "Thanks for playing!",
    }
}

const fn korean(key: MessageKey) -> Option<&'static str> {
    Some(match key {
        MessageKey::Title => "숫자 야구 게임",
        MessageKey::Instructions => "서로 다른 3자리 숫자를 맞혀 보세요. 스트라이크 = 숫자와 위치 일치, 볼 = 숫자만 일치.",
        MessageKey::InputPrompt => "3자리 숫자 입력",
        MessageKey::AlertThreeDigits => "3자리 숫자를 입력해주세요.",
        MessageKey::AlertNumbersOnly => "숫자만 입력해주세요.",
        MessageKey::AlertNoDuplicates => "중복되지 않은 숫자를 입력해주세요.",
        MessageKey::AlertGameOver => "게임이 종료되었습니다. 새 게임을 시작하세요!",
        MessageKey::Strike => "스트라이크",
        MessageKey::Ball => "볼",
        MessageKey::Out => "아웃",
        MessageKey::Attempts => "시도 횟수",
        MessageKey::GameOverTitle => "🎉 축하합니다!",
        MessageKey::GameOverMsg => "정답을 맞히셨습니다!",
        MessageKey::GameOverAttempts => "총 시도 횟수:",
        MessageKey::ShareText => "숫자 야구 게임을 클리어했어요!",
        MessageKey::ConfirmReset => "새 게임을 시작하시겠습니까? 현재 진행 상황이 사라집니다. (y/n)",
        MessageKey::NewGame => "새 게임이 시작되었습니다!",
        MessageKey::Hint => "힌트:",
        // Falls back to English
        MessageKey::NoHint => return None,
        MessageKey::Goodbye => "플레이해 주셔서 감사합니다!",
    })
}

/// Localized feedback such as "1S 2B", "2스트라이크" or "OUT"
///
/// Zero counts are left out; a score with neither strikes nor balls is an out.
///
/// # Examples
/// ```
/// use number_baseball::core::Score;
/// use number_baseball::output::locale::{Language, score_text};
///
/// let score = Score::new(1, 2).unwrap();
/// assert_eq!(score_text(Language::English, score), "1S 2B");
/// assert_eq!(score_text(Language::Korean, score), "1스트라이크 2볼");
/// assert_eq!(score_text(Language::English, Score::OUT), "OUT");
/// ```
#[must_use]
pub fn score_text(lang: Language, score: Score) -> String {
    if score.is_out() {
        return lang.text(MessageKey::Out).to_string();
    }

    let mut parts = Vec::with_capacity(2);
    if score.strikes() > 0 {
        parts.push(format!("{}{}", score.strikes(), lang.text(MessageKey::Strike)));
    }
    if score.balls() > 0 {
        parts.push(format!("{}{}", score.balls(), lang.text(MessageKey::Ball)));
    }
    parts.join(" ")
}

/// "5 attempts" / "5회"
#[must_use]
pub fn attempts_text(lang: Language, attempts: u32) -> String {
    match lang {
        Language::Korean => format!("{attempts}회"),
        Language::English if attempts == 1 => "1 attempt".to_string(),
        Language::English => format!("{attempts} attempts"),
    }
}

/// Text a player can paste to brag about a win
#[must_use]
pub fn share_text(lang: Language, attempts: u32) -> String {
    format!(
        "{} {}!",
        lang.text(MessageKey::ShareText),
        attempts_text(lang, attempts)
    )
}

/// Alert text for a rejected guess
#[must_use]
pub const fn validation_message(lang: Language, err: ValidationError) -> &'static str {
    let key = match err {
        ValidationError::WrongLength(_) => MessageKey::AlertThreeDigits,
        ValidationError::NonDigit(_) => MessageKey::AlertNumbersOnly,
        ValidationError::DuplicateDigit(_) => MessageKey::AlertNoDuplicates,
    };
    match lang {
        Language::English => english(key),
        Language::Korean => match korean(key) {
            Some(text) => text,
            None => english(key),
        },
    }
}

/// Alert text for a refused submission
#[must_use]
pub fn submit_error_message(lang: Language, err: SubmitError) -> &'static str {
    match err {
        SubmitError::Validation(err) => validation_message(lang, err),
        SubmitError::GameOver => lang.text(MessageKey::AlertGameOver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("KO"), Some(Language::Korean));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!("ko".parse::<Language>(), Ok(Language::Korean));
        assert!("xx".parse::<Language>().is_err());
        assert_eq!(Language::Korean.to_string(), "ko");
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Language::English.toggled(), Language::Korean);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }

    #[test]
    fn missing_korean_falls_back() {
        assert_eq!(
            Language::Korean.text(MessageKey::NoHint),
            Language::English.text(MessageKey::NoHint)
        );
    }

    #[test]
    fn score_text_omits_zero_parts() {
        let strikes_only = Score::new(2, 0).unwrap();
        let balls_only = Score::new(0, 3).unwrap();

        assert_eq!(score_text(Language::English, strikes_only), "2S");
        assert_eq!(score_text(Language::English, balls_only), "3B");
        assert_eq!(score_text(Language::Korean, balls_only), "3볼");
        assert_eq!(score_text(Language::Korean, Score::OUT), "아웃");
        assert_eq!(score_text(Language::Korean, Score::PERFECT), "3스트라이크");
    }

    #[test]
    fn attempts_and_share() {
        assert_eq!(attempts_text(Language::English, 1), "1 attempt");
        assert_eq!(attempts_text(Language::English, 4), "4 attempts");
        assert_eq!(attempts_text(Language::Korean, 4), "4회");
        assert_eq!(
            share_text(Language::English, 4),
            "I cleared Number Baseball in 4 attempts!"
        );
        assert_eq!(share_text(Language::Korean, 7), "숫자 야구 게임을 클리어했어요! 7회!");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            validation_message(Language::English, ValidationError::WrongLength(2)),
            "Please enter exactly 3 digits."
        );
        assert_eq!(
            validation_message(Language::Korean, ValidationError::DuplicateDigit(1)),
            "중복되지 않은 숫자를 입력해주세요."
        );
        assert_eq!(
            submit_error_message(Language::English, SubmitError::GameOver),
            "The game is over. Start a new game!"
        );
        assert_eq!(
            submit_error_message(
                Language::English,
                SubmitError::Validation(ValidationError::NonDigit('a'))
            ),
            "Only numbers are allowed."
        );
    }
}
