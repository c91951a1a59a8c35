//! Heuristic "is this a message?" classifier
//!
//! Ordered checks, all thresholds fixed at construction:
//! 1. at least `min_words` whitespace-separated words
//! 2. letters / non-whitespace characters >= `letter_ratio` (when enabled)
//! 3. at least `min_words` valid words, where a valid word is at least
//!    `min_word_length` characters, contains a letter and, when enabled, a vowel
//!
//! Cheap and deterministic. No dictionaries, no locale sensitivity.

use super::char_class::{contains_letter, count_letters};
use crate::config::DetectionConfig;

/// Why a candidate was accepted or rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Accepted,
    TooFewWords { words: usize },
    LowLetterRatio { ratio: f64 },
    TooFewValidWords { valid_words: usize },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::TooFewWords { words } => write!(f, "rejected: {} word(s)", words),
            Verdict::LowLetterRatio { ratio } => {
                write!(f, "rejected: letter ratio {:.2}", ratio)
            }
            Verdict::TooFewValidWords { valid_words } => {
                write!(f, "rejected: {} valid word(s)", valid_words)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageClassifier {
    min_words: usize,
    min_word_length: usize,
    letter_ratio: f64,
    with_letter_ratio_check: bool,
    require_vowel: bool,
}

impl MessageClassifier {
    pub fn new(config: &DetectionConfig) -> Self {
        Self {
            min_words: config.min_words,
            min_word_length: config.min_word_length,
            letter_ratio: config.letter_ratio,
            with_letter_ratio_check: config.with_letter_ratio_check,
            require_vowel: config.require_vowel,
        }
    }

    pub fn is_message(&self, candidate: &str) -> bool {
        self.classify(candidate).is_accepted()
    }

    pub fn classify(&self, candidate: &str) -> Verdict {
        let words: Vec<&str> = candidate.split_whitespace().collect();
        if words.len() < self.min_words {
            return Verdict::TooFewWords { words: words.len() };
        }

        if self.with_letter_ratio_check {
            let ratio = letter_ratio(candidate);
            if ratio < self.letter_ratio {
                return Verdict::LowLetterRatio { ratio };
            }
        }

        let valid_words = words.iter().filter(|w| self.is_valid_word(w)).count();
        if valid_words < self.min_words {
            return Verdict::TooFewValidWords { valid_words };
        }

        Verdict::Accepted
    }

    fn is_valid_word(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_length
            && contains_letter(word)
            && (!self.require_vowel || has_vowel(word))
    }
}

/// Letters over non-whitespace characters; 0.0 when there are none
pub fn letter_ratio(s: &str) -> f64 {
    let total = s.chars().filter(|c| !c.is_whitespace()).count();
    if total == 0 {
        return 0.0;
    }
    count_letters(s) as f64 / total as f64
}

fn has_vowel(word: &str) -> bool {
    word.chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}
