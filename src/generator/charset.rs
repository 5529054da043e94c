//! Character classes and their character sets
//!
//! Generation and strength scoring both read these tables, so a symbol that
//! is drawn during generation is also counted as a symbol when scored.

use serde::{Deserialize, Serialize};

/// Uppercase ASCII letters
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII digits
pub const NUMBERS: &str = "0123456789";
/// Symbol characters
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// One of the four character classes a password can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes in the order mandatory characters are drawn
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// Candidate characters for this class
    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Whether `ch` belongs to this class
    pub fn contains(self, ch: char) -> bool {
        match self {
            CharacterClass::Uppercase => ch.is_ascii_uppercase(),
            CharacterClass::Lowercase => ch.is_ascii_lowercase(),
            CharacterClass::Numbers => ch.is_ascii_digit(),
            CharacterClass::Symbols => SYMBOLS.contains(ch),
        }
    }

    /// Class of `ch`, if it belongs to any
    pub fn of(ch: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(ch))
    }
}
