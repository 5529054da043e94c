//! Password strength scoring

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::STRENGTH_MIN_LENGTH;
use crate::error::PasswordError;
use super::charset::CharacterClass;

/// Coarse strength of a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    /// Fewer than `STRENGTH_MIN_LENGTH` characters, whatever the composition
    Short,
    /// Two or more character classes missing
    Weak,
    /// Exactly one character class missing
    Medium,
    /// All four character classes present
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Short => "short",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLabel {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(StrengthLabel::Short),
            "weak" => Ok(StrengthLabel::Weak),
            "medium" => Ok(StrengthLabel::Medium),
            "strong" => Ok(StrengthLabel::Strong),
            other => Err(PasswordError::UnknownStrength(other.to_string())),
        }
    }
}

/// Score a password by class coverage and length.
///
/// Counts how many of the four character classes are missing: two or more is
/// weak, one is medium, none is strong. Anything shorter than
/// `STRENGTH_MIN_LENGTH` characters is short regardless of composition.
///
/// # Example
/// ```
/// use passgen::{strength_score, StrengthLabel};
///
/// assert_eq!(strength_score("Abcdefg1!"), StrengthLabel::Strong);
/// assert_eq!(strength_score("abcdefgh"), StrengthLabel::Weak);
/// assert_eq!(strength_score("Ab1!"), StrengthLabel::Short);
/// ```
pub fn strength_score(password: &str) -> StrengthLabel {
    let missing = CharacterClass::ALL
        .into_iter()
        .filter(|class| !password.chars().any(|ch| class.contains(ch)))
        .count();

    if password.chars().count() < STRENGTH_MIN_LENGTH {
        return StrengthLabel::Short;
    }

    match missing {
        0 => StrengthLabel::Strong,
        1 => StrengthLabel::Medium,
        _ => StrengthLabel::Weak,
    }
}
