//! Password generation options

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{PasswordError, Result};
use crate::{DEFAULT_PASSWORD_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};
use super::charset::CharacterClass;

/// Which character classes a password should contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFlags {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl ClassFlags {
    /// Flag for a single class
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in draw order
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    /// True when no class is selected
    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numbers || self.symbols)
    }
}

/// Options for password generation
///
/// Fields missing from JSON input fall back to [`PasswordOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    /// Password length in characters
    pub length: usize,
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include digits (0-9)
    pub numbers: bool,
    /// Include symbols (!@#$%...)
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            uppercase: true,
            lowercase: true,
            numbers: false,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    /// Parse options from a JSON object such as a submitted form.
    ///
    /// ```
    /// use passgen::PasswordOptions;
    ///
    /// let options = PasswordOptions::from_json(r#"{"length": 12, "symbols": true}"#).unwrap();
    /// assert_eq!(options.length, 12);
    /// assert!(options.uppercase && options.lowercase && options.symbols);
    /// assert!(!options.numbers);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Class flags of these options
    pub fn flags(&self) -> ClassFlags {
        ClassFlags {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }

    /// Copy of these options with the class flags replaced
    pub fn with_flags(&self, flags: ClassFlags) -> Self {
        Self {
            length: self.length,
            uppercase: flags.uppercase,
            lowercase: flags.lowercase,
            numbers: flags.numbers,
            symbols: flags.symbols,
        }
    }

    /// Copy of these options with [`options_boundary`] applied to the flags
    pub fn normalized(&self) -> Self {
        self.with_flags(options_boundary(self.flags()))
    }

    /// Check the length is within `PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH`
    pub fn validate(&self) -> Result<()> {
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&self.length) {
            return Err(PasswordError::InvalidLength(self.length));
        }
        Ok(())
    }
}

/// Make sure at least one character class is selected.
///
/// When all four flags are off, lowercase is switched on so generation never
/// works from an empty pool. Any other selection is returned unchanged.
pub fn options_boundary(flags: ClassFlags) -> ClassFlags {
    if flags.is_empty() {
        trace!("No character class selected, falling back to lowercase");
        return ClassFlags { lowercase: true, ..flags };
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> ClassFlags {
        ClassFlags { uppercase, lowercase, numbers, symbols }
    }

    #[test]
    fn test_boundary_forces_lowercase() {
        let result = options_boundary(flags(false, false, false, false));
        assert_eq!(result, flags(false, true, false, false));
    }

    #[test]
    fn test_boundary_passes_through() {
        let input = flags(true, false, false, false);
        assert_eq!(options_boundary(input), input);

        let input = flags(false, false, true, true);
        assert_eq!(options_boundary(input), input);
    }

    #[test]
    fn test_boundary_idempotent() {
        for bits in 0..16u8 {
            let input = flags(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let once = options_boundary(input);
            assert_eq!(options_boundary(once), once);
            assert!(!once.is_empty());
        }
    }

    #[test]
    fn test_enabled_classes_order() {
        let classes = flags(true, false, true, true).enabled_classes();
        assert_eq!(
            classes,
            vec![CharacterClass::Uppercase, CharacterClass::Numbers, CharacterClass::Symbols]
        );
        assert!(flags(false, false, false, false).enabled_classes().is_empty());
    }

    #[test]
    fn test_default_options() {
        let options = PasswordOptions::default();
        assert_eq!(options.length, 16);
        assert!(options.uppercase);
        assert!(options.lowercase);
        assert!(!options.numbers);
        assert!(!options.symbols);
    }

    #[test]
    fn test_normalized_options() {
        let options = PasswordOptions {
            length: 10,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        let normalized = options.normalized();
        assert_eq!(normalized.length, 10);
        assert_eq!(normalized.flags(), flags(false, true, false, false));
    }

    #[test]
    fn test_validate_length() {
        let mut options = PasswordOptions::default();
        assert!(options.validate().is_ok());

        options.length = 0;
        assert!(matches!(options.validate(), Err(PasswordError::InvalidLength(0))));

        options.length = PASSWORD_MAX_LENGTH;
        assert!(options.validate().is_ok());

        options.length = PASSWORD_MAX_LENGTH + 1;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_from_json_defaults() {
        let options = PasswordOptions::from_json("{}").unwrap();
        assert_eq!(options, PasswordOptions::default());

        let options = PasswordOptions::from_json(
            r#"{"length": 20, "uppercase": false, "numbers": true}"#,
        )
        .unwrap();
        assert_eq!(options.length, 20);
        assert_eq!(options.flags(), flags(false, true, true, false));
    }

    #[test]
    fn test_from_json_invalid() {
        let result = PasswordOptions::from_json(r#"{"length": "twelve"}"#);
        assert!(matches!(result, Err(PasswordError::InvalidOptions(_))));

        let result = PasswordOptions::from_json("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_serde() {
        let json = r#"{"uppercase":true,"lowercase":false,"numbers":true,"symbols":false}"#;
        let parsed: ClassFlags = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, flags(true, false, true, false));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);

        // All four flags are required
        assert!(serde_json::from_str::<ClassFlags>(r#"{"uppercase":true}"#).is_err());
    }
}
