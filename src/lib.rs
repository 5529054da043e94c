//! # passgen
//!
//! Random password generation with guaranteed character class coverage and
//! coarse strength scoring.
//!
//! ## Features
//!
//! - Uppercase, lowercase, digit and symbol character classes
//! - At least one character from each requested class
//! - Uniform shuffle so required characters are not clustered at the start
//! - Injectable randomness for reproducible output
//! - Strength labels: short, weak, medium, strong
//!
//! Passwords come from a general purpose generator and are not meant for
//! cryptographic key material.
//!
//! ## Example
//!
//! ```
//! use passgen::{generate_password, options_boundary, strength_score, PasswordOptions, StrengthLabel};
//!
//! let options = PasswordOptions {
//!     length: 16,
//!     uppercase: true,
//!     lowercase: true,
//!     numbers: true,
//!     symbols: true,
//! };
//! let options = options.with_flags(options_boundary(options.flags()));
//!
//! let password = generate_password(&options);
//! assert_eq!(password.len(), 16);
//! assert_eq!(strength_score(&password), StrengthLabel::Strong);
//! ```

pub mod generator;
pub mod error;

// Re-export main types
pub use error::{PasswordError, Result};
pub use generator::{
    generate_password, generate_password_with, options_boundary, strength_score,
    try_generate_password, CharacterClass, ClassFlags, PasswordOptions, RandomSource,
    StrengthLabel,
};

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Minimum password length accepted by validation
pub const PASSWORD_MIN_LENGTH: usize = 1;

/// Maximum password length accepted by validation
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Passwords with fewer characters score as short
pub const STRENGTH_MIN_LENGTH: usize = 8;
