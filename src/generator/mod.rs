//! Password generation and strength scoring
//!
//! Character sets are shared between generation and scoring, and all
//! randomness goes through [`RandomSource`] so callers can seed it.

mod charset;
mod options;
mod password;
mod random;
mod strength;

pub use charset::{CharacterClass, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
pub use options::{options_boundary, ClassFlags, PasswordOptions};
pub use password::{generate_password, generate_password_with, try_generate_password};
pub use random::RandomSource;
pub use strength::{strength_score, StrengthLabel};
