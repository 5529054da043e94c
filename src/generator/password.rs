//! Password generation functionality
//!
//! Builds a password with one character from each requested class, pads it
//! from the combined pool and shuffles the result.

use log::{debug, warn};

use crate::PASSWORD_MAX_LENGTH;
use crate::error::Result;
use super::options::PasswordOptions;
use super::random::{random_char, shuffle, RandomSource};

/// Generate a random password with the specified options.
///
/// Uses the thread-local generator from `rand`. Options are used as given:
/// with every class switched off the pool is empty and the result is an
/// empty string, so run the flags through
/// [`options_boundary`](super::options_boundary) first or use
/// [`try_generate_password`].
///
/// # Example
/// ```
/// use passgen::{generate_password, PasswordOptions};
///
/// let options = PasswordOptions {
///     length: 12,
///     uppercase: true,
///     lowercase: true,
///     numbers: true,
///     symbols: false,
/// };
/// let password = generate_password(&options);
/// assert_eq!(password.len(), 12);
/// assert!(password.chars().any(|c| c.is_ascii_digit()));
/// ```
pub fn generate_password(options: &PasswordOptions) -> String {
    generate_password_with(options, &mut rand::rng())
}

/// Generate a password drawing randomness from `source`.
///
/// Enabled classes contribute one mandatory character each, in the order
/// uppercase, lowercase, numbers, symbols. When `length` is smaller than the
/// number of enabled classes, `length` of them are picked at random and each
/// gets one character. The rest of the password is drawn uniformly from the
/// combined pool, then the whole buffer is shuffled.
///
/// The result always has exactly `length` characters unless the pool is
/// empty, in which case it is empty.
pub fn generate_password_with<S: RandomSource + ?Sized>(
    options: &PasswordOptions,
    source: &mut S,
) -> String {
    let classes = options.flags().enabled_classes();
    debug!(
        "Generating password: length={}, classes={}",
        options.length,
        classes.len()
    );

    let pool: Vec<char> = classes
        .iter()
        .flat_map(|class| class.charset().chars())
        .collect();

    if pool.is_empty() {
        warn!("No character class enabled, generated password is empty");
        return String::new();
    }

    let mut mandatory = classes;
    if options.length < mandatory.len() {
        shuffle(source, &mut mandatory);
        mandatory.truncate(options.length);
    }

    let mut password: Vec<char> = Vec::with_capacity(options.length.min(PASSWORD_MAX_LENGTH));
    for class in mandatory {
        let chars: Vec<char> = class.charset().chars().collect();
        if let Some(ch) = random_char(source, &chars) {
            password.push(ch);
        }
    }

    while password.len() < options.length {
        if let Some(ch) = random_char(source, &pool) {
            password.push(ch);
        }
    }

    shuffle(source, &mut password);
    password.into_iter().collect()
}

/// Validate and normalize `options`, then generate a password.
///
/// Rejects lengths outside `PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH` and
/// falls back to lowercase when no class is selected.
///
/// # Example
/// ```
/// use passgen::{try_generate_password, PasswordError, PasswordOptions};
///
/// let options = PasswordOptions {
///     length: 8,
///     uppercase: false,
///     lowercase: false,
///     numbers: false,
///     symbols: false,
/// };
/// let password = try_generate_password(&options).unwrap();
/// assert!(password.chars().all(|c| c.is_ascii_lowercase()));
///
/// let too_short = PasswordOptions { length: 0, ..Default::default() };
/// assert!(matches!(try_generate_password(&too_short), Err(PasswordError::InvalidLength(0))));
/// ```
pub fn try_generate_password(options: &PasswordOptions) -> Result<String> {
    options.validate()?;
    Ok(generate_password(&options.normalized()))
}
