//! Random text generation utilities for RustF text helpers
//!
//! Random strings are drawn from an alphabet assembled out of character
//! classes selected with [`RandomTextOptions`]. Every generator has a
//! `_with_rng` variant so callers can supply their own random source.

use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

/// Uppercase ASCII letters
pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII digits
pub const NUMBER_CHARS: &str = "0123456789";
/// Punctuation used for special characters
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+~|";

/// Character classes eligible for random text generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomTextOptions {
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for RandomTextOptions {
    fn default() -> Self {
        Self {
            include_upper: true,
            include_lower: true,
            include_numbers: true,
            include_special: true,
        }
    }
}

impl RandomTextOptions {
    /// Letters and digits only
    pub fn alphanumeric() -> Self {
        Self {
            include_special: false,
            ..Self::default()
        }
    }

    /// No character class selected
    pub fn none() -> Self {
        Self {
            include_upper: false,
            include_lower: false,
            include_numbers: false,
            include_special: false,
        }
    }

    /// Check if no character class is selected
    pub fn is_empty(&self) -> bool {
        !(self.include_upper || self.include_lower || self.include_numbers || self.include_special)
    }
}

/// Build the alphabet for the selected character classes
///
/// Classes are concatenated in the order upper, lower, digits, special.
///
/// # Example
/// ```rust,ignore
/// let options = RandomTextOptions { include_numbers: true, ..RandomTextOptions::none() };
/// assert_eq!(alphabet(&options), "0123456789");
/// ```
pub fn alphabet(options: &RandomTextOptions) -> String {
    let classes = [
        (options.include_upper, UPPER_CHARS),
        (options.include_lower, LOWER_CHARS),
        (options.include_numbers, NUMBER_CHARS),
        (options.include_special, SPECIAL_CHARS),
    ];

    classes
        .iter()
        .filter(|(selected, _)| *selected)
        .map(|(_, chars)| *chars)
        .collect()
}

/// Generate random text of `length` characters from every character class
///
/// # Example
/// ```rust,ignore
/// let password = generate_random_text(16);
/// assert_eq!(password.chars().count(), 16);
/// ```
pub fn generate_random_text(length: usize) -> String {
    generate_random_text_with(length, &RandomTextOptions::default())
}

/// Generate random text of `length` characters from the selected classes
///
/// Returns an empty string when `length` is 0 or no class is selected.
///
/// # Arguments
/// * `length` - Number of characters to generate
/// * `options` - Character classes to draw from
pub fn generate_random_text_with(length: usize, options: &RandomTextOptions) -> String {
    generate_random_text_with_rng(length, options, &mut thread_rng())
}

/// Generate random text drawing randomness from `rng`
///
/// # Example
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(42);
/// let code = generate_random_text_with_rng(6, &RandomTextOptions::alphanumeric(), &mut rng);
/// ```
pub fn generate_random_text_with_rng<R: Rng + ?Sized>(
    length: usize,
    options: &RandomTextOptions,
    rng: &mut R,
) -> String {
    if options.is_empty() {
        log::trace!("random text requested with no character class selected");
        return String::new();
    }

    generate_random_string_with_charset(length, &alphabet(options), rng)
}

/// Generate a random string with custom character set
///
/// Each character is drawn independently and uniformly from `charset`.
///
/// # Arguments
/// * `length` - The desired length of the random string
/// * `charset` - String containing all allowed characters
/// * `rng` - Random source
pub fn generate_random_string_with_charset<R: Rng + ?Sized>(
    length: usize,
    charset: &str,
    rng: &mut R,
) -> String {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}
