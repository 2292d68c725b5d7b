//! String manipulation utilities for RustF text helpers
//!
//! This module provides the string helpers exposed through `U::String` and the
//! [`TextExt`](crate::ext::TextExt) extension trait: padding, counting, case
//! conversion, palindrome and numeric checks, membership tests, diacritic
//! stripping and fixed-length splitting.
//!
//! All lengths and indices are counted in characters (Unicode scalar values),
//! never in bytes.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use rand::{thread_rng, Rng};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::{self, FusedIterator};
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?\s*$")
        .expect("string utils: invalid numeric pattern regex")
});

/// Case conversion modes supported by [`convert_case`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Every whitespace-delimited word starts with an uppercase letter
    #[default]
    TitleCase,
    LowerCase,
    UpperCase,
    /// Only the first letter of each sentence is uppercase
    SentenceCase,
    /// Uppercase letters become lowercase and vice versa
    InvertCase,
    /// Each letter is independently upper- or lowercased at random
    RandomCase,
}

impl CaseMode {
    /// Get the mode name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::TitleCase => "title_case",
            CaseMode::LowerCase => "lower_case",
            CaseMode::UpperCase => "upper_case",
            CaseMode::SentenceCase => "sentence_case",
            CaseMode::InvertCase => "invert_case",
            CaseMode::RandomCase => "random_case",
        }
    }

    /// Whether converting with this mode gives the same output for the same input
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, CaseMode::RandomCase)
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseMode {
    type Err = Error;

    /// Parse a mode name; accepts `title_case`, `title-case`, `TitleCase` or `title`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "titlecase" | "title" => Ok(CaseMode::TitleCase),
            "lowercase" | "lower" => Ok(CaseMode::LowerCase),
            "uppercase" | "upper" => Ok(CaseMode::UpperCase),
            "sentencecase" | "sentence" => Ok(CaseMode::SentenceCase),
            "invertcase" | "invert" => Ok(CaseMode::InvertCase),
            "randomcase" | "random" => Ok(CaseMode::RandomCase),
            _ => Err(Error::invalid_case_mode(s)),
        }
    }
}

/// Options for [`is_palindrome_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PalindromeOptions {
    /// Drop whitespace before comparing
    pub ignore_space: bool,
    /// Compare letters case-insensitively
    pub ignore_case: bool,
}

impl PalindromeOptions {
    /// Ignore both whitespace and letter case
    pub fn lenient() -> Self {
        Self {
            ignore_space: true,
            ignore_case: true,
        }
    }
}

/// Center text within a field of `total_length` characters, padding with spaces
///
/// # Example
/// ```rust,ignore
/// assert_eq!(center("Test", 8), "  Test  ");
/// ```
pub fn center(input: &str, total_length: usize) -> String {
    center_with(input, total_length, ' ')
}

/// Center text within a field of `total_length` characters using `pad_char`
///
/// Text that is already as long as the field is returned unchanged, never
/// truncated. When the padding cannot be split evenly the extra character
/// goes on the left.
///
/// # Arguments
/// * `input` - Text to center
/// * `total_length` - Width of the resulting field in characters
/// * `pad_char` - Character used for padding
///
/// # Example
/// ```rust,ignore
/// assert_eq!(center_with("Luminou", 8, '*'), "*Luminou");
/// assert_eq!(center_with("Ponder", 8, '*'), "*Ponder*");
/// ```
pub fn center_with(input: &str, total_length: usize, pad_char: char) -> String {
    let length = input.chars().count();
    if total_length <= length {
        return input.to_string();
    }

    let padding = total_length - length;
    let left = (padding + 1) / 2;
    let right = padding - left;

    let mut result = String::with_capacity(input.len() + padding * pad_char.len_utf8());
    result.extend(iter::repeat(pad_char).take(left));
    result.push_str(input);
    result.extend(iter::repeat(pad_char).take(right));
    result
}

/// Count non-overlapping occurrences of `pattern` in `input`
///
/// Returns 0 when either string is empty or whitespace only.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(count("applesapples", "apples"), 2);
/// assert_eq!(count("aaaa", "aa"), 2);
/// ```
pub fn count(input: &str, pattern: &str) -> usize {
    if is_blank(input) || is_blank(pattern) {
        return 0;
    }
    input.matches(pattern).count()
}

/// Count non-overlapping occurrences of `pattern` in the character range `start..end`
///
/// `end` of `None` means the end of `input`. The blank check runs before the
/// range check, so blank input yields `Ok(0)` whatever the range.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] when `start > end` or `end` is past the
/// end of `input`.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(count_in_range("apples apples apples", "apples", 7, None)?, 2);
/// assert_eq!(count_in_range("apples apples apples", "apples", 0, Some(13))?, 2);
/// ```
pub fn count_in_range(
    input: &str,
    pattern: &str,
    start: usize,
    end: Option<usize>,
) -> Result<usize> {
    if is_blank(input) || is_blank(pattern) {
        return Ok(0);
    }

    let slice = char_slice(input, start, end)?;
    Ok(slice.matches(pattern).count())
}

/// Convert text to the given case mode using the thread-local random source
///
/// # Example
/// ```rust,ignore
/// assert_eq!(convert_case("hello world. bye", CaseMode::SentenceCase), "Hello world. Bye");
/// ```
pub fn convert_case(input: &str, mode: CaseMode) -> String {
    convert_case_with_rng(input, mode, &mut thread_rng())
}

/// Convert text to the given case mode, drawing randomness from `rng`
///
/// Only [`CaseMode::RandomCase`] consumes randomness.
pub fn convert_case_with_rng<R: Rng + ?Sized>(
    input: &str,
    mode: CaseMode,
    rng: &mut R,
) -> String {
    match mode {
        CaseMode::TitleCase => title_case(input),
        CaseMode::LowerCase => input.to_lowercase(),
        CaseMode::UpperCase => input.to_uppercase(),
        CaseMode::SentenceCase => sentence_case(input),
        CaseMode::InvertCase => invert_case(input),
        CaseMode::RandomCase => random_case(input, rng),
    }
}

/// Capitalize first letter of each word and lowercase the rest
///
/// Whitespace is kept as is. Leading punctuation does not count as the
/// start of a word, a leading digit does.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(title_case("hELLO   wORLD"), "Hello   World");
/// assert_eq!(title_case("(hello) 3rd world"), "(Hello) 3rd World");
/// ```
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut word_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() {
            word_start = true;
            result.push(ch);
        } else if word_start && ch.is_alphanumeric() {
            word_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

/// Lowercase text and capitalize the start of each sentence
///
/// A sentence starts at the beginning of the text and after every period
/// followed by whitespace. Its first letter or digit is the one capitalized,
/// so opening quotes and brackets are skipped.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(sentence_case("HELLO THERE. HOW ARE YOU?"), "Hello there. How are you?");
/// assert_eq!(sentence_case("hi. \"quoted\" text"), "Hi. \"Quoted\" text");
/// ```
pub fn sentence_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize = true;
    let mut after_period = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            if after_period {
                capitalize = true;
            }
            result.push(ch);
        } else if capitalize && ch.is_alphanumeric() {
            capitalize = false;
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
        after_period = ch == '.';
    }

    result
}

/// Swap the case of every letter
///
/// # Example
/// ```rust,ignore
/// assert_eq!(invert_case("Hello, World!"), "hELLO, wORLD!");
/// ```
pub fn invert_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_uppercase() {
            result.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
    }
    result
}

fn random_case<R: Rng + ?Sized>(input: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        if !ch.is_alphabetic() {
            result.push(ch);
        } else if rng.gen_bool(0.5) {
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
    }
    result
}

/// Check whether text reads the same forwards and backwards
///
/// The comparison is exact: spaces and letter case count.
pub fn is_palindrome(input: &str) -> bool {
    is_palindrome_with(input, PalindromeOptions::default())
}

/// Check whether text is a palindrome under the given options
///
/// # Example
/// ```rust,ignore
/// let options = PalindromeOptions { ignore_space: true, ignore_case: false };
/// assert!(is_palindrome_with("race car", options));
/// assert!(!is_palindrome_with("Race car", options));
/// ```
pub fn is_palindrome_with(input: &str, options: PalindromeOptions) -> bool {
    let kept = input
        .chars()
        .filter(|c| !(options.ignore_space && c.is_whitespace()));

    let chars: Vec<char> = if options.ignore_case {
        kept.flat_map(char::to_lowercase).collect()
    } else {
        kept.collect()
    };

    chars.iter().eq(chars.iter().rev())
}

/// Check whether text is a floating-point number literal
///
/// Accepts an optional sign, digits with an optional decimal point and an
/// optional exponent, surrounded by optional whitespace. Special values such
/// as `inf` and `NaN` are rejected.
///
/// # Example
/// ```rust,ignore
/// assert!(is_numeric("123.45"));
/// assert!(is_numeric("-1.5e10"));
/// assert!(!is_numeric("abc"));
/// ```
pub fn is_numeric(input: &str) -> bool {
    NUMERIC_PATTERN.is_match(input)
}

/// Check whether text equals any of the given values
///
/// # Arguments
/// * `input` - Text to look for
/// * `ignore_case` - Compare case-insensitively
/// * `values` - Candidates
///
/// # Example
/// ```rust,ignore
/// assert!(is_in("GET", false, ["GET", "POST"]));
/// assert!(is_in("get", true, vec!["GET".to_string()]));
/// ```
pub fn is_in<I, S>(input: &str, ignore_case: bool, values: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if ignore_case {
        let needle = input.to_lowercase();
        values
            .into_iter()
            .any(|value| value.as_ref().to_lowercase() == needle)
    } else {
        values.into_iter().any(|value| value.as_ref() == input)
    }
}

/// Strip accents and other combining marks from text
///
/// # Example
/// ```rust,ignore
/// assert_eq!(remove_diacritics("Crème Brûlée"), "Creme Brulee");
/// ```
pub fn remove_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Lazy iterator over fixed-length chunks of a string
///
/// Created by [`split_by_len`]. Cloning the iterator restarts from the clone
/// point.
#[derive(Debug, Clone)]
pub struct SplitByLen<'a> {
    remaining: &'a str,
    chunk_size: usize,
}

impl<'a> SplitByLen<'a> {
    /// Characters per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<'a> Iterator for SplitByLen<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }

        let split_at = byte_offset(self.remaining, self.chunk_size);
        let (chunk, rest) = self.remaining.split_at(split_at);
        self.remaining = rest;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining.is_empty() {
            return (0, Some(0));
        }
        // Each char is at most 4 bytes and at least 1
        let min_chars = self.remaining.len().div_ceil(4);
        (
            min_chars.div_ceil(self.chunk_size),
            Some(self.remaining.len().div_ceil(self.chunk_size)),
        )
    }
}

impl FusedIterator for SplitByLen<'_> {}

/// Split text into consecutive chunks of `chunk_size` characters
///
/// The last chunk may be shorter. Empty input yields no chunks.
///
/// # Errors
/// Returns [`Error::InvalidChunkSize`] when `chunk_size` is 0.
///
/// # Example
/// ```rust,ignore
/// let chunks: Vec<&str> = split_by_len("abcdefg", 3)?.collect();
/// assert_eq!(chunks, vec!["abc", "def", "g"]);
/// ```
pub fn split_by_len(input: &str, chunk_size: usize) -> Result<SplitByLen<'_>> {
    if chunk_size == 0 {
        log::trace!("split_by_len rejected zero chunk size");
        return Err(Error::InvalidChunkSize(chunk_size));
    }

    Ok(SplitByLen {
        remaining: input,
        chunk_size,
    })
}

fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Byte offset of the character at `char_index`, or the string length past the end
fn byte_offset(input: &str, char_index: usize) -> usize {
    input
        .char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(input.len())
}

fn char_slice(input: &str, start: usize, end: Option<usize>) -> Result<&str> {
    let len = input.chars().count();
    let end = end.unwrap_or(len);

    if start > end || end > len {
        log::trace!("character range {}..{} rejected for length {}", start, end, len);
        return Err(Error::IndexOutOfRange { start, end, len });
    }

    Ok(&input[byte_offset(input, start)..byte_offset(input, end)])
}
