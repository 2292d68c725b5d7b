//! Global text utilities module for RustF
//!
//! This module provides the string and date helpers, accessible globally
//! through the `U` namespace (similar to Total.js Utils).
//!
//! # Usage
//! ```rust
//! use rustf_text::U;
//!
//! let banner = U::center("Title", 11);
//! let occurrences = U::count("applesapples", "apples");
//! let leap = U::is_leap_year(2024);
//! ```

pub mod date;
pub mod random;
pub mod string;

/// Global utilities module - the main entry point for all helper functions
///
/// Frequently used helpers are available directly as `U::function()`, the
/// full set through the nested `U::String`, `U::Random` and `U::Date`
/// namespaces.
#[allow(non_snake_case)]
pub mod U {
    use super::*;
    use crate::error::Result;
    use std::string::String as StdString;

    pub use super::random::RandomTextOptions;
    pub use super::string::{CaseMode, PalindromeOptions, SplitByLen};

    /// String utilities namespace
    pub mod String {
        pub use super::super::string::*;
    }

    /// Random utilities namespace
    pub mod Random {
        pub use super::super::random::*;
    }

    /// Date utilities namespace
    pub mod Date {
        pub use super::super::date::*;
    }

    // String utilities

    /// Center text within a field of `length` characters
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::center("Test", 8), "  Test  ");
    /// ```
    pub fn center(input: &str, length: usize) -> StdString {
        string::center(input, length)
    }

    /// Count non-overlapping occurrences of a substring
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::count("applesapples", "apples"), 2);
    /// ```
    pub fn count(input: &str, pattern: &str) -> usize {
        string::count(input, pattern)
    }

    /// Count occurrences inside the character range `start..end`
    pub fn count_in_range(
        input: &str,
        pattern: &str,
        start: usize,
        end: Option<usize>,
    ) -> Result<usize> {
        string::count_in_range(input, pattern, start, end)
    }

    /// Convert text to another letter case
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::convert_case("hello world", CaseMode::TitleCase), "Hello World");
    /// ```
    pub fn convert_case(input: &str, mode: CaseMode) -> StdString {
        string::convert_case(input, mode)
    }

    /// Check if text is a palindrome, optionally ignoring spaces and case
    pub fn is_palindrome(input: &str, ignore_space: bool, ignore_case: bool) -> bool {
        string::is_palindrome_with(
            input,
            PalindromeOptions {
                ignore_space,
                ignore_case,
            },
        )
    }

    /// Check if text is a floating-point number literal
    pub fn is_numeric(input: &str) -> bool {
        string::is_numeric(input)
    }

    /// Check if text equals one of the values
    ///
    /// # Example
    /// ```rust,ignore
    /// assert!(U::is_in("post", true, ["GET", "POST"]));
    /// ```
    pub fn is_in<I, S>(input: &str, ignore_case: bool, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        string::is_in(input, ignore_case, values)
    }

    /// Strip accents from text
    pub fn remove_diacritics(input: &str) -> StdString {
        string::remove_diacritics(input)
    }

    /// Split text into chunks of `chunk_size` characters
    pub fn split_by_len(input: &str, chunk_size: usize) -> Result<SplitByLen<'_>> {
        string::split_by_len(input, chunk_size)
    }

    // Random generation utilities

    /// Generate random text of `length` characters using every character class
    ///
    /// # Example
    /// ```rust,ignore
    /// let password = U::random_text(16);
    /// ```
    pub fn random_text(length: usize) -> StdString {
        random::generate_random_text(length)
    }

    // Date utilities

    /// Check if a year is a leap year
    pub fn is_leap_year(year: i32) -> bool {
        date::is_leap_year(year)
    }
}
