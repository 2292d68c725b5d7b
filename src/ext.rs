//! Extension traits that attach the helpers to built-in types
//!
//! Bring the traits into scope to call the helpers as methods:
//!
//! ```rust
//! use rustf_text::{LeapYear, TextExt};
//!
//! assert_eq!("Test".center(8), "  Test  ");
//! assert!("racecar".is_palindrome());
//! assert!(2024_i32.is_leap_year());
//! ```

use crate::error::Result;
use crate::utils::{date, string};
use crate::utils::string::{CaseMode, PalindromeOptions, SplitByLen};
use chrono::Datelike;

/// String helpers callable as methods on `str` (and `String` through deref)
pub trait TextExt {
    /// See [`string::center`]
    fn center(&self, total_length: usize) -> String;

    /// See [`string::center_with`]
    fn center_with(&self, total_length: usize, pad_char: char) -> String;

    /// See [`string::count`]
    fn count_occurrences(&self, pattern: &str) -> usize;

    /// See [`string::count_in_range`]
    fn count_occurrences_in(&self, pattern: &str, start: usize, end: Option<usize>)
        -> Result<usize>;

    /// See [`string::convert_case`]
    fn convert_case(&self, mode: CaseMode) -> String;

    /// See [`string::is_palindrome`]
    fn is_palindrome(&self) -> bool;

    /// See [`string::is_palindrome_with`]
    fn is_palindrome_with(&self, options: PalindromeOptions) -> bool;

    /// See [`string::is_numeric`]
    fn is_numeric(&self) -> bool;

    /// See [`string::is_in`]
    fn is_in<I, S>(&self, ignore_case: bool, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// See [`string::remove_diacritics`]
    fn remove_diacritics(&self) -> String;

    /// See [`string::split_by_len`]
    fn split_by_len(&self, chunk_size: usize) -> Result<SplitByLen<'_>>;
}

impl TextExt for str {
    fn center(&self, total_length: usize) -> String {
        string::center(self, total_length)
    }

    fn center_with(&self, total_length: usize, pad_char: char) -> String {
        string::center_with(self, total_length, pad_char)
    }

    fn count_occurrences(&self, pattern: &str) -> usize {
        string::count(self, pattern)
    }

    fn count_occurrences_in(
        &self,
        pattern: &str,
        start: usize,
        end: Option<usize>,
    ) -> Result<usize> {
        string::count_in_range(self, pattern, start, end)
    }

    fn convert_case(&self, mode: CaseMode) -> String {
        string::convert_case(self, mode)
    }

    fn is_palindrome(&self) -> bool {
        string::is_palindrome(self)
    }

    fn is_palindrome_with(&self, options: PalindromeOptions) -> bool {
        string::is_palindrome_with(self, options)
    }

    fn is_numeric(&self) -> bool {
        string::is_numeric(self)
    }

    fn is_in<I, S>(&self, ignore_case: bool, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        string::is_in(self, ignore_case, values)
    }

    fn remove_diacritics(&self) -> String {
        string::remove_diacritics(self)
    }

    fn split_by_len(&self, chunk_size: usize) -> Result<SplitByLen<'_>> {
        string::split_by_len(self, chunk_size)
    }
}

/// Leap-year check for year numbers and calendar dates
pub trait LeapYear {
    fn is_leap_year(&self) -> bool;
}

impl LeapYear for i32 {
    fn is_leap_year(&self) -> bool {
        date::is_leap_year(*self)
    }
}

impl LeapYear for chrono::NaiveDate {
    fn is_leap_year(&self) -> bool {
        date::is_leap_year(self.year())
    }
}

impl<Tz: chrono::TimeZone> LeapYear for chrono::DateTime<Tz> {
    fn is_leap_year(&self) -> bool {
        date::is_leap_year(self.year())
    }
}
