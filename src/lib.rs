//! RustF Text - string and date helpers for the RustF framework
//!
//! RustF Text provides small, stateless helpers in the Total.js utils spirit:
//! - Centering, counting and chunking strings
//! - Case conversion (title, sentence, inverted, random, ...)
//! - Palindrome, numeric and membership checks
//! - Diacritic stripping and random text generation
//! - Leap-year detection for years and `chrono` dates
//!
//! Helpers are reachable as free functions (`utils::string::center`), through
//! the global `U` namespace (`U::center`) or as methods via [`TextExt`] and
//! [`LeapYear`].

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod config;
pub mod error;
pub mod ext;
pub mod utils;

// Re-export main types for public API
pub use config::TextConfig;
pub use error::{Error, Result};
pub use ext::{LeapYear, TextExt};
pub use utils::random::RandomTextOptions;
pub use utils::string::{CaseMode, PalindromeOptions, SplitByLen};
pub use utils::U;
