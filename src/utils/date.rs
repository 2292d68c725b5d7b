//! Date helpers for RustF text utilities

/// Check if a year is a leap year in the Gregorian calendar
///
/// A year is a leap year when it is divisible by 4, except century years,
/// which must also be divisible by 400.
///
/// # Example
/// ```rust,ignore
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given year
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}
