//! Code formatting utilities
//!
//! Pure helpers shared by the coders: zero padding, character-set
//! constrained random draws and ordinal-day ("Julian") dates.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Decimal digits
pub const DIGITS: &[u8] = b"0123456789";

/// VIN alphabet: upper-case letters and digits without I, O and Q
pub const VIN_CHARSET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// Format `value` with at least `width` digits, padding with leading zeros.
///
/// Values wider than `width` are emitted in full. Negative values keep
/// their sign in front of the padding.
pub fn zero_pad(value: i64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Draw `len` characters uniformly from `charset`.
///
/// Returns an empty string for an empty charset.
pub fn random_from_charset<R: Rng + ?Sized>(rng: &mut R, charset: &[u8], len: usize) -> String {
    if charset.is_empty() {
        return String::new();
    }
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// Draw a string of `len` decimal digits; leading zeros are allowed.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    random_from_charset(rng, DIGITS, len)
}

/// Whether `c` may appear in the VIN alphabet
pub fn is_vin_char(c: char) -> bool {
    c.is_ascii() && VIN_CHARSET.contains(&(c as u8))
}

/// Ordinal day of the year, 1 through 366
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Two-digit year followed by the three-digit ordinal day, e.g. `24065`
pub fn julian_date(date: NaiveDate) -> String {
    format!("{:02}{:03}", date.year().rem_euclid(100), day_of_year(date))
}

/// Smallest and largest integer with exactly `digits` decimal digits.
///
/// `digits` is clamped to 1 through 18, the widest count that fits an `i64`.
pub fn digit_bounds(digits: u32) -> (i64, i64) {
    let digits = digits.clamp(1, 18);
    (10_i64.pow(digits - 1), 10_i64.pow(digits) - 1)
}
