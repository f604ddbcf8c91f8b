//! Field-level input validation
//!
//! Pure functions, no I/O. These run exactly once, at the presentation
//! boundary, before any mutation reaches the store; the store itself trusts
//! its caller for field values and only enforces key uniqueness/existence.

use crate::error::{Error, Result};

/// Parse a rating, accepting both `.` and `,` as decimal separator.
///
/// Accepts exactly the closed interval [0, 10].
pub fn validate_rating(raw: &str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");
    let rating: f64 = normalized
        .parse()
        .map_err(|_| Error::InvalidRating(raw.trim().to_string()))?;
    if !(0.0..=10.0).contains(&rating) {
        return Err(Error::InvalidRating(raw.trim().to_string()));
    }
    Ok(rating)
}

/// Parse a release year: any non-negative integer literal.
///
/// No upper or historical lower bound is enforced; the reference behavior is
/// deliberately preserved (see DESIGN.md).
pub fn validate_year(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidYear(raw.trim().to_string()))
}

/// Trim and title-case a movie title; empty input is rejected.
///
/// Title-casing is a presentation convention carried over from the original
/// program, not a store invariant: the store accepts any non-empty key.
pub fn validate_title(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidTitle);
    }
    Ok(title_case(trimmed))
}

/// Classic title-case: every alphabetic character that follows a
/// non-alphabetic one is uppercased, the rest are lowercased.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}
