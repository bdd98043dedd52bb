//! Utility functions for folio

use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: i64 = 86_400;

/// Converts text into an HTML id friendly slug.
///
/// Lowercases ASCII letters, keeps ASCII digits and collapses every other
/// run of characters into a single `-`. Leading and trailing dashes are
/// dropped.
///
/// # Arguments
///
/// * `text`: Arbitrary text such as a file stem
///
/// # Returns
///
/// Slug, empty when text has no ASCII alphanumerics
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Returns the calendar year (UTC) containing a Unix timestamp.
///
/// Uses the proleptic Gregorian calendar, so timestamps before 1970 work
/// too.
///
/// # Arguments
///
/// * `seconds`: Unix timestamp in seconds since epoch
pub fn year_from_unix(seconds: i64) -> i64 {
    let days = seconds.div_euclid(SECONDS_PER_DAY);

    // Civil-from-days over 400 year eras starting at 0000-03-01
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400;

    if month <= 2 { year + 1 } else { year }
}

/// Returns the current calendar year (UTC).
pub fn current_year() -> i64 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    year_from_unix(seconds)
}
