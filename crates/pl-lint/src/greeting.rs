//! Greeting line detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words, spaces and hyphens followed by a single closing comma.
static GREETING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z -]+,$").expect("greeting pattern is valid"));

/// Check whether a line is a greeting such as `Hello,` or `Best regards,`.
pub fn is_greeting(line: &str) -> bool {
    GREETING.is_match(line)
}
