//! Trailing white space rule (2.2.2.5).

use pl_rules::{Diagnostic, Rule, SIGNATURE_DELIMITER};

/// Trailing white space checker.
///
/// Covers every line of the body, signature included. Only the space
/// character counts; the signature delimiter is the one line allowed to
/// end in a space.
pub struct TrailingWhitespaceChecker;

impl TrailingWhitespaceChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Check all lines.
    pub fn check(&self, lines: &[&str]) -> Vec<Diagnostic> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.ends_with(' ') && **line != SIGNATURE_DELIMITER)
            .map(|(index, _)| Diagnostic::new(Rule::TrailingWhitespace { line: index + 1 }))
            .collect()
    }
}

impl Default for TrailingWhitespaceChecker {
    fn default() -> Self {
        Self::new()
    }
}
