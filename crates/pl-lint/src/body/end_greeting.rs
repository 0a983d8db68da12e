//! End greeting and signature block rules (2.2.1.1).

use pl_rules::{Diagnostic, Rule, SIGNATURE_DELIMITER};

use crate::greeting::is_greeting;

/// Outcome of scanning for the end greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndGreetingScan {
    /// 0-based index of the end greeting line, if found
    pub index: Option<usize>,
    /// Diagnostics about the greeting and signature block
    pub diagnostics: Vec<Diagnostic>,
}

/// End greeting scanner.
///
/// Lines outside the body (before the first or past the last) read as
/// absent, and an absent line never equals `""` or `"-- "`. A greeting on
/// the first line reports the missing blank line above it; one on the last
/// or second-to-last line reports the missing blank line and delimiter.
pub struct EndGreetingScanner;

impl EndGreetingScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Find the first greeting at or after `start` and check its surroundings.
    ///
    /// Only the first greeting is considered. When none is found the scan
    /// reports [`Rule::GreetingNotFound`], including when `start` is already
    /// past the last line.
    pub fn scan(&self, lines: &[&str], start: usize) -> EndGreetingScan {
        let Some(index) = (start..lines.len()).find(|&i| is_greeting(lines[i])) else {
            return EndGreetingScan {
                index: None,
                diagnostics: vec![Diagnostic::new(Rule::GreetingNotFound)],
            };
        };

        EndGreetingScan {
            index: Some(index),
            diagnostics: self.check_signature_block(lines, index),
        }
    }

    fn check_signature_block(&self, lines: &[&str], index: usize) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let line = index + 1;

        let before = index.checked_sub(1).and_then(|i| lines.get(i)).copied();
        if before != Some("") {
            diagnostics.push(Diagnostic::new(Rule::BlankBeforeEndGreeting).at_line(line));
        }

        if lines.get(index + 1).copied() != Some("") {
            diagnostics.push(Diagnostic::new(Rule::BlankAfterEndGreeting).at_line(line));
        }

        if lines.get(index + 2).copied() != Some(SIGNATURE_DELIMITER) {
            diagnostics.push(Diagnostic::new(Rule::SignatureDelimiterMissing).at_line(line));
        } else {
            for (offset, signature_line) in lines.iter().enumerate().skip(index + 3) {
                if signature_line.is_empty() {
                    diagnostics.push(Diagnostic::new(Rule::BlankInSignature).at_line(offset + 1));
                }
            }
        }

        diagnostics
    }
}

impl Default for EndGreetingScanner {
    fn default() -> Self {
        Self::new()
    }
}
