//! Body line width rules (2.2.2.1).

use pl_rules::{Diagnostic, Rule};

use super::FIRST_BODY_LINE;

/// Maximum width of an unquoted line.
pub const UNQUOTED_WIDTH_MAX: usize = 72;
/// Maximum width of a quoted (`>`) line.
pub const QUOTED_WIDTH_MAX: usize = 80;
/// Lines shorter than this are reported, unless they are 0 or 1 wide.
pub const WIDTH_MIN: usize = 60;

/// Width checker for the free-form part of the body.
pub struct BodyWidthChecker;

impl BodyWidthChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Check lines from the first body line up to, not including, `end`.
    ///
    /// Widths are counted in Unicode scalar values, so an emoji is one
    /// column here where UTF-16 would count two.
    pub fn check(&self, lines: &[&str], end: usize) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, line) in lines.iter().enumerate().take(end).skip(FIRST_BODY_LINE) {
            let len = line.chars().count();

            if line.starts_with('>') {
                if len > QUOTED_WIDTH_MAX {
                    diagnostics.push(Diagnostic::new(Rule::QuotedTooLong { len }).at_line(index + 1));
                }
            } else if len > UNQUOTED_WIDTH_MAX {
                diagnostics.push(Diagnostic::new(Rule::UnquotedTooLong { len }).at_line(index + 1));
            }

            if len > 1 && len < WIDTH_MIN {
                diagnostics.push(Diagnostic::new(Rule::LineTooShort {
                    line: index + 1,
                    len,
                }));
            }
        }

        diagnostics
    }
}

impl Default for BodyWidthChecker {
    fn default() -> Self {
        Self::new()
    }
}
