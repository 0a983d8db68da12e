//! Body rules (2.2.1.1, 2.2.2.1, 2.2.2.5).
//!
//! The body is validated in four stages, in this order:
//!
//! 1. Opening greeting on line 1, blank line 2
//! 2. End greeting scan and signature block ([`EndGreetingScanner`])
//! 3. Line width between the two greetings ([`BodyWidthChecker`])
//! 4. Trailing white space on every line ([`TrailingWhitespaceChecker`])
//!
//! Each stage returns its own diagnostics; the validator concatenates them
//! in stage order.

mod end_greeting;
mod trailing;
mod width;

pub use end_greeting::{EndGreetingScan, EndGreetingScanner};
pub use trailing::TrailingWhitespaceChecker;
pub use width::BodyWidthChecker;

use pl_rules::{Diagnostic, Rule, ValidationResult};
use tracing::debug;

use crate::greeting::is_greeting;

/// Index of the first free-form body line (after greeting and blank).
pub const FIRST_BODY_LINE: usize = 2;

/// Split a body into lines on `\n`.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line and
/// `\r` is kept as part of the line.
pub fn split_lines(body: &str) -> Vec<&str> {
    body.split('\n').collect()
}

/// Complete body checker.
pub struct BodyValidator {
    end_greeting: EndGreetingScanner,
    width: BodyWidthChecker,
    trailing: TrailingWhitespaceChecker,
}

impl BodyValidator {
    /// Create a new checker.
    pub fn new() -> Self {
        Self {
            end_greeting: EndGreetingScanner::new(),
            width: BodyWidthChecker::new(),
            trailing: TrailingWhitespaceChecker::new(),
        }
    }

    /// Check a body against every body rule.
    pub fn check(&self, body: &str) -> ValidationResult {
        let lines = split_lines(body);

        if lines.len() < FIRST_BODY_LINE {
            debug!(lines = lines.len(), "body too short, skipping remaining checks");
            return ValidationResult::from_diagnostics(vec![Diagnostic::new(Rule::BodyTooShort)]);
        }

        let mut diagnostics = self.check_opening(&lines);

        let scan = self.end_greeting.scan(&lines, FIRST_BODY_LINE);
        debug!(
            end_greeting = ?scan.index,
            found = scan.diagnostics.len(),
            "end greeting scan finished"
        );
        diagnostics.extend(scan.diagnostics);
        if scan.index.is_none() {
            diagnostics.push(Diagnostic::new(Rule::EndGreetingNotFound));
        }

        if let Some(end) = scan.index {
            let width = self.width.check(&lines, end);
            debug!(found = width.len(), "width check finished");
            diagnostics.extend(width);
        }

        let trailing = self.trailing.check(&lines);
        debug!(found = trailing.len(), "trailing white space check finished");
        diagnostics.extend(trailing);

        ValidationResult::from_diagnostics(diagnostics)
    }

    /// Check the opening greeting and the blank line after it.
    fn check_opening(&self, lines: &[&str]) -> Vec<Diagnostic> {
        debug_assert!(lines.len() >= FIRST_BODY_LINE);

        let mut diagnostics = Vec::new();

        if !is_greeting(lines[0]) {
            diagnostics.push(Diagnostic::new(Rule::OpeningGreeting).at_line(1));
        }

        if !lines[1].is_empty() {
            diagnostics.push(Diagnostic::new(Rule::OpeningBlank).at_line(2));
        }

        diagnostics
    }
}

impl Default for BodyValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_rules::RuleCode;

    fn rules(body: &str) -> Vec<Rule> {
        BodyValidator::new()
            .check(body)
            .diagnostics
            .into_iter()
            .map(|d| d.rule)
            .collect()
    }

    const LINE_66: &str = "Some line of exactly 65 chars long that is fine as body text here.";

    fn valid_body() -> String {
        ["Hello,", "", LINE_66, "", "Regards,", "", "-- ", "John"].join("\n")
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_valid_body() {
        let result = BodyValidator::new().check(&valid_body());
        assert!(result.ok, "{:?}", result.diagnostics);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_too_short_exits_early() {
        let result = BodyValidator::new().check("Hello, ");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].rule, Rule::BodyTooShort);
        assert_eq!(result.diagnostics[0].category, RuleCode::Uncategorized);

        assert_eq!(rules(""), vec![Rule::BodyTooShort]);
    }

    #[test]
    fn test_opening_checks() {
        let body = valid_body().replacen("Hello,\n\n", "Hello\nfoo\n", 1);
        let found = rules(&body);
        assert_eq!(&found[..2], &[Rule::OpeningGreeting, Rule::OpeningBlank]);
    }

    #[test]
    fn test_missing_end_greeting() {
        assert_eq!(
            rules("Hello,\n\n"),
            vec![Rule::GreetingNotFound, Rule::EndGreetingNotFound]
        );
    }

    #[test]
    fn test_two_line_body() {
        assert_eq!(
            rules("Hello,\n"),
            vec![Rule::GreetingNotFound, Rule::EndGreetingNotFound]
        );
    }

    #[test]
    fn test_width_skipped_without_end_greeting() {
        let body = ["Hello,", "", "short", "still short"].join("\n");
        let found = rules(&body);
        assert!(!found.iter().any(|r| matches!(r, Rule::LineTooShort { .. })));
    }

    #[test]
    fn test_stage_order() {
        let body = ["Hi", "x", "short ", "Regards,", "-- ", "", "Jo"].join("\n");
        assert_eq!(
            rules(&body),
            vec![
                Rule::OpeningGreeting,
                Rule::OpeningBlank,
                Rule::BlankBeforeEndGreeting,
                Rule::BlankAfterEndGreeting,
                Rule::SignatureDelimiterMissing,
                Rule::LineTooShort { line: 3, len: 6 },
                Rule::TrailingWhitespace { line: 3 },
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let validator = BodyValidator::new();
        let body = ["Hi", "x", "short ", "Regards,", "-- ", "", "Jo"].join("\n");
        assert_eq!(validator.check(&body), validator.check(&body));
    }
}
