//! Subject line rules (2.1.1.1, 2.1.1.2).

use once_cell::sync::Lazy;
use regex::Regex;

use pl_rules::{Diagnostic, Rule, ValidationResult};

/// Maximum subject length in characters, tags included.
pub const SUBJECT_LENGTH_MAX: usize = 80;

/// Two adjacent tags of 1-10 characters from `[A-Z0-9-_+/]`.
static TAG_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[[A-Z0-9\-_+/]{1,10}\]\[[A-Z0-9\-_+/]{1,10}\]").expect("tag pattern is valid")
});

/// Subject rule checker.
pub struct SubjectValidator;

impl SubjectValidator {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Check a subject against every subject rule.
    pub fn check(&self, subject: &str) -> ValidationResult {
        let mut diagnostics = Vec::new();

        diagnostics.extend(self.check_tags(subject));
        diagnostics.extend(self.check_length(subject));

        ValidationResult::from_diagnostics(diagnostics)
    }

    /// Check the `[TAG1][TAG2] ` prefix.
    ///
    /// The format and the space are separate findings. Without a matching
    /// prefix the space check looks at the first character of the subject.
    pub fn check_tags(&self, subject: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let rest = match TAG_PREFIX.find(subject) {
            Some(prefix) => &subject[prefix.end()..],
            None => {
                diagnostics.push(Diagnostic::new(Rule::SubjectTagFormat));
                subject
            }
        };

        if !rest.starts_with(' ') {
            diagnostics.push(Diagnostic::new(Rule::SubjectTagSpace));
        }

        diagnostics
    }

    /// Check the overall length.
    ///
    /// Length is in Unicode scalar values, not UTF-16 code units, so a
    /// character outside the BMP such as an emoji counts once.
    pub fn check_length(&self, subject: &str) -> Vec<Diagnostic> {
        if subject.chars().count() > SUBJECT_LENGTH_MAX {
            vec![Diagnostic::new(Rule::SubjectTooLong)]
        } else {
            Vec::new()
        }
    }
}

impl Default for SubjectValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(subject: &str) -> Vec<Rule> {
        SubjectValidator::new()
            .check(subject)
            .diagnostics
            .into_iter()
            .map(|d| d.rule)
            .collect()
    }

    #[test]
    fn test_valid_subjects() {
        assert!(rules("[PATCH][NET] fix a leak").is_empty());
        assert!(rules("[A][B] x").is_empty());
        assert!(rules("[RFC-V2][MM_PAGE+/] summary").is_empty());
        assert!(rules("[0123456789][ABCDEFGHIJ] ten chars each").is_empty());
    }

    #[test]
    fn test_missing_space() {
        assert_eq!(rules("[A][B]hello"), vec![Rule::SubjectTagSpace]);
        assert_eq!(rules("[A][B]"), vec![Rule::SubjectTagSpace]);
    }

    #[test]
    fn test_bad_tags() {
        // Lowercase, empty and eleven-character tags all fail the prefix.
        assert!(rules("[patch][NET] x").contains(&Rule::SubjectTagFormat));
        assert!(rules("[][NET] x").contains(&Rule::SubjectTagFormat));
        assert!(rules("[ABCDEFGHIJK][NET] x").contains(&Rule::SubjectTagFormat));
        assert!(rules("[PATCH] [NET] x").contains(&Rule::SubjectTagFormat));
        assert!(rules("[PATCH] x").contains(&Rule::SubjectTagFormat));
    }

    #[test]
    fn test_space_checked_without_prefix() {
        // No prefix: the first character of the whole subject decides.
        assert_eq!(
            rules("no tags here"),
            vec![Rule::SubjectTagFormat, Rule::SubjectTagSpace]
        );
        assert_eq!(rules(" leading space"), vec![Rule::SubjectTagFormat]);
        assert_eq!(
            rules(""),
            vec![Rule::SubjectTagFormat, Rule::SubjectTagSpace]
        );
    }

    #[test]
    fn test_length() {
        let prefix = "[A][B] ";
        let at_limit = format!("{}{}", prefix, "x".repeat(SUBJECT_LENGTH_MAX - prefix.len()));
        assert_eq!(at_limit.len(), 80);
        assert!(rules(&at_limit).is_empty());

        let over = format!("{}x", at_limit);
        let result = SubjectValidator::new().check(&over);
        assert!(!result.ok);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].category.as_str(), "2.1.1.2");
    }

    #[test]
    fn test_length_counts_characters() {
        let subject = format!("[A][B] {}", "é".repeat(73));
        assert_eq!(subject.chars().count(), 80);
        assert!(rules(&subject).is_empty());
    }

    #[test]
    fn test_length_counts_emoji_once() {
        let subject = format!("[A][B] {}", "\u{1F600}".repeat(73));
        assert_eq!(subject.chars().count(), 80);
        assert_eq!(subject.encode_utf16().count(), 153);
        assert!(rules(&subject).is_empty());

        let over = format!("{}\u{1F600}", subject);
        assert_eq!(rules(&over), vec![Rule::SubjectTooLong]);
    }

    #[test]
    fn test_all_three() {
        let subject = "x".repeat(81);
        assert_eq!(
            rules(&subject),
            vec![Rule::SubjectTagFormat, Rule::SubjectTagSpace, Rule::SubjectTooLong]
        );
    }
}
