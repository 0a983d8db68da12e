//! Whole-message linting.

use serde::Serialize;
use tracing::debug;

use pl_rules::ValidationResult;

use crate::body::BodyValidator;
use crate::subject::SubjectValidator;

/// A message to lint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Single-line subject, tags included
    pub subject: String,
    /// Newline-separated body
    pub body: String,
}

impl Message {
    /// Create a message from its parts.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Split composed text into subject and body.
    ///
    /// The first line is the subject. If the next line is blank it is
    /// dropped, and everything after it is the body, untouched.
    pub fn from_text(text: &str) -> Self {
        let (subject, rest) = text.split_once('\n').unwrap_or((text, ""));
        let body = rest.strip_prefix('\n').unwrap_or(rest);
        Self::new(subject, body)
    }
}

/// Results for the checked halves of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReport {
    /// Whether every checked half passes
    pub ok: bool,
    /// Subject result, if the subject was checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<ValidationResult>,
    /// Body result, if the body was checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ValidationResult>,
}

impl MessageReport {
    /// Create from per-half results.
    pub fn new(subject: Option<ValidationResult>, body: Option<ValidationResult>) -> Self {
        let ok = subject.iter().chain(body.iter()).all(|r| r.ok);
        Self { ok, subject, body }
    }

    /// Total number of diagnostics.
    pub fn diagnostics_count(&self) -> usize {
        self.subject
            .iter()
            .chain(self.body.iter())
            .map(|r| r.diagnostics.len())
            .sum()
    }

    /// Format as report.
    pub fn format_report(&self) -> String {
        let mut sections = Vec::new();

        if let Some(ref subject) = self.subject {
            sections.push(subject.format_report("Subject Check Results"));
        }
        if let Some(ref body) = self.body {
            sections.push(body.format_report("Body Check Results"));
        }

        sections.join("\n")
    }
}

/// Complete message linter.
pub struct MessageLinter {
    subject: SubjectValidator,
    body: BodyValidator,
}

impl MessageLinter {
    /// Create a new linter.
    pub fn new() -> Self {
        Self {
            subject: SubjectValidator::new(),
            body: BodyValidator::new(),
        }
    }

    /// Check a whole message.
    pub fn check(&self, message: &Message) -> MessageReport {
        self.check_parts(Some(&message.subject), Some(&message.body))
    }

    /// Check whichever halves are given.
    pub fn check_parts(&self, subject: Option<&str>, body: Option<&str>) -> MessageReport {
        let subject = subject.map(|s| self.subject.check(s));
        let body = body.map(|b| self.body.check(b));
        debug!(
            subject_violations = ?subject.as_ref().map(|r| r.diagnostics.len()),
            body_violations = ?body.as_ref().map(|r| r.diagnostics.len()),
            "message checked"
        );

        MessageReport::new(subject, body)
    }
}

impl Default for MessageLinter {
    fn default() -> Self {
        Self::new()
    }
}
