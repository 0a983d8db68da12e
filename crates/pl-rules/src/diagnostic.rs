//! Diagnostics and validation results.

use serde::Serialize;

use crate::catalog::{Rule, RuleCode};

/// One reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Rule that was violated
    #[serde(skip)]
    pub rule: Rule,
    /// Human-readable description
    pub message: String,
    /// Rulebook code (empty when uncategorized)
    pub category: RuleCode,
    /// 1-based body line (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Diagnostic {
    /// Create a diagnostic for a rule.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            message: rule.message(),
            category: rule.code(),
            line: rule.line(),
        }
    }

    /// Add line number.
    pub fn at_line(mut self, line: usize) -> Self {
        debug_assert!(line > 0, "line numbers are 1-based");
        self.line = Some(line);
        self
    }

    /// Format for display.
    pub fn format(&self) -> String {
        let category = match self.category {
            RuleCode::Uncategorized => "-".to_string(),
            code => code.to_string(),
        };
        let line = self.line.map_or(String::new(), |l| format!(":{}", l));
        format!("[{}]{} {}: {}", category, line, self.rule.name(), self.message)
    }
}

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether no rule fired
    pub ok: bool,
    /// All diagnostics in detection order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create from diagnostics.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let ok = diagnostics.is_empty();
        Self { ok, diagnostics }
    }

    /// Get the number of diagnostics reported under a code.
    pub fn count_for(&self, code: RuleCode) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == code)
            .count()
    }

    /// Format as report.
    pub fn format_report(&self, title: &str) -> String {
        let mut report = String::new();

        report.push_str(title);
        report.push('\n');
        report.push_str(&"=".repeat(title.chars().count()));
        report.push_str("\n\n");

        for diagnostic in &self.diagnostics {
            report.push_str(&diagnostic.format());
            report.push('\n');
        }

        report.push_str(&format!("\nSummary: {} violations\n", self.diagnostics.len()));
        for code in RuleCode::ALL {
            let count = self.count_for(code);
            if count > 0 {
                let label = match code {
                    RuleCode::Uncategorized => "-",
                    code => code.as_str(),
                };
                report.push_str(&format!("  {}: {}\n", label, count));
            }
        }

        if self.ok {
            report.push_str("Result: PASS\n");
        } else {
            report.push_str("Result: FAIL\n");
        }

        report
    }
}
