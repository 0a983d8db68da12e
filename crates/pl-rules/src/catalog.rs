//! The rule catalog.
//!
//! `RuleCode` is the closed set of rulebook codes; `Rule` is the closed set
//! of distinct violations, each bound to exactly one code and one message.

use std::fmt;

use serde::Serialize;

/// The literal line that opens a signature block.
pub const SIGNATURE_DELIMITER: &str = "-- ";

/// A rulebook code, serialized as its dotted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RuleCode {
    /// 2.1.1.1: subject tag prefix
    #[serde(rename = "2.1.1.1")]
    SubjectFormat,
    /// 2.1.1.2: subject length
    #[serde(rename = "2.1.1.2")]
    SubjectLength,
    /// 2.2.1.1: body greeting and signature structure
    #[serde(rename = "2.2.1.1")]
    BodyStructure,
    /// 2.2.2.1: body line width
    #[serde(rename = "2.2.2.1")]
    LineWidth,
    /// 2.2.2.5: trailing white space
    #[serde(rename = "2.2.2.5")]
    TrailingWhitespace,
    /// No rulebook entry
    #[serde(rename = "")]
    Uncategorized,
}

impl RuleCode {
    /// Every code, in rulebook order.
    pub const ALL: [RuleCode; 6] = [
        RuleCode::SubjectFormat,
        RuleCode::SubjectLength,
        RuleCode::BodyStructure,
        RuleCode::LineWidth,
        RuleCode::TrailingWhitespace,
        RuleCode::Uncategorized,
    ];

    /// Get the dotted code, or `""` when uncategorized.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::SubjectFormat => "2.1.1.1",
            RuleCode::SubjectLength => "2.1.1.2",
            RuleCode::BodyStructure => "2.2.1.1",
            RuleCode::LineWidth => "2.2.2.1",
            RuleCode::TrailingWhitespace => "2.2.2.5",
            RuleCode::Uncategorized => "",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violation kind.
///
/// Line numbers carried by variants are 1-based; lengths are in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Subject does not open with `[TAG1][TAG2]`
    SubjectTagFormat,
    /// No space right after the tag prefix
    SubjectTagSpace,
    /// Subject longer than 80 characters
    SubjectTooLong,
    /// Body has fewer than two lines
    BodyTooShort,
    /// First body line is not a greeting
    OpeningGreeting,
    /// Second body line is not empty
    OpeningBlank,
    /// No greeting line after the opening
    GreetingNotFound,
    /// Body has no end greeting
    EndGreetingNotFound,
    /// Line above the end greeting is not empty
    BlankBeforeEndGreeting,
    /// Line below the end greeting is not empty
    BlankAfterEndGreeting,
    /// No `-- ` two lines below the end greeting
    SignatureDelimiterMissing,
    /// Empty line inside the signature block
    BlankInSignature,
    /// Quoted line wider than 80
    QuotedTooLong { len: usize },
    /// Unquoted line wider than 72
    UnquotedTooLong { len: usize },
    /// Body line narrower than 60
    LineTooShort { line: usize, len: usize },
    /// Line ends in a space
    TrailingWhitespace { line: usize },
}

impl Rule {
    /// Get the rulebook code this rule reports under.
    pub fn code(&self) -> RuleCode {
        match self {
            Rule::SubjectTagFormat | Rule::SubjectTagSpace => RuleCode::SubjectFormat,
            Rule::SubjectTooLong => RuleCode::SubjectLength,
            Rule::BodyTooShort | Rule::EndGreetingNotFound => RuleCode::Uncategorized,
            Rule::OpeningGreeting
            | Rule::OpeningBlank
            | Rule::GreetingNotFound
            | Rule::BlankBeforeEndGreeting
            | Rule::BlankAfterEndGreeting
            | Rule::SignatureDelimiterMissing
            | Rule::BlankInSignature => RuleCode::BodyStructure,
            Rule::QuotedTooLong { .. }
            | Rule::UnquotedTooLong { .. }
            | Rule::LineTooShort { .. } => RuleCode::LineWidth,
            Rule::TrailingWhitespace { .. } => RuleCode::TrailingWhitespace,
        }
    }

    /// Short stable identifier, used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::SubjectTagFormat => "SubjectTagFormat",
            Rule::SubjectTagSpace => "SubjectTagSpace",
            Rule::SubjectTooLong => "SubjectTooLong",
            Rule::BodyTooShort => "BodyTooShort",
            Rule::OpeningGreeting => "OpeningGreeting",
            Rule::OpeningBlank => "OpeningBlank",
            Rule::GreetingNotFound => "GreetingNotFound",
            Rule::EndGreetingNotFound => "EndGreetingNotFound",
            Rule::BlankBeforeEndGreeting => "BlankBeforeEndGreeting",
            Rule::BlankAfterEndGreeting => "BlankAfterEndGreeting",
            Rule::SignatureDelimiterMissing => "SignatureDelimiterMissing",
            Rule::BlankInSignature => "BlankInSignature",
            Rule::QuotedTooLong { .. } => "QuotedTooLong",
            Rule::UnquotedTooLong { .. } => "UnquotedTooLong",
            Rule::LineTooShort { .. } => "LineTooShort",
            Rule::TrailingWhitespace { .. } => "TrailingWhitespace",
        }
    }

    /// Render the human-readable message.
    pub fn message(&self) -> String {
        match self {
            Rule::SubjectTagFormat => {
                "The subject must start with two tags in the format '[TAG1][TAG2]'.".to_string()
            }
            Rule::SubjectTagSpace => "There must be a space after the second tag.".to_string(),
            Rule::SubjectTooLong => "The length of the subject, including both tags and summary, \
                                     must not exceed 80 characters."
                .to_string(),
            Rule::BodyTooShort => "The body is too short".to_string(),
            Rule::OpeningGreeting => "The first line of the body must be a greeting.".to_string(),
            Rule::OpeningBlank => "The second line of the body must be empty.".to_string(),
            Rule::GreetingNotFound => "The greeting was not found.".to_string(),
            Rule::EndGreetingNotFound => "The end greeting was not found.".to_string(),
            Rule::BlankBeforeEndGreeting => {
                "There must be an empty line between the greeting and the body.".to_string()
            }
            Rule::BlankAfterEndGreeting => {
                "There must be an empty line between the greeting and the signature.".to_string()
            }
            Rule::SignatureDelimiterMissing => format!(
                "The signature delimiter '{}' was not found after the greeting.",
                SIGNATURE_DELIMITER
            ),
            Rule::BlankInSignature => {
                "There must be no empty lines after the signature delimiter.".to_string()
            }
            Rule::QuotedTooLong { len } => {
                format!("Quoted lines must not exceed 80 characters ({}).", len)
            }
            Rule::UnquotedTooLong { len } => {
                format!("Unquoted lines must not exceed 72 characters ({}).", len)
            }
            Rule::LineTooShort { line, len } => {
                format!("Lines {} must not be less than 60 characters ({}).", line, len)
            }
            Rule::TrailingWhitespace { line } => {
                format!("Line {} has trailing white spaces.", line)
            }
        }
    }

    /// Body line the rule is anchored to, if the rule itself names one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Rule::LineTooShort { line, .. } | Rule::TrailingWhitespace { line } => Some(*line),
            _ => None,
        }
    }
}
