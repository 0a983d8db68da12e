//! # pl-lint
//!
//! Structural linter for patch-submission mails.
//!
//! A message is a one-line subject plus a newline-separated body. Two
//! independent validators check it against the etiquette rulebook and
//! return every violation they find, never stopping at the first one.
//!
//! ## Subject (2.1.1.x)
//! - Two bracketed tags up front: `[TAG1][TAG2]`, each 1-10 of `[A-Z0-9-_+/]`
//! - A space right after the second tag
//! - At most 80 characters overall
//!
//! ## Body (2.2.x.x)
//!
//! ```text
//! 0   Hello,                  <- opening greeting
//! 1                           <- blank separator
//! 2   free-form text ...      <- width checked: 60..=72, quoted up to 80
//! n-1
//! n   Regards,                <- end greeting (first greeting from line 2)
//! n+1
//! n+2 --                      <- signature delimiter "-- "
//! n+3 Name                    <- signature, no blank lines
//! ```
//!
//! Stages run in a fixed order (structure, end greeting, width, trailing
//! white space) because the width stage needs the end greeting position.

pub mod body;
pub mod greeting;
pub mod message;
pub mod subject;

pub use body::{
    BodyValidator, BodyWidthChecker, EndGreetingScan, EndGreetingScanner,
    TrailingWhitespaceChecker,
};
pub use greeting::is_greeting;
pub use message::{Message, MessageLinter, MessageReport};
pub use subject::SubjectValidator;

pub use pl_rules::{Diagnostic, Rule, RuleCode, ValidationResult};

/// Validate a subject line with the default validator.
pub fn validate_subject(subject: &str) -> ValidationResult {
    SubjectValidator::new().check(subject)
}

/// Validate a message body with the default validator.
pub fn validate_body(body: &str) -> ValidationResult {
    BodyValidator::new().check(body)
}
