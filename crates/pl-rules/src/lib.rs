//! # pl-rules
//!
//! Rule catalog and diagnostic types for patch-mail etiquette linting.
//!
//! Every violation the linter reports maps back to a numbered entry of the
//! etiquette rulebook:
//!
//! | Code | Covers |
//! |------|--------|
//! | 2.1.1.1 | Subject tag prefix `[TAG1][TAG2] ` |
//! | 2.1.1.2 | Subject length (80 max) |
//! | 2.2.1.1 | Body structure: greeting, blank separators, signature block |
//! | 2.2.2.1 | Body line width (72 unquoted, 80 quoted, 60 min) |
//! | 2.2.2.5 | Trailing white space |
//!
//! Structural failures that have no rulebook entry (a body that is too
//! short, a missing end greeting) carry the empty category.

pub mod catalog;
pub mod diagnostic;

pub use catalog::{Rule, RuleCode, SIGNATURE_DELIMITER};
pub use diagnostic::{Diagnostic, ValidationResult};
