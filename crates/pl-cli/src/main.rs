//! CLI for linting patch mails against the etiquette rulebook.
//!
//! # Usage
//!
//! ```bash
//! # Check a subject line
//! patch-lint --subject "[PATCH][NET] fix a leak"
//!
//! # Check a body read from a file (or `-` for stdin)
//! patch-lint --body mail.txt
//!
//! # Check a composed message: subject, blank line, body
//! git log -1 --format=%B | patch-lint --message - --format json
//! ```
//!
//! Exit status: 0 when everything passes, 1 when violations were found,
//! 2 on usage or input errors.

mod config;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pl_lint::{MessageLinter, MessageReport};

use crate::config::{OutputConfig, OutputFormat};
use crate::input::{CliError, Input};

#[derive(Parser)]
#[command(name = "patch-lint", version, about = "Lint patch mails against the etiquette rulebook")]
struct Args {
    /// Subject line to check
    #[arg(short, long, conflicts_with = "message")]
    subject: Option<String>,

    /// Body file to check (`-` for stdin)
    #[arg(short, long, conflicts_with = "message")]
    body: Option<PathBuf>,

    /// Composed message file: subject, blank line, body (`-` for stdin)
    #[arg(short, long)]
    message: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print nothing, only set the exit status
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every validation stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn output_config(&self) -> OutputConfig {
        let base = if self.quiet {
            OutputConfig::silent()
        } else if self.format == OutputFormat::Json {
            OutputConfig::machine()
        } else {
            OutputConfig::default()
        };

        OutputConfig {
            verbose: self.verbose,
            ..base
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.output_config();
    init_tracing(&config);

    match run(args, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(config: &OutputConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Lint the requested input and print the outcome; returns whether it passed.
fn run(args: Args, config: &OutputConfig) -> Result<bool, CliError> {
    let input = input::resolve(args.subject, args.body.as_deref(), args.message.as_deref())?;
    let report = lint(&MessageLinter::new(), &input);
    debug!(ok = report.ok, "lint finished");

    if !config.quiet {
        println!("{}", render(&report, config.format)?);
    }

    Ok(report.ok)
}

fn lint(linter: &MessageLinter, input: &Input) -> MessageReport {
    match input {
        Input::Message(message) => linter.check(message),
        Input::Parts { subject, body } => linter.check_parts(subject.as_deref(), body.as_deref()),
    }
}

fn render(report: &MessageReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(report.format_report()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_lint::Message;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["patch-lint", "-s", "[A][B] x", "--format", "json"]).unwrap();
        assert_eq!(args.subject.as_deref(), Some("[A][B] x"));
        assert_eq!(args.output_config().format, OutputFormat::Json);

        assert!(Args::try_parse_from(["patch-lint", "-s", "x", "-m", "mail.txt"]).is_err());
        assert!(Args::try_parse_from(["patch-lint", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_subject_only_report() {
        let input = Input::Parts {
            subject: Some("[A][B]x".to_string()),
            body: None,
        };
        let report = lint(&MessageLinter::new(), &input);
        assert!(!report.ok);
        assert!(report.body.is_none());

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["subject"]["diagnostics"][0]["category"], "2.1.1.1");
        assert!(value.get("body").is_none());
    }

    #[test]
    fn test_message_report_text() {
        let input = Input::Message(Message::new("[A][B] x", "Hello,\n"));
        let report = lint(&MessageLinter::new(), &input);
        let text = render(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("Subject Check Results"));
        assert!(text.contains("Body Check Results"));
        assert!(text.contains("The end greeting was not found."));
    }
}
