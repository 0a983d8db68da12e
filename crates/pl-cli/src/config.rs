//! Output configuration.

use clap::ValueEnum;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,
    /// Print nothing, only set the exit code
    pub quiet: bool,
    /// Log each stage at debug level
    pub verbose: bool,
}

impl OutputConfig {
    /// Config for scripts: JSON, no logging.
    pub fn machine() -> Self {
        Self {
            format: OutputFormat::Json,
            ..Default::default()
        }
    }

    /// Config for CI gates: exit code only.
    pub fn silent() -> Self {
        Self {
            quiet: true,
            ..Default::default()
        }
    }

    /// Default log filter directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
