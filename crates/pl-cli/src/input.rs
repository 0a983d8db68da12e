//! Reading subjects and bodies from files, stdin or arguments.

use std::io::Read;
use std::path::{Path, PathBuf};

use pl_lint::Message;

/// Errors raised before linting starts.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Nothing to check
    #[error("nothing to check: pass --subject, --body or --message")]
    NoInput,

    /// A file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdin could not be read
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the user asked to lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Subject and body from one composed text
    Message(Message),
    /// Either half, or both, given separately
    Parts {
        subject: Option<String>,
        body: Option<String>,
    },
}

/// Read text from a path, or from stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve command-line arguments into an input.
pub fn resolve(
    subject: Option<String>,
    body: Option<&Path>,
    message: Option<&Path>,
) -> Result<Input, CliError> {
    if let Some(path) = message {
        let text = read_source(path)?;
        return Ok(Input::Message(Message::from_text(&text)));
    }

    let body = body.map(read_source).transpose()?;
    if subject.is_none() && body.is_none() {
        return Err(CliError::NoInput);
    }

    Ok(Input::Parts { subject, body })
}
