//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration parse failures are rendered with the offending TOML
//! snippet and a label pointing at the problem; every other error is
//! printed as a single line by the output layer.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(mistrz::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte range of the problematic region, when the parser knows it.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

/// Build a rich report for errors that carry source context.
pub fn report(err: &Error) -> Option<miette::Report> {
    let Error::Config(ConfigError::Parse {
        path,
        content,
        source,
    }) = err
    else {
        return None;
    };

    let diagnostic = ConfigDiagnostic {
        message: format!("failed to parse {}", path.display()),
        src: NamedSource::new(path.display().to_string(), content.clone()),
        span: source
            .span()
            .map(|range| SourceSpan::from((range.start, range.end - range.start))),
        help: Some(source.message().to_string()),
    };
    Some(miette::Report::new(diagnostic))
}
