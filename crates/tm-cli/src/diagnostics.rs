//! Diagnostic and error reporting utilities

use crate::{CliError, Result};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use tm_core::MatchError;
use tm_variable::ParseArgError;

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(1)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// A rejected `--arg` list, labelled against the arguments as typed.
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ArgumentDiagnostic {
    #[error("{message}")]
    #[diagnostic(
        code(typematch::unparsable_argument),
        help("arguments look like `unit=3`, `shape=1,2`, `values=1,4,5` or `variances:f32=6,7`")
    )]
    Unparsable {
        message: String,
        #[source_code]
        src: String,
        #[label("cannot parse this argument")]
        span: SourceSpan,
    },

    #[error("{message}")]
    #[diagnostic(
        code(typematch::unrecognized_argument),
        help("every argument must match one field type; check the element type against --precision")
    )]
    Unrecognized {
        message: String,
        #[source_code]
        src: String,
        #[label("not a field of this shape")]
        span: SourceSpan,
    },

    #[error("{message}")]
    #[diagnostic(
        code(typematch::duplicate_argument),
        help("each field may be supplied at most once")
    )]
    Duplicate {
        message: String,
        #[source_code]
        src: String,
        #[label("first supplied here")]
        first: SourceSpan,
        #[label("supplied again here")]
        second: SourceSpan,
    },
}

/// The arguments joined by single spaces, with the span of each one.
fn layout(arguments: &[String]) -> (String, Vec<SourceSpan>) {
    let mut src = String::new();
    let mut spans = Vec::with_capacity(arguments.len());
    for argument in arguments {
        if !src.is_empty() {
            src.push(' ');
        }
        spans.push(SourceSpan::new(src.len().into(), argument.len()));
        src.push_str(argument);
    }
    (src, spans)
}

fn span_at(spans: &[SourceSpan], position: usize) -> SourceSpan {
    spans
        .get(position)
        .copied()
        .unwrap_or_else(|| SourceSpan::new(0.into(), 0))
}

pub fn parse_diagnostic(
    arguments: &[String],
    position: usize,
    error: &ParseArgError,
) -> ArgumentDiagnostic {
    let (src, spans) = layout(arguments);
    ArgumentDiagnostic::Unparsable {
        message: error.to_string(),
        span: span_at(&spans, position),
        src,
    }
}

pub fn match_diagnostic(arguments: &[String], error: &MatchError) -> ArgumentDiagnostic {
    let (src, spans) = layout(arguments);
    match error {
        MatchError::Unrecognized { position, .. } => ArgumentDiagnostic::Unrecognized {
            message: error.to_string(),
            span: span_at(&spans, *position),
            src,
        },
        MatchError::Duplicate { first, second, .. } => ArgumentDiagnostic::Duplicate {
            message: error.to_string(),
            first: span_at(&spans, *first),
            second: span_at(&spans, *second),
            src,
        },
    }
}

/// Render errors that carry a diagnostic through miette. Returns `false`
/// when the caller should log the error itself.
pub fn render_cli_error(error: &CliError) -> bool {
    match error {
        CliError::Rejected(diagnostic) => {
            let report = miette::Report::new(diagnostic.as_ref().clone());
            eprintln!("{:?}", report);
            true
        }
        _ => false,
    }
}
