use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn missing_placeholder_error(&self, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingPlaceholder {
            src: self.named_source(),
            span,
        })
    }

    pub fn invalid_tool_file_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidToolFile {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a lanebridge.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lanebridge.toml")]
    #[diagnostic(code(lanebridge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("build command does not reference the project")]
    #[diagnostic(
        code(lanebridge::missing_placeholder),
        help("insert '{{project}}' where the build project path belongs")
    )]
    MissingPlaceholder {
        #[source_code]
        src: NamedSource<String>,
        #[label("no '{{project}}' placeholder")]
        span: Option<SourceSpan>,
    },

    #[error("invalid tool configuration file '{name}'")]
    #[diagnostic(
        code(lanebridge::invalid_tool_file),
        help("tool configuration files are named after their tool, e.g. 'Gymfile' or 'Scanfile'")
    )]
    InvalidToolFile {
        #[source_code]
        src: NamedSource<String>,
        #[label("must end in 'file'")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(lanebridge::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
