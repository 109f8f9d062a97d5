use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "pdata.toml");
/// ctx.validation_error("no files declared");
/// ctx.reserved_keyword_error("func", "struct", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(to_span);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate name error pointing at both declarations.
    pub fn duplicate_name_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateName {
            src: self.named_source(),
            first_span: to_span(first),
            second_span: to_span(second),
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an unknown struct reference error.
    pub fn unknown_struct_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::UnknownStruct {
            src: self.named_source(),
            span: to_span(span),
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create a struct kind mismatch error.
    pub fn kind_mismatch_error(
        &self,
        name: impl Into<String>,
        expected: &'static str,
        found: &'static str,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::KindMismatch {
            src: self.named_source(),
            span: to_span(span),
            name: name.into(),
            expected,
            found,
        })
    }

    /// Create a missing key error.
    pub fn missing_key_error(
        &self,
        key: &'static str,
        context: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::MissingKey {
            src: self.named_source(),
            span: to_span(span),
            key,
            context: context.into(),
        })
    }
}

/// Convert a byte range from `toml::Spanned` into a miette span.
pub(crate) fn to_span(range: Range<usize>) -> SourceSpan {
    (range.start, range.end - range.start).into()
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a pdata.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pdata.toml")]
    #[diagnostic(code(pdatagen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pdatagen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Go reserved keyword")]
    #[diagnostic(
        code(pdatagen::reserved_keyword),
        help("rename the {context} '{name}' to something else")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(pdatagen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate {context} '{name}'")]
    #[diagnostic(code(pdatagen::duplicate_name))]
    DuplicateName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
        context: String,
    },

    #[error("unknown struct '{name}'")]
    #[diagnostic(
        code(pdatagen::unknown_struct),
        help("declare a struct named '{name}' in any [[files.structs]] table")
    )]
    UnknownStruct {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced by {context}")]
        span: SourceSpan,
        name: String,
        context: String,
    },

    #[error("struct '{name}' is a {found} struct, expected {expected}")]
    #[diagnostic(code(pdatagen::kind_mismatch))]
    KindMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("must reference a {expected} struct")]
        span: SourceSpan,
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing '{key}' for {context}")]
    #[diagnostic(code(pdatagen::missing_key))]
    MissingKey {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: SourceSpan,
        key: &'static str,
        context: String,
    },
}
