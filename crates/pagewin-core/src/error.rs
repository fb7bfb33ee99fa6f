//! Common error type definitions.

use serde::Serialize;
use strum::IntoStaticStr;
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors that can occur in pagewin-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A requested page lies outside `1..=total_pages`.
    PageOutOfRange,
    /// Typed page input could not be read as a page number.
    InvalidPageInput,
    /// The window configuration was rejected.
    InvalidConfig,
}

impl ErrorKind {
    /// Returns the snake_case name of the kind.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A structured error type for pagewin-core operations.
#[derive(Debug, Error)]
#[error("{}{}", kind.as_str(), message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new page out of range error.
    pub fn page_out_of_range() -> Self {
        Self::new(ErrorKind::PageOutOfRange)
    }

    /// Creates a new invalid page input error.
    pub fn invalid_page_input() -> Self {
        Self::new(ErrorKind::InvalidPageInput)
    }

    /// Creates a new invalid configuration error.
    pub fn invalid_config() -> Self {
        Self::new(ErrorKind::InvalidConfig)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Returns the message, or the kind name when no message was attached.
    pub fn message_or_kind(&self) -> &str {
        self.message.as_deref().unwrap_or(self.kind.as_str())
    }
}
