use thiserror::Error;

/// Classifies encoding errors by conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingErrorKind {
    /// Unicode to ASCII-compatible encoding failed
    ToAscii,
    /// ASCII-compatible encoding to Unicode failed
    ToUnicode,
}

/// Classifies suffix resolution errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixErrorKind {
    /// Hostname is empty
    EmptyHost,
    /// Hostname has an empty label (leading, trailing or doubled dot)
    EmptyLabel,
    /// No suffix rule matches the hostname
    UnknownSuffix,
    /// Hostname is itself a public suffix and has no registrable label
    IsSuffix,
}

/// Domain splitting error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Encoding error: {message}")]
    EncodingError {
        kind: EncodingErrorKind,
        message: String,
    },

    #[error("Suffix resolution error: {message}")]
    SuffixResolutionError {
        kind: SuffixErrorKind,
        message: String,
    },
}

impl DomainError {
    pub(crate) fn encoding(kind: EncodingErrorKind, message: impl Into<String>) -> Self {
        Self::EncodingError {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn suffix(kind: SuffixErrorKind, message: impl Into<String>) -> Self {
        Self::SuffixResolutionError {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
