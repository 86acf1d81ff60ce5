//! IDNA codec module.
//!
//! Converts hostnames between Unicode and their ASCII-compatible encoding.

use crate::error::{DomainError, EncodingErrorKind, Result};

/// Host codec interface.
pub trait HostCodec: Send + Sync {
    /// Encode a Unicode label or dotted host to its ASCII-compatible form.
    fn to_ascii(&self, input: &str) -> Result<String>;

    /// Decode an ASCII-compatible label or dotted host back to Unicode.
    fn to_unicode(&self, input: &str) -> Result<String>;
}

/// UTS #46 codec backed by the `idna` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdnaCodec;

impl IdnaCodec {
    /// Create a new IDNA codec.
    pub fn new() -> Self {
        Self
    }
}

impl HostCodec for IdnaCodec {
    fn to_ascii(&self, input: &str) -> Result<String> {
        idna::domain_to_ascii(input).map_err(|e| {
            DomainError::encoding(
                EncodingErrorKind::ToAscii,
                format!("Failed to encode {}: {}", input, e),
            )
        })
    }

    fn to_unicode(&self, input: &str) -> Result<String> {
        let (decoded, result) = idna::domain_to_unicode(input);
        result.map_err(|e| {
            DomainError::encoding(
                EncodingErrorKind::ToUnicode,
                format!("Failed to decode {}: {}", input, e),
            )
        })?;
        Ok(decoded)
    }
}

/// Codec for ASCII-only deployments: rejects non-ASCII input and decodes as identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiCodec;

impl AsciiCodec {
    /// Create a new ASCII codec.
    pub fn new() -> Self {
        Self
    }
}

impl HostCodec for AsciiCodec {
    fn to_ascii(&self, input: &str) -> Result<String> {
        if !input.is_ascii() {
            return Err(DomainError::encoding(
                EncodingErrorKind::ToAscii,
                format!("Non-ASCII host not supported: {}", input),
            ));
        }
        Ok(input.to_string())
    }

    fn to_unicode(&self, input: &str) -> Result<String> {
        Ok(input.to_string())
    }
}
