//! Domain splitter.
//!
//! Splits hostnames into registrable domain and subdomain, round-tripping
//! non-ASCII hosts through the ASCII-compatible encoding.

use log::debug;

use crate::codec::{HostCodec, IdnaCodec};
use crate::error::Result;
use crate::suffix::{PslResolver, SuffixResolver};
use crate::types::{HostEntry, SuffixParts};

/// Check if every byte of the string is in the 7-bit ASCII range
pub fn is_ascii(s: &str) -> bool {
    s.bytes().all(|b| b <= 0x7f)
}

/// A host after normalization and suffix resolution
struct Resolved {
    /// Lowercased input, in the codec's normalized form when it was encoded
    host: String,
    /// Decomposition in the script of the input
    parts: SuffixParts,
}

/// Splits hostnames using a suffix resolver and a host codec.
#[derive(Debug, Clone)]
pub struct DomainSplitter<R, C> {
    resolver: R,
    codec: C,
}

impl DomainSplitter<PslResolver, IdnaCodec> {
    /// Create a splitter over the ICANN section of the Public Suffix List.
    pub fn standard() -> Self {
        Self::new(PslResolver::new(), IdnaCodec::new())
    }
}

impl<R: SuffixResolver, C: HostCodec> DomainSplitter<R, C> {
    /// Create a new splitter.
    pub fn new(resolver: R, codec: C) -> Self {
        Self { resolver, codec }
    }

    /// The suffix resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Split a hostname into its registrable domain and subdomain.
    ///
    /// `split("foo.bar.com.cn")` returns `("bar.com.cn", "foo")`. The
    /// subdomain is empty when the host is itself the registrable domain.
    pub fn split(&self, host: &str) -> Result<(String, String)> {
        let Resolved { parts, .. } = self.resolve(host)?;
        Ok((parts.registrable_domain(), parts.remainder))
    }

    /// Registrable domain of a hostname.
    pub fn registrable_domain(&self, host: &str) -> Result<String> {
        self.split(host).map(|(domain, _)| domain)
    }

    /// Registrable domain of a hostname, or an empty string if it cannot be determined.
    pub fn registrable_domain_or_empty(&self, host: &str) -> String {
        match self.registrable_domain(host) {
            Ok(domain) => domain,
            Err(e) => {
                debug!("Ignoring error extracting domain from {:?}: {}", host, e);
                String::new()
            }
        }
    }

    /// Check if a hostname is itself a registrable domain.
    pub fn is_registrable_domain(&self, host: &str) -> Result<bool> {
        self.split(host).map(|(_, sub)| sub.is_empty())
    }

    /// Build a host entry for a hostname.
    pub fn host_entry(&self, host: &str) -> Result<HostEntry> {
        let Resolved { host, parts } = self.resolve(host)?;
        Ok(HostEntry::from_parts(host, parts))
    }

    /// Lowercase, encode if needed, resolve, and decode back.
    fn resolve(&self, host: &str) -> Result<Resolved> {
        let host = host.to_lowercase();

        if is_ascii(&host) {
            let parts = self.resolver.resolve(&host)?;
            return Ok(Resolved { host, parts });
        }

        // The codec may remap separators (e.g. U+3002) or fold characters, so the
        // host is rebuilt from the encoded form to keep the labels the resolver saw.
        let encoded = self.codec.to_ascii(&host)?;
        let host = self.decode(&encoded)?;
        let parts = self.resolver.resolve(&encoded)?;
        let parts = SuffixParts {
            suffix: self.decode(&parts.suffix)?,
            registrable_label: self.decode(&parts.registrable_label)?,
            remainder: self.decode(&parts.remainder)?,
        };
        Ok(Resolved { host, parts })
    }

    fn decode(&self, label: &str) -> Result<String> {
        if label.is_empty() {
            return Ok(String::new());
        }
        self.codec.to_unicode(label)
    }
}
