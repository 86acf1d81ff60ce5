//! Domain FLD - split hostnames into registrable domain and subdomain
//!
//! This library determines where the registrable boundary of a hostname
//! falls using the Public Suffix List, with support for:
//! - Multi-label public suffixes (`com.cn`, `co.uk`)
//! - Internationalized hostnames via IDNA round-trips
//! - Host entries carrying a wildcard base for DNS wildcard matching
//! - Pluggable suffix resolvers and codecs
//! - LRU caching for hot paths
//!
//! # Example
//!
//! ```rust
//! use domain_fld::{split_fld_and_subdomain, new_host_entry, fld_domain_or_empty};
//!
//! let (domain, sub) = split_fld_and_subdomain("foo.bar.com.cn").unwrap();
//! assert_eq!(domain, "bar.com.cn");
//! assert_eq!(sub, "foo");
//!
//! let entry = new_host_entry("a.b.bar.com").unwrap();
//! assert_eq!(entry.domain, "bar.com");
//! assert_eq!(entry.sub_name, "a.b");
//! assert_eq!(entry.wildcard_base, "b.bar.com");
//!
//! // Best-effort extraction never fails
//! assert_eq!(fld_domain_or_empty(""), "");
//! ```
//!
//! # Custom resolvers
//!
//! ```rust
//! use domain_fld::{AsciiCodec, DomainSplitter, StaticSuffixResolver};
//!
//! let resolver = StaticSuffixResolver::from_suffixes(["internal", "corp.internal"]);
//! let splitter = DomainSplitter::new(resolver, AsciiCodec::new());
//! assert_eq!(splitter.registrable_domain("db.eu.corp.internal").unwrap(), "eu.corp.internal");
//! ```

pub mod cache;
pub mod codec;
pub mod error;
pub mod splitter;
pub mod suffix;
pub mod types;

use once_cell::sync::Lazy;

// Re-export commonly used items
pub use cache::{CachedSplitter, SplitterOptions, DEFAULT_CACHE_SIZE};
pub use codec::{AsciiCodec, HostCodec, IdnaCodec};
pub use error::{DomainError, EncodingErrorKind, Result, SuffixErrorKind};
pub use splitter::{is_ascii, DomainSplitter};
pub use suffix::{PslResolver, StaticSuffixResolver, SuffixResolver};
pub use types::{HostEntry, Record, SuffixParts};

/// Process-wide splitter over the ICANN section of the Public Suffix List
static DEFAULT_SPLITTER: Lazy<DomainSplitter<PslResolver, IdnaCodec>> =
    Lazy::new(DomainSplitter::standard);

/// Split a hostname into its registrable domain and subdomain.
pub fn split_fld_and_subdomain(host: &str) -> Result<(String, String)> {
    DEFAULT_SPLITTER.split(host)
}

/// Registrable domain of a hostname.
pub fn fld_domain(host: &str) -> Result<String> {
    DEFAULT_SPLITTER.registrable_domain(host)
}

/// Registrable domain of a hostname, or an empty string on error.
pub fn fld_domain_or_empty(host: &str) -> String {
    DEFAULT_SPLITTER.registrable_domain_or_empty(host)
}

/// Check if a hostname is itself a registrable domain.
pub fn is_fld_domain(host: &str) -> Result<bool> {
    DEFAULT_SPLITTER.is_registrable_domain(host)
}

/// Build a host entry for a hostname.
pub fn new_host_entry(host: &str) -> Result<HostEntry> {
    DEFAULT_SPLITTER.host_entry(host)
}
