//! Suffix resolver module.
//!
//! Provides interfaces and implementations for splitting a hostname around
//! its public suffix.

use std::collections::HashSet;

use psl::{List, Psl, Type};

use crate::error::{DomainError, Result, SuffixErrorKind};
use crate::types::SuffixParts;

/// Suffix resolver interface.
pub trait SuffixResolver: Send + Sync {
    /// Split a lowercased ASCII hostname into suffix, registrable label and remainder.
    ///
    /// Returns an error if the hostname is empty, malformed, has no matching
    /// suffix rule, or is itself a public suffix.
    fn resolve(&self, host: &str) -> Result<SuffixParts>;
}

/// Resolver backed by the compiled-in Public Suffix List.
///
/// Only ICANN rules apply by default; private entries such as
/// `blogspot.com` are skipped unless enabled with [`PslResolver::with_private`].
#[derive(Debug, Clone, Copy)]
pub struct PslResolver {
    include_private: bool,
}

impl PslResolver {
    /// Create a new resolver using ICANN rules only.
    pub fn new() -> Self {
        Self {
            include_private: false,
        }
    }

    /// Enable or disable private suffix rules and return self for chaining.
    pub fn with_private(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }

    /// Whether private suffix rules are honored.
    pub fn includes_private(&self) -> bool {
        self.include_private
    }

    /// Length in bytes of the public suffix of `host`, or None if no known rule matches.
    fn suffix_len(&self, host: &str) -> Option<usize> {
        let mut name = host;
        loop {
            let suffix = List.suffix(name.as_bytes())?;
            let len = suffix.as_bytes().len();
            match suffix.typ() {
                Some(Type::Icann) => return Some(len),
                Some(Type::Private) if self.include_private => return Some(len),
                Some(Type::Private) => {
                    // Retry one label up until an ICANN rule takes over
                    let matched = &name[name.len() - len..];
                    let (_, parent) = matched.split_once('.')?;
                    name = parent;
                }
                None => return None,
            }
        }
    }
}

impl Default for PslResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixResolver for PslResolver {
    fn resolve(&self, host: &str) -> Result<SuffixParts> {
        validate_host(host)?;
        let len = self.suffix_len(host).ok_or_else(|| {
            DomainError::suffix(
                SuffixErrorKind::UnknownSuffix,
                format!("No rule matching name {}", host),
            )
        })?;
        decompose(host, len)
    }
}

/// Static resolver with a predefined set of suffixes.
///
/// The longest listed suffix that matches on a label boundary wins.
#[derive(Debug, Clone, Default)]
pub struct StaticSuffixResolver {
    suffixes: HashSet<String>,
}

impl StaticSuffixResolver {
    /// Create a new empty static resolver.
    pub fn new() -> Self {
        Self {
            suffixes: HashSet::new(),
        }
    }

    /// Create a resolver from a list of suffixes.
    pub fn from_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolver = Self::new();
        for suffix in suffixes {
            resolver.add(suffix.as_ref());
        }
        resolver
    }

    /// Add a suffix. Leading dots are ignored.
    pub fn add(&mut self, suffix: &str) {
        let suffix = suffix.trim_start_matches('.').to_lowercase();
        if !suffix.is_empty() {
            self.suffixes.insert(suffix);
        }
    }

    /// Add a suffix and return self for chaining.
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.add(suffix);
        self
    }

    /// Number of suffixes.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Check if the resolver has no suffixes.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl SuffixResolver for StaticSuffixResolver {
    fn resolve(&self, host: &str) -> Result<SuffixParts> {
        validate_host(host)?;

        let mut start = 0;
        loop {
            let candidate = &host[start..];
            if self.suffixes.contains(candidate) {
                return decompose(host, candidate.len());
            }
            match candidate.find('.') {
                Some(i) => start += i + 1,
                None => break,
            }
        }

        Err(DomainError::suffix(
            SuffixErrorKind::UnknownSuffix,
            format!("No rule matching name {}", host),
        ))
    }
}

/// Reject empty hosts and hosts with empty labels.
fn validate_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(DomainError::suffix(
            SuffixErrorKind::EmptyHost,
            "Name is blank",
        ));
    }
    if host.split('.').any(str::is_empty) {
        return Err(DomainError::suffix(
            SuffixErrorKind::EmptyLabel,
            format!("Name {} has an empty label", host),
        ));
    }
    Ok(())
}

/// Split `host` given the byte length of its suffix.
fn decompose(host: &str, suffix_len: usize) -> Result<SuffixParts> {
    if suffix_len >= host.len() {
        return Err(DomainError::suffix(
            SuffixErrorKind::IsSuffix,
            format!("{} is a suffix", host),
        ));
    }

    let boundary = host.len() - suffix_len;
    let suffix = &host[boundary..];
    let left = host[..boundary].strip_suffix('.').ok_or_else(|| {
        DomainError::suffix(
            SuffixErrorKind::UnknownSuffix,
            format!("Suffix {} does not align with labels of {}", suffix, host),
        )
    })?;

    let (remainder, label) = match left.rsplit_once('.') {
        Some((remainder, label)) => (remainder, label),
        None => ("", left),
    };

    Ok(SuffixParts::new(suffix, label, remainder))
}
