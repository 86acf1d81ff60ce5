use std::num::NonZeroUsize;

use log::{debug, trace};
use lru::LruCache;
use parking_lot::Mutex;

use crate::codec::HostCodec;
use crate::error::Result;
use crate::splitter::DomainSplitter;
use crate::suffix::SuffixResolver;
use crate::types::HostEntry;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cached splitter options.
#[derive(Debug, Clone)]
pub struct SplitterOptions {
    /// LRU cache size for host entries
    pub cache_size: usize,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl SplitterOptions {
    /// Create new splitter options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Domain splitter with an LRU cache of host entries.
///
/// Failures are cached as well, so repeated lookups of a malformed host
/// do not hit the resolver again.
pub struct CachedSplitter<R, C> {
    splitter: DomainSplitter<R, C>,
    cache: Mutex<LruCache<String, Result<HostEntry>>>,
}

impl<R: SuffixResolver, C: HostCodec> CachedSplitter<R, C> {
    /// Create a new cached splitter
    pub fn new(splitter: DomainSplitter<R, C>, options: SplitterOptions) -> Self {
        let cache_size = NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            splitter,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// The wrapped splitter.
    pub fn splitter(&self) -> &DomainSplitter<R, C> {
        &self.splitter
    }

    /// Build a host entry, consulting the cache first.
    pub fn host_entry(&self, host: &str) -> Result<HostEntry> {
        let key = host.to_lowercase();

        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(&key) {
            trace!("Host entry cache hit for {}", key);
            return cached.clone();
        }

        // Cache miss: computed under the lock, resolution is CPU-only.
        trace!("Host entry cache miss for {}", key);
        let result = self.splitter.host_entry(&key);
        cache.put(key, result.clone());

        result
    }

    /// Split a hostname into its registrable domain and subdomain.
    pub fn split(&self, host: &str) -> Result<(String, String)> {
        self.host_entry(host).map(|entry| (entry.domain, entry.sub_name))
    }

    /// Registrable domain of a hostname.
    pub fn registrable_domain(&self, host: &str) -> Result<String> {
        self.host_entry(host).map(|entry| entry.domain)
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
        self.host_entry(host).map(|entry| entry.is_registrable_domain())
    }

    /// Number of cached entries.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drop all cached entries.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}
