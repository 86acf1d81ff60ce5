use serde::{Deserialize, Serialize};

/// Decomposition of a hostname around its public suffix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixParts {
    /// Public suffix, e.g. "com.cn"
    pub suffix: String,
    /// Label immediately left of the suffix, e.g. "bar"
    pub registrable_label: String,
    /// Everything left of the registrable label, e.g. "foo" (empty if none)
    pub remainder: String,
}

impl SuffixParts {
    /// Create new suffix parts
    pub fn new(
        suffix: impl Into<String>,
        registrable_label: impl Into<String>,
        remainder: impl Into<String>,
    ) -> Self {
        Self {
            suffix: suffix.into(),
            registrable_label: registrable_label.into(),
            remainder: remainder.into(),
        }
    }

    /// Registrable domain: the registrable label joined with the suffix
    pub fn registrable_domain(&self) -> String {
        format!("{}.{}", self.registrable_label, self.suffix)
    }
}

/// A DNS record observed while probing a wildcard base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record type, e.g. "A" or "CNAME"
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value
    pub value: String,
}

impl Record {
    /// Create a new record
    pub fn new(record_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            value: value.into(),
        }
    }
}

/// Host entry: a hostname split into its suffix, registrable domain and subdomain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    /// Lowercased input host
    pub host: String,
    /// Public suffix
    pub tld: String,
    /// Registrable domain
    pub domain: String,
    /// Subdomain part (empty if the host is the registrable domain)
    pub sub_name: String,
    /// Domain a DNS wildcard record for this host would be matched against
    pub wildcard_base: String,
    /// Records answered for the wildcard base, attached by the caller
    #[serde(default)]
    pub wildcard_records: Vec<Record>,
    /// Whether the wildcard base resolves as a wildcard, set by the caller
    #[serde(default)]
    pub wildcard: bool,
}

impl HostEntry {
    /// Build an entry from a lowercased host and its decomposition.
    ///
    /// The wildcard base strips exactly the leftmost label of `host`, which
    /// is one level up from the host even when the remainder spans several
    /// labels.
    pub(crate) fn from_parts(host: String, parts: SuffixParts) -> Self {
        let domain = parts.registrable_domain();
        let wildcard_base = if parts.remainder.is_empty() {
            domain.clone()
        } else {
            match host.split_once('.') {
                Some((_, rest)) => rest.to_string(),
                None => host.clone(),
            }
        };

        Self {
            host,
            tld: parts.suffix,
            domain,
            sub_name: parts.remainder,
            wildcard_base,
            wildcard_records: Vec::new(),
            wildcard: false,
        }
    }

    /// Whether the host is itself a registrable domain
    pub fn is_registrable_domain(&self) -> bool {
        self.sub_name.is_empty()
    }

    /// Attach wildcard probe results and return self for chaining.
    ///
    /// `wildcard` is set when at least one record is attached.
    pub fn with_wildcard_records(mut self, records: Vec<Record>) -> Self {
        self.wildcard = !records.is_empty();
        self.wildcard_records = records;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_domain() {
        let parts = SuffixParts::new("com.cn", "bar", "foo");
        assert_eq!(parts.registrable_domain(), "bar.com.cn");
    }

    #[test]
    fn test_entry_without_subdomain() {
        let entry = HostEntry::from_parts("bar.com".into(), SuffixParts::new("com", "bar", ""));
        assert_eq!(entry.host, "bar.com");
        assert_eq!(entry.tld, "com");
        assert_eq!(entry.domain, "bar.com");
        assert_eq!(entry.sub_name, "");
        assert_eq!(entry.wildcard_base, "bar.com");
        assert!(entry.is_registrable_domain());
        assert!(!entry.wildcard);
        assert!(entry.wildcard_records.is_empty());
    }

    #[test]
    fn test_entry_strips_single_label() {
        let entry = HostEntry::from_parts(
            "a.b.bar.com".into(),
            SuffixParts::new("com", "bar", "a.b"),
        );
        assert_eq!(entry.domain, "bar.com");
        assert_eq!(entry.sub_name, "a.b");
        assert_eq!(entry.wildcard_base, "b.bar.com");
        assert!(!entry.is_registrable_domain());
    }

    #[test]
    fn test_with_wildcard_records() {
        let entry = HostEntry::from_parts("foo.bar.com".into(), SuffixParts::new("com", "bar", "foo"))
            .with_wildcard_records(vec![Record::new("A", "1.2.3.4")]);
        assert!(entry.wildcard);
        assert_eq!(entry.wildcard_records.len(), 1);

        let entry = entry.with_wildcard_records(Vec::new());
        assert!(!entry.wildcard);
    }
}
