//! Integration tests for host entries and wildcard bases

use domain_fld::{
    new_host_entry, AsciiCodec, CachedSplitter, DomainSplitter, HostEntry, Record,
    SplitterOptions, StaticSuffixResolver,
};

#[test]
fn test_host_entry_with_subdomain() {
    let entry = new_host_entry("foo.bar.com").unwrap();
    assert_eq!(entry.host, "foo.bar.com");
    assert_eq!(entry.tld, "com");
    assert_eq!(entry.domain, "bar.com");
    assert_eq!(entry.sub_name, "foo");
    assert_eq!(entry.wildcard_base, "bar.com");
    assert!(!entry.wildcard);
    assert!(entry.wildcard_records.is_empty());
}

#[test]
fn test_host_entry_without_subdomain() {
    let entry = new_host_entry("Bar.Com.CN").unwrap();
    assert_eq!(entry.host, "bar.com.cn");
    assert_eq!(entry.tld, "com.cn");
    assert_eq!(entry.domain, "bar.com.cn");
    assert_eq!(entry.sub_name, "");
    assert_eq!(entry.wildcard_base, entry.domain);
}

#[test]
fn test_wildcard_base_strips_one_label() {
    // Remainder spans two labels; only the leftmost one is stripped
    let entry = new_host_entry("a.b.bar.com").unwrap();
    assert_eq!(entry.sub_name, "a.b");
    assert_eq!(entry.wildcard_base, "b.bar.com");

    let entry = new_host_entry("x.y.z.bar.co.uk").unwrap();
    assert_eq!(entry.tld, "co.uk");
    assert_eq!(entry.wildcard_base, "y.z.bar.co.uk");
}

#[test]
fn test_unicode_host_entry() {
    let entry = new_host_entry("WWW.Bücher.de").unwrap();
    assert_eq!(entry.host, "www.bücher.de");
    assert_eq!(entry.tld, "de");
    assert_eq!(entry.domain, "bücher.de");
    assert_eq!(entry.sub_name, "www");
    assert_eq!(entry.wildcard_base, "bücher.de");

    let entry = new_host_entry("a.邮件.例子.中国").unwrap();
    assert_eq!(entry.tld, "中国");
    assert_eq!(entry.domain, "例子.中国");
    assert_eq!(entry.sub_name, "a.邮件");
    assert_eq!(entry.wildcard_base, "邮件.例子.中国");
}

#[test]
fn test_host_entry_after_separator_mapping() {
    let entry = new_host_entry("例子\u{3002}中国").unwrap();
    assert_eq!(entry.host, "例子.中国");
    assert_eq!(entry.domain, "例子.中国");
    assert_eq!(entry.sub_name, "");
    assert_eq!(entry.wildcard_base, entry.domain);

    let entry = new_host_entry("a\u{3002}b.例子.中国").unwrap();
    assert_eq!(entry.host, "a.b.例子.中国");
    assert_eq!(entry.sub_name, "a.b");
    assert_eq!(entry.wildcard_base, "b.例子.中国");
}

#[test]
fn test_host_entry_errors() {
    assert!(new_host_entry("").is_err());
    assert!(new_host_entry("com").is_err());
    assert!(new_host_entry("foo..bar.com").is_err());
}

#[test]
fn test_host_entry_serialization() {
    let entry = new_host_entry("foo.bar.com")
        .unwrap()
        .with_wildcard_records(vec![Record::new("A", "93.184.216.34")]);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["domain"], "bar.com");
    assert_eq!(json["wildcard_base"], "bar.com");
    assert_eq!(json["wildcard"], true);
    assert_eq!(json["wildcard_records"][0]["type"], "A");
    assert_eq!(json["wildcard_records"][0]["value"], "93.184.216.34");

    let decoded: HostEntry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn test_host_entry_deserialize_without_wildcard_fields() {
    let json = r#"{
        "host": "foo.bar.com",
        "tld": "com",
        "domain": "bar.com",
        "sub_name": "foo",
        "wildcard_base": "bar.com"
    }"#;
    let entry: HostEntry = serde_json::from_str(json).unwrap();
    assert!(!entry.wildcard);
    assert!(entry.wildcard_records.is_empty());
}

#[test]
fn test_cached_host_entries_match_uncached() {
    let resolver = StaticSuffixResolver::from_suffixes(["com", "com.cn"]);
    let splitter = DomainSplitter::new(resolver.clone(), AsciiCodec::new());
    let cached = CachedSplitter::new(
        DomainSplitter::new(resolver, AsciiCodec::new()),
        SplitterOptions::new().with_cache_size(8),
    );

    for host in ["foo.bar.com", "a.b.bar.com.cn", "bar.com"] {
        assert_eq!(cached.host_entry(host).unwrap(), splitter.host_entry(host).unwrap());
        // Second lookup served from cache
        assert_eq!(cached.host_entry(host).unwrap(), splitter.host_entry(host).unwrap());
    }
    assert_eq!(cached.cache_len(), 3);
}
