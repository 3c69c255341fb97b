// Domain module tests.

use super::*;

fn decomposer() -> DomainDecomposer {
    DomainDecomposer::new().expect("port pattern should compile")
}

fn parts(host: &str) -> (String, String, String) {
    let d = decomposer();
    let p = d.decompose(host);
    (p.subdomain.to_string(), p.root.to_string(), p.tld.to_string())
}

fn owned(subdomain: &str, root: &str, tld: &str) -> (String, String, String) {
    (subdomain.to_string(), root.to_string(), tld.to_string())
}

#[test]
fn test_decompose_basic() {
    assert_eq!(parts("sub.example.com"), owned("sub", "example", "com"));
}

#[test]
fn test_decompose_no_subdomain() {
    assert_eq!(parts("example.com"), owned("", "example", "com"));
}

#[test]
fn test_decompose_multi_label_suffix() {
    assert_eq!(parts("example.co.uk"), owned("", "example", "co.uk"));
    assert_eq!(parts("www.example.co.uk"), owned("www", "example", "co.uk"));
}

#[test]
fn test_decompose_multi_label_subdomain() {
    assert_eq!(parts("a.b.c.example.com"), owned("a.b.c", "example", "com"));
}

#[test]
fn test_decompose_strips_port() {
    assert_eq!(parts("sub.example.com:8080"), owned("sub", "example", "com"));
}

#[test]
fn test_decompose_unknown_suffix_is_empty() {
    assert_eq!(parts("localhost"), owned("", "", ""));
    assert_eq!(parts("www.example.notarealsuffix"), owned("", "", ""));
}

#[test]
fn test_decompose_ip_literals_are_empty() {
    assert_eq!(parts("192.168.1.1"), owned("", "", ""));
    assert_eq!(parts("192.168.1.1:8080"), owned("", "", ""));
    assert_eq!(parts("[::1]"), owned("", "", ""));
    assert_eq!(parts("::1"), owned("", "", ""));
    assert_eq!(parts("[2001:db8::1]:443"), owned("", "", ""));
}

#[test]
fn test_decompose_empty_host() {
    assert_eq!(parts(""), owned("", "", ""));
    assert_eq!(parts(":8080"), owned("", "", ""));
}

#[test]
fn test_decompose_bare_suffix() {
    assert_eq!(parts("com"), owned("", "", "com"));
    assert_eq!(parts("co.uk"), owned("", "", "co.uk"));
}

#[test]
fn test_decompose_preserves_case() {
    assert_eq!(parts("WWW.Example.COM"), owned("WWW", "Example", "COM"));
}

#[test]
fn test_decompose_reconstructs_host() {
    let d = decomposer();
    for host in [
        "example.com",
        "sub.example.com",
        "a.b.example.co.uk",
        "deep.nested.sub.example.org",
        "example.com.au",
        "Mixed.Case.Example.Net",
        "co.uk",
    ] {
        let p = d.decompose(host);
        let rebuilt = [p.subdomain, p.root, p.tld]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(".");
        assert_eq!(rebuilt, host, "decomposition of {host} should round-trip");
    }
}

#[test]
fn test_cloned_decomposer_matches_original() {
    let d = decomposer();
    let copy = d.clone();
    for host in ["sub.example.co.uk", "localhost", "co.uk", "a.b.example.com:8080"] {
        assert_eq!(copy.decompose(host), d.decompose(host));
    }
    assert!(format!("{d:?}").starts_with("DomainDecomposer"));
}
