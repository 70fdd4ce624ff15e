//! Tests for image reference parsing.

use super::*;

/// Verify a fully qualified reference splits into domain, path, and tag.
#[test]
fn test_parse_fully_qualified() {
    let image = ImageRef::parse("index.docker.io/library/nginx:1.27").expect("Failed to parse");
    assert_eq!(image.domain(), "index.docker.io");
    assert_eq!(image.path(), "library/nginx");
    assert_eq!(image.tag(), Some("1.27"));
    assert_eq!(image.name(), "index.docker.io/library/nginx");
}

/// Verify a bare repository name parses with no domain and no tag.
#[test]
fn test_parse_bare_name() {
    let image = ImageRef::parse("nginx").expect("Failed to parse");
    assert_eq!(image.domain(), "");
    assert_eq!(image.path(), "nginx");
    assert_eq!(image.tag(), None);
    assert_eq!(image.name(), "nginx");
}

/// Verify an owner/repo path without a registry host stays a path.
#[test]
fn test_parse_owner_repo() {
    let image = ImageRef::parse("acme/app").expect("Failed to parse");
    assert_eq!(image.domain(), "");
    assert_eq!(image.name(), "acme/app");
}

/// Verify a domain with a port is not mistaken for a tag separator.
#[test]
fn test_parse_domain_with_port() {
    let image = ImageRef::parse("localhost:5000/acme/app").expect("Failed to parse");
    assert_eq!(image.domain(), "localhost:5000");
    assert_eq!(image.path(), "acme/app");
    assert_eq!(image.tag(), None);

    let tagged = ImageRef::parse("registry.local:5000/acme/app:v2").expect("Failed to parse");
    assert_eq!(tagged.domain(), "registry.local:5000");
    assert_eq!(tagged.tag(), Some("v2"));
}

/// Verify the empty string is rejected.
#[test]
fn test_parse_empty() {
    assert_eq!(ImageRef::parse(""), Err(ImageRefError::Empty));
}

/// Verify invalid characters in the repository path are rejected.
#[test]
fn test_parse_invalid_characters() {
    for reference in ["nginx latest", "acme/App", "acme//app", "/nginx", "acme/app/"] {
        let result = ImageRef::parse(reference);
        assert!(
            matches!(result, Err(ImageRefError::InvalidCharacter { .. })),
            "Expected invalid-character error for {reference:?}, got {result:?}"
        );
    }
}

/// Verify malformed tags are rejected with the tag error.
#[test]
fn test_parse_invalid_tag() {
    // Empty tag, leading separator, and over-long tag are all invalid.
    assert!(matches!(
        ImageRef::parse("nginx:"),
        Err(ImageRefError::InvalidTag { .. })
    ));
    assert!(matches!(
        ImageRef::parse("nginx:-oops"),
        Err(ImageRefError::InvalidTag { .. })
    ));
    let long_tag = format!("nginx:{}", "a".repeat(129));
    assert!(matches!(
        ImageRef::parse(&long_tag),
        Err(ImageRefError::InvalidTag { .. })
    ));
}

/// Verify separators inside path components are accepted mid-run.
#[test]
fn test_parse_component_separators() {
    let image = ImageRef::parse("quay.io/acme/my_app-v2.base").expect("Failed to parse");
    assert_eq!(image.name(), "quay.io/acme/my_app-v2.base");
}
