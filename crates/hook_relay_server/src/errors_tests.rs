//! Tests for gateway process error types.

use super::*;

/// Verify config errors name the file path.
#[test]
fn test_config_read_message() {
    let err = Error::ConfigRead {
        path: "/etc/hookrelay/hooks.toml".to_string(),
        reason: "Permission denied (os error 13)".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/etc/hookrelay/hooks.toml"));
    assert!(msg.contains("Permission denied"));
}

/// Verify the version error names both versions.
#[test]
fn test_unsupported_version_message() {
    let err = Error::UnsupportedConfigVersion {
        found: 2,
        expected: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains('1'));
}

/// Verify the compilation summary counts both failures and totals.
#[test]
fn test_endpoint_compilation_message() {
    let err = Error::EndpointCompilation {
        failed: 1,
        total: 3,
    };
    assert_eq!(err.to_string(), "1 of 3 endpoint(s) failed to compile");
}
