use super::*;
use std::error::Error as StdError;

#[test]
fn test_client_build_error() {
    let error = Error::ClientBuild("bad base uri".to_string());

    // Test error message
    assert_eq!(
        error.to_string(),
        "Failed to initialize GitHub client: bad base uri"
    );

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_user_not_found_error() {
    let error = Error::UserNotFound("this-user-does-not-exist-xyz".to_string());

    // Test error message
    assert_eq!(
        error.to_string(),
        "GitHub user 'this-user-does-not-exist-xyz' was not found"
    );

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_lookup_failed_error() {
    let error = Error::LookupFailed("connection refused".to_string());

    // Test error message
    assert_eq!(
        error.to_string(),
        "GitHub lookup failed: connection refused"
    );

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
