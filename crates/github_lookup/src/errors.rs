//! Error types for GitHub lookup operations.
//!
//! This module defines the error types that can occur when resolving a
//! username against the GitHub API through the github_lookup crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during a GitHub user lookup.
///
/// Each variant provides specific context about what went wrong so that
/// callers can surface a single human-readable message to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    ///
    /// This error occurs before any request is made, typically because the
    /// client builder rejected its configuration (for example an invalid
    /// base URI).
    #[error("Failed to initialize GitHub client: {0}")]
    ClientBuild(String),

    /// The lookup reached GitHub but no account matches the requested login.
    ///
    /// This error maps two conditions the GitHub API uses to signal an
    /// unknown account: a 404 response, or a response body that lacks a
    /// resolvable `login` field.
    #[error("GitHub user '{0}' was not found")]
    UserNotFound(String),

    /// The lookup failed before a usable response was obtained.
    ///
    /// This error covers transport-level failures (connection errors,
    /// unexpected status codes) and responses whose body cannot be parsed
    /// into a user record. The contained string carries the underlying
    /// failure details.
    #[error("GitHub lookup failed: {0}")]
    LookupFailed(String),
}
