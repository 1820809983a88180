//! Error types for favorites collection operations.
//!
//! Every failure from a mutation is surfaced as a single human-readable
//! message; no failure is fatal to the process, and the collection is left
//! unchanged whenever an operation reports an error.

use crate::storage::StorageError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur when mutating the favorites collection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record with the same login is already in the collection.
    ///
    /// The match is a case-sensitive exact comparison against the stored
    /// logins. The collection is unchanged.
    #[error("GitHub user '{0}' is already a favorite")]
    DuplicateUser(String),

    /// The remote lookup found no account for the requested username.
    #[error("GitHub user '{0}' was not found")]
    UserNotFound(String),

    /// The remote lookup failed before an account could be resolved.
    ///
    /// Covers transport failures and malformed responses. The collection
    /// never adopts a partial record from a failed lookup.
    #[error("GitHub lookup failed: {0}")]
    LookupFailed(String),

    /// The collection could not be persisted.
    ///
    /// The mutation that triggered the write is rolled back, so the
    /// in-memory sequence still matches the last successfully stored one.
    #[error("Failed to persist favorites: {0}")]
    Storage(#[from] StorageError),
}
