use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the favorites CLI application.
///
/// Every variant renders as a single human-readable line; commands print it
/// and exit non-zero, nothing is fatal beyond the current invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// This error is returned when there are issues with the configuration
    /// file, such as a missing file at an explicitly given path, invalid
    /// TOML syntax, or file access problems.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A favorites collection operation failed.
    ///
    /// Wraps the collection's own error kinds (duplicate user, unknown
    /// user, lookup failure, storage failure) without altering their
    /// message.
    #[error("{0}")]
    Favorites(#[from] favorites_core::Error),

    /// The GitHub lookup client could not be set up.
    #[error("{0}")]
    Lookup(#[from] github_lookup::Error),
}
