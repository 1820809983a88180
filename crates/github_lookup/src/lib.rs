//! Crate for resolving GitHub accounts through the GitHub REST API.
//!
//! This crate provides a single-call lookup adapter that maps a username to
//! a normalized [`models::UserRecord`], issuing one unauthenticated request
//! per invocation. There are no retries, no caching, and no rate-limit
//! awareness.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Trait for resolving a username to an enriched user record.
///
/// This is the seam between the favorites collection and the network:
/// production code implements it over the GitHub API, tests substitute a
/// deterministic stub.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Resolves a username to a user record.
    ///
    /// # Arguments
    ///
    /// * `username` - The login to resolve.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` when no account matches the username,
    /// and `Error::LookupFailed` for transport failures or responses that
    /// cannot be parsed into a record.
    async fn search(&self, username: &str) -> Result<models::UserRecord, Error>;
}

/// A lookup adapter backed by the public GitHub REST API.
#[derive(Debug)]
pub struct GitHubLookup {
    client: Octocrab,
}

impl GitHubLookup {
    /// Creates a new `GitHubLookup` over an existing `Octocrab` client.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserLookup for GitHubLookup {
    /// Fetches the profile for a specific username.
    ///
    /// Performs one `GET /users/{username}` call and maps the consumed
    /// fields (`login`, `name`, `public_repos`, `followers`) into a
    /// [`models::UserRecord`]. Fields GitHub omits default to absent/zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` when GitHub answers with a 404 or with
    /// a body that lacks a resolvable `login` field, and
    /// `Error::LookupFailed` for any other failure.
    #[instrument(skip(self), fields(username = %username))]
    async fn search(&self, username: &str) -> Result<models::UserRecord, Error> {
        info!(username = username, "Looking up GitHub account");

        let path = format!("/users/{}", username);
        let result: OctocrabResult<serde_json::Value> = self.client.get(path, None::<&()>).await;

        match result {
            Ok(body) => {
                debug!(username = username, "Received profile response");

                // GitHub signals "no such account" on this endpoint by
                // omitting the login field from the payload.
                if body.get("login").and_then(|v| v.as_str()).is_none() {
                    info!(username = username, "Response carries no login field");
                    return Err(Error::UserNotFound(username.to_string()));
                }

                let record: models::UserRecord = serde_json::from_value(body).map_err(|e| {
                    error!(
                        username = username,
                        error = %e,
                        "Profile response did not match the expected shape"
                    );
                    Error::LookupFailed(e.to_string())
                })?;

                info!(
                    username = username,
                    login = record.login,
                    "Successfully resolved GitHub account"
                );
                Ok(record)
            }
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == http::StatusCode::NOT_FOUND =>
            {
                info!(username = username, "GitHub reports no such account");
                Err(Error::UserNotFound(username.to_string()))
            }
            Err(e) => {
                let details = octocrab_error_details(&e);
                error!(
                    username = username,
                    error_message = details,
                    "Failed to look up GitHub account"
                );
                Err(Error::LookupFailed(details))
            }
        }
    }
}

/// Creates an `Octocrab` client suitable for anonymous user lookups.
///
/// The lookup endpoint is public and read-only, so no credentials are
/// configured.
///
/// # Errors
///
/// Returns an `Error::ClientBuild` if the client cannot be constructed.
pub fn create_lookup_client() -> Result<Octocrab, Error> {
    Octocrab::builder()
        .build()
        .map_err(|e| Error::ClientBuild(e.to_string()))
}

fn octocrab_error_details(e: &octocrab::Error) -> String {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            format!("GitHub returned an error: {}", source.message)
        }
        _ => e.to_string(),
    }
}
