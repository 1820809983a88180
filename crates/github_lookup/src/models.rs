//! Data models for GitHub user lookups.
//!
//! This module contains the record shape shared between the lookup adapter
//! and its consumers. The same shape is used for the persisted favorites
//! value, so it is designed to be serializable and deserializable.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A GitHub account enriched with the profile fields consumed by this
/// project.
///
/// The record is built once from an API response and never refreshed
/// afterwards. `login` is the unique key; the remaining fields are
/// best-effort profile metadata and default when GitHub omits them.
///
/// # Examples
///
/// ```rust
/// use github_lookup::models::UserRecord;
///
/// let user = UserRecord {
///     login: "octocat".to_string(),
///     name: Some("The Octocat".to_string()),
///     public_repos: 8,
///     followers: 9000,
/// };
///
/// println!("User: {} ({} followers)", user.login, user.followers);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserRecord {
    /// The login name of the account, unique across GitHub
    pub login: String,
    /// The display name of the account, if one is set
    #[serde(default)]
    pub name: Option<String>,
    /// The number of public repositories owned by the account
    #[serde(default)]
    pub public_repos: u64,
    /// The number of followers of the account
    #[serde(default)]
    pub followers: u64,
}
