//! Add an account to the favorites.

use colored::Colorize;
use favorites_core::{Favorites, KeyValueStore};
use github_lookup::models::UserRecord;
use github_lookup::{create_lookup_client, GitHubLookup, UserLookup};
use tracing::instrument;

use crate::errors::Error;

#[cfg(test)]
#[path = "add_cmd_tests.rs"]
mod tests;

/// Adds a favorite through the given lookup and returns the stored record.
///
/// Separated from [`execute`] so tests can substitute a deterministic
/// lookup for the GitHub API.
pub async fn add_favorite<S: KeyValueStore>(
    store: S,
    username: &str,
    lookup: &dyn UserLookup,
) -> Result<UserRecord, Error> {
    let mut favorites = Favorites::load(store);
    let record = favorites.add(username, lookup).await?;
    Ok(record.clone())
}

/// Execute the add command against the real GitHub API.
#[instrument(skip(store))]
pub async fn execute<S: KeyValueStore>(store: S, username: &str) -> Result<(), Error> {
    let client = create_lookup_client()?;
    let lookup = GitHubLookup::new(client);

    let record = add_favorite(store, username, &lookup).await?;

    println!(
        "{}",
        format!("Added '{}' to favorites", record.login).green()
    );
    println!(
        "  {}: {} public repos, {} followers",
        record.name.as_deref().unwrap_or("(no display name)"),
        record.public_repos,
        record.followers
    );
    Ok(())
}
