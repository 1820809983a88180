//! Print the stored favorites.

use colored::Colorize;
use favorites_core::{Favorites, KeyValueStore};
use github_lookup::models::UserRecord;
use tracing::instrument;

use crate::errors::Error;

#[cfg(test)]
#[path = "list_cmd_tests.rs"]
mod tests;

/// Returns the stored favorites, newest first.
pub fn list_favorites<S: KeyValueStore>(store: S) -> Vec<UserRecord> {
    Favorites::load(store).entries().to_vec()
}

/// Execute the list command.
#[instrument(skip(store))]
pub fn execute<S: KeyValueStore>(store: S) -> Result<(), Error> {
    let entries = list_favorites(store);

    if entries.is_empty() {
        println!("No favorites yet. Add one with: gh-favorites add <username>");
        return Ok(());
    }

    // Styling is applied to the whole line so column widths line up.
    println!(
        "{}",
        format!(
            "{:<20} {:<28} {:>12} {:>10}",
            "LOGIN", "NAME", "PUBLIC REPOS", "FOLLOWERS"
        )
        .bold()
    );
    for entry in &entries {
        println!(
            "{:<20} {:<28} {:>12} {:>10}",
            entry.login,
            entry.name.as_deref().unwrap_or("-"),
            entry.public_repos,
            entry.followers
        );
    }
    Ok(())
}
