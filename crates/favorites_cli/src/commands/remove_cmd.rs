//! Remove an account from the favorites.

use colored::Colorize;
use favorites_core::{Favorites, KeyValueStore};
use tracing::instrument;

use crate::errors::Error;

#[cfg(test)]
#[path = "remove_cmd_tests.rs"]
mod tests;

/// Removes the favorite with the given login.
///
/// Returns whether a record was actually removed; an absent login is a
/// successful no-op, matching the collection semantics.
pub fn remove_favorite<S: KeyValueStore>(store: S, login: &str) -> Result<bool, Error> {
    let mut favorites = Favorites::load(store);
    let present = favorites.entries().iter().any(|entry| entry.login == login);
    favorites.delete(login)?;
    Ok(present)
}

/// Execute the remove command.
#[instrument(skip(store))]
pub fn execute<S: KeyValueStore>(store: S, login: &str) -> Result<(), Error> {
    if remove_favorite(store, login)? {
        println!(
            "{}",
            format!("Removed '{}' from favorites", login).green()
        );
    } else {
        println!("'{}' was not in the favorites", login);
    }
    Ok(())
}
