//! Core logic for maintaining a personal list of GitHub favorites.
//!
//! This crate owns the ordered collection of favorite accounts and its
//! persistence semantics: restore once at construction, write the full
//! serialized sequence after every mutation. The network lookup and the
//! concrete storage backend are injected collaborators, which keeps the
//! collection testable with deterministic substitutes.

use github_lookup::models::UserRecord;
use github_lookup::UserLookup;
use tracing::{debug, info, warn};

pub mod errors;
pub use errors::Error;

pub mod storage;
pub use storage::{InMemoryStore, KeyValueStore, StorageError};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The fixed key under which the collection is persisted.
pub const STORAGE_KEY: &str = "github-favorites";

/// An ordered collection of favorite GitHub accounts, newest first.
///
/// Invariant: every `login` appears at most once across the sequence. The
/// collection is created empty or restored from the injected store, and is
/// mutated only through [`add`](Favorites::add) and
/// [`delete`](Favorites::delete); both persist the whole sequence in a
/// single write.
///
/// Mutations take `&mut self`, so a shared collection must be serialized by
/// its owner (a single task, or an exclusive lock). Nothing guards two
/// processes writing through the same store; those writes are
/// last-writer-wins.
#[derive(Debug)]
pub struct Favorites<S: KeyValueStore> {
    entries: Vec<UserRecord>,
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Restores a collection from the store, or creates an empty one.
    ///
    /// A missing value yields an empty collection. So does an unreadable or
    /// unparseable one: stored-state corruption is recovered leniently
    /// rather than surfaced, and the next successful mutation overwrites
    /// the bad value.
    pub fn load(store: S) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<UserRecord>>(&raw) {
                Ok(entries) => {
                    debug!(count = entries.len(), "Restored favorites from store");
                    entries
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        "Stored favorites are not valid JSON, starting empty"
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored favorites, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored favorites, starting empty");
                Vec::new()
            }
        };

        Self { entries, store }
    }

    /// Adds a favorite by username, enriched through the given lookup.
    ///
    /// The new record is prepended, making it the most recent entry, and
    /// the full sequence is persisted before the call returns.
    ///
    /// # Arguments
    ///
    /// * `username` - The login to add.
    /// * `lookup` - The collaborator that resolves the username to a record.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateUser` if the login is already present
    /// (case-sensitive exact match against stored logins),
    /// `Error::UserNotFound` / `Error::LookupFailed` propagated from the
    /// lookup, and `Error::Storage` if the write fails. In every error case
    /// the collection is left unchanged.
    pub async fn add(
        &mut self,
        username: &str,
        lookup: &dyn UserLookup,
    ) -> Result<&UserRecord, Error> {
        if self.entries.iter().any(|entry| entry.login == username) {
            info!(username = username, "User is already a favorite");
            return Err(Error::DuplicateUser(username.to_string()));
        }

        let record = lookup.search(username).await.map_err(|e| match e {
            github_lookup::Error::UserNotFound(login) => Error::UserNotFound(login),
            other => Error::LookupFailed(other.to_string()),
        })?;

        // GitHub resolves usernames case-insensitively, so the canonical
        // login in the response can collide with a stored entry even when
        // the input did not.
        if self.entries.iter().any(|entry| entry.login == record.login) {
            info!(login = record.login, "User is already a favorite");
            return Err(Error::DuplicateUser(record.login));
        }

        self.entries.insert(0, record);
        if let Err(e) = self.save() {
            self.entries.remove(0);
            return Err(e);
        }

        info!(
            login = self.entries[0].login,
            count = self.entries.len(),
            "Added favorite"
        );
        Ok(&self.entries[0])
    }

    /// Removes the favorite with the given login, if present.
    ///
    /// Absent logins are a no-op, not an error. The sequence is persisted
    /// either way, matching one full write per call.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the write fails; the removal is rolled
    /// back in that case.
    pub fn delete(&mut self, login: &str) -> Result<(), Error> {
        let before = std::mem::take(&mut self.entries);
        self.entries = before
            .iter()
            .filter(|entry| entry.login != login)
            .cloned()
            .collect();

        if let Err(e) = self.save() {
            self.entries = before;
            return Err(e);
        }

        info!(
            login = login,
            count = self.entries.len(),
            "Removed favorite"
        );
        Ok(())
    }

    /// Returns the ordered sequence of favorites, newest first.
    pub fn entries(&self) -> &[UserRecord] {
        &self.entries
    }

    fn save(&self) -> Result<(), Error> {
        let value = serde_json::to_string(&self.entries)
            .map_err(|e| Error::Storage(StorageError::Write(e.to_string())))?;
        self.store.set(STORAGE_KEY, &value)?;
        Ok(())
    }
}
