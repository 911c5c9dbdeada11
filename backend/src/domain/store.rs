//! In-memory user store.

use super::user::{User, UserId};
use super::validation::UserDraft;

/// Ordered, process-lifetime collection of user records.
///
/// The store is explicitly owned by whoever constructs it and reaches the
/// handlers by injection; there is no ambient singleton, so tests build
/// isolated instances. Lookup is a linear scan that stops at the first
/// identifier match, and every returned record is a copy.
#[derive(Debug, Default)]
pub struct UserStore {
    records: Vec<User>,
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<User> {
        self.records.clone()
    }

    /// First record matching `id`, if any.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<User> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    /// Mint an identifier for `draft`, append the record, and return it.
    ///
    /// Collisions with existing identifiers are not defended against; a
    /// freshly minted v4 identifier is treated as unique.
    pub fn insert(&mut self, draft: UserDraft) -> User {
        let user = User {
            id: UserId::random(),
            username: draft.username,
            age: draft.age,
            hobbies: draft.hobbies,
        };
        self.records.push(user.clone());
        user
    }

    /// Replace every field of the record matching `id` in place.
    ///
    /// Returns the updated record, or `None` when no record matches.
    pub fn replace(&mut self, id: UserId, draft: UserDraft) -> Option<User> {
        let record = self.records.iter_mut().find(|record| record.id == id)?;
        record.username = draft.username;
        record.age = draft.age;
        record.hobbies = draft.hobbies;
        Some(record.clone())
    }

    /// Remove the record matching `id` from the sequence.
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
