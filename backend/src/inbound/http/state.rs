//! Shared HTTP adapter state.
//!
//! The user store is owned here and handed to handlers through
//! `actix_web::web::Data`, never through a module-level singleton; tests
//! construct isolated instances instead of resetting shared state.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Error, UserStore};

/// Dependency bundle for HTTP handlers.
#[derive(Debug, Default)]
pub struct HttpState {
    users: RwLock<UserStore>,
}

impl HttpState {
    /// State over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State over a pre-populated store.
    #[must_use]
    pub fn with_store(store: UserStore) -> Self {
        Self {
            users: RwLock::new(store),
        }
    }

    /// Shared read access to the store.
    ///
    /// # Errors
    /// A poisoned lock is an internal fault.
    pub fn users(&self) -> Result<RwLockReadGuard<'_, UserStore>, Error> {
        self.users
            .read()
            .map_err(|_| Error::internal("user store lock poisoned"))
    }

    /// Exclusive access for mutations. The guard is held across the whole
    /// check-validate-mutate sequence, so store mutations never interleave.
    ///
    /// # Errors
    /// A poisoned lock is an internal fault.
    pub fn users_mut(&self) -> Result<RwLockWriteGuard<'_, UserStore>, Error> {
        self.users
            .write()
            .map_err(|_| Error::internal("user store lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserDraft;

    #[test]
    fn instances_are_isolated() {
        let first = HttpState::new();
        let second = HttpState::new();
        first
            .users_mut()
            .expect("lock is healthy")
            .insert(UserDraft {
                username: "Ada".to_owned(),
                age: 36.into(),
                hobbies: Vec::new(),
            });
        assert_eq!(first.users().expect("lock is healthy").len(), 1);
        assert!(second.users().expect("lock is healthy").is_empty());
    }
}
