use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{DirectoryError, Result};
use crate::model::User;

use super::seed_users;

/// Immutable, ordered set of users. Clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Arc<[User]>,
}

impl UserStore {
    /// Build a store from `users`, keeping their order.
    ///
    /// Fails if two records share an ID.
    pub fn new(users: Vec<User>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(DirectoryError::DuplicateId(user.id.clone()));
            }
        }

        Ok(Self {
            users: users.into(),
        })
    }

    /// The store populated with [`seed_users`].
    pub fn seed() -> Self {
        Self {
            users: seed_users().into(),
        }
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// First user whose ID equals `id` exactly.
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Leading `limit` users in store order.
    ///
    /// A missing, zero or negative limit yields every user. A limit larger
    /// than the store is truncated to its size.
    pub fn head(&self, limit: Option<i32>) -> &[User] {
        match limit {
            Some(n) if n > 0 => {
                let end = (n as usize).min(self.users.len());
                &self.users[..end]
            }
            _ => &self.users,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seed()
    }
}
