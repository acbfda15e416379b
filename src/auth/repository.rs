// User directory for one shop session

use chrono::Utc;
use std::collections::HashMap;

use crate::auth::{
    error::AuthError,
    models::{Role, User},
};

/// Username → account map
///
/// Usernames are unique and compared exactly.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from already-hashed accounts
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
        }
    }

    /// Create a new user
    pub fn create_user(
        &mut self,
        username: &str,
        password_hash: String,
        role: Role,
    ) -> Result<&User, AuthError> {
        if self.users.contains_key(username) {
            return Err(AuthError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            username: username.to_string(),
            password_hash,
            role,
            created_at: Utc::now(),
        };

        Ok(self.users.entry(username.to_string()).or_insert(user))
    }

    /// Find a user by username
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
