use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::{models::Identity, repository::UserDirectory};
use crate::feedback::FeedbackLog;
use crate::inventory::InventoryLedger;
use crate::orders::OrderBook;
use crate::session::SessionError;

/// Everything one shop session owns
#[derive(Debug, Clone)]
pub struct ShopState {
    pub users: UserDirectory,
    /// Who the session is currently acting as; `None` when logged out
    pub identity: Option<Identity>,
    pub inventory: InventoryLedger,
    pub orders: OrderBook,
    pub feedback: FeedbackLog,
    pub created_at: DateTime<Utc>,
}

impl ShopState {
    pub fn new(users: UserDirectory, inventory: InventoryLedger) -> Self {
        Self {
            users,
            identity: None,
            inventory,
            orders: OrderBook::new(),
            feedback: FeedbackLog::new(),
            created_at: Utc::now(),
        }
    }

    /// True when the session is logged in as exactly this identity
    pub fn is_acting_as(&self, identity: &Identity) -> bool {
        self.identity.as_ref() == Some(identity)
    }
}

/// Live shop sessions keyed by id
///
/// Every mutating action takes the write lock for its whole duration, so
/// actions within and across sessions are serialised.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ShopState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh shop state under a new id
    pub async fn create(&self, shop: ShopState) -> Uuid {
        let mut sessions = self.sessions.write().await;
        let mut id = Uuid::new_v4();
        while sessions.contains_key(&id) {
            id = Uuid::new_v4();
        }
        sessions.insert(id, shop);
        tracing::info!("Opened shop session {}", id);
        id
    }

    /// Drop a session and everything it owns
    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| tracing::info!("Closed shop session {}", id))
            .ok_or(SessionError::NotFound(id))
    }

    /// Run a read-only action against one session
    pub async fn read<T, E, F>(&self, id: Uuid, action: F) -> Result<T, E>
    where
        F: FnOnce(&ShopState) -> Result<T, E>,
        E: From<SessionError>,
    {
        let sessions = self.sessions.read().await;
        let shop = sessions.get(&id).ok_or(SessionError::NotFound(id))?;
        action(shop)
    }

    /// Run a mutating action against one session
    pub async fn write<T, E, F>(&self, id: Uuid, action: F) -> Result<T, E>
    where
        F: FnOnce(&mut ShopState) -> Result<T, E>,
        E: From<SessionError>,
    {
        let mut sessions = self.sessions.write().await;
        let shop = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        action(shop)
    }

    /// Run a mutating action on behalf of `identity`
    ///
    /// The identity is re-checked under the write lock, so a logout or
    /// re-login that lands after authentication still stops the action.
    pub async fn write_as<T, E, F>(&self, id: Uuid, identity: &Identity, action: F) -> Result<T, E>
    where
        F: FnOnce(&mut ShopState) -> Result<T, E>,
        E: From<SessionError>,
    {
        let mut sessions = self.sessions.write().await;
        let shop = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        if !shop.is_acting_as(identity) {
            return Err(SessionError::LoggedOut(id).into());
        }
        action(shop)
    }

    #[cfg(test)]
    pub async fn contains(&self, id: Uuid) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
