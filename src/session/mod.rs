// Session module
// Per-session shop state (users, identity, inventory, orders, feedback) and its lifecycle endpoints

pub mod handlers;
pub mod store;

pub use handlers::{create_session_handler, end_session_handler, SessionResponse};
pub use store::{SessionStore, ShopState};

use uuid::Uuid;

/// Error types for session lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),

    /// The session moved on to another identity (or logged out) after the token was checked
    #[error("Not logged in")]
    LoggedOut(Uuid),
}
