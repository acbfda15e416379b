// Authentication module
// Per-session accounts with Argon2 password hashes, JWT bearer tokens bound to a session, and role checks

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, logout_handler, me_handler, register_handler};
pub use middleware::{AdminUser, AuthenticatedUser};
pub use models::{AuthResponse, Identity, LoginRequest, RegisterRequest, Role, User, UserResponse};
pub use service::AuthService;
