pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod inventory;
pub mod orders;
pub mod promotions;
pub mod reports;
pub mod routes;
pub mod session;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
