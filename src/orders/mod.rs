pub mod error;
pub mod handlers;
pub mod models;
pub mod prep_time;
pub mod price_calculator;
pub mod repository;
pub mod service;
pub mod status_machine;

pub use error::*;
pub use handlers::*;
pub use models::*;
pub use prep_time::*;
pub use price_calculator::*;
pub use repository::*;
pub use service::*;
pub use status_machine::*;
