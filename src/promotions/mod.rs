// Promotion codes: lookup of code -> discount fraction and its application to orders

pub mod engine;

pub use engine::{AppliedPromotion, PromotionEngine, PromotionNotice};

/// Error types for promotion codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromotionError {
    #[error("Invalid promo code.")]
    InvalidCode(String),
}
