// Feedback module
// Ratings and comments customers leave on their own orders

pub mod handlers;
pub mod models;

pub use handlers::{list_feedback_handler, submit_feedback_handler};
pub use models::{Feedback, FeedbackLog, SubmitFeedbackRequest};
