pub mod types;

pub use types::{FeedbackRecord, Rating, RatingError, Ratings, generate_id};
