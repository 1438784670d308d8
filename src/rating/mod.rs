pub mod category;
pub mod elo;
pub mod engine;

pub use category::{filter_by_category, Category, RatedPlayer};
pub use elo::{expected_score, updated_ratings};
pub use engine::RatingEngine;
