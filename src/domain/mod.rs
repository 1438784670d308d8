pub mod models;

pub use models::{MatchRecord, PairOutcome, Player, RatingValue, Username};
