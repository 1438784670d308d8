use std::collections::BTreeMap;

use crate::domain::{RatingValue, Username};

/// Keyed by username, so `/ratings` serializes in a stable order
pub type RatingMap = BTreeMap<Username, RatingValue>;

/// Current rating per username; unknown usernames sit at the baseline
#[derive(Debug, Clone)]
pub struct RatingStore {
    ratings: RatingMap,
    baseline: RatingValue,
}

impl RatingStore {
    pub fn new(baseline: RatingValue) -> Self {
        Self {
            ratings: RatingMap::new(),
            baseline,
        }
    }

    pub fn get_rating(&self, username: &str) -> RatingValue {
        self.ratings.get(username).copied().unwrap_or(self.baseline)
    }

    /// Overwrites unconditionally; negative or non-finite values are stored as given
    pub fn set_rating(&mut self, username: &str, value: RatingValue) {
        self.ratings.insert(username.to_string(), value);
    }

    pub fn reset_rating(&mut self, username: &str) {
        self.set_rating(username, self.baseline);
    }

    pub fn baseline(&self) -> RatingValue {
        self.baseline
    }

    pub fn as_map(&self) -> &RatingMap {
        &self.ratings
    }
}
