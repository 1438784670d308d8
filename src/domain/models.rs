use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Username = String;
pub type RatingValue = f64;

/// Registered ladder player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub username: Username,
    /// Birth year, `None` when the submitted value was not numeric
    pub year: Option<i32>,
    pub gender: String,
    /// Stored photo path, opaque to the rating core
    pub photo: Option<String>,
}

impl Player {
    pub fn new(username: impl Into<String>, year: Option<i32>, gender: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            year,
            gender: gender.into(),
            photo: None,
        }
    }

    pub fn with_photo(mut self, photo: Option<String>) -> Self {
        self.photo = photo;
        self
    }

    /// Age in whole years as of `current_year`, unknown without a birth year.
    ///
    /// Widened to i64 so extreme submitted years cannot overflow.
    pub fn age_in(&self, current_year: i32) -> Option<i64> {
        self.year.map(|year| i64::from(current_year) - i64::from(year))
    }

    pub fn is_flinta(&self) -> bool {
        self.gender.eq_ignore_ascii_case("flinta")
    }
}

/// Completed match: `winners[i]` defeated `losers[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winners: Vec<Username>,
    pub losers: Vec<Username>,
    pub date: DateTime<Utc>,
}

/// Rating change applied to one winner/loser pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairOutcome {
    pub winner: Username,
    pub loser: Username,
    pub winner_delta: RatingValue,
    pub loser_delta: RatingValue,
}
