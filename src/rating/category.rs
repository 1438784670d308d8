use serde::Serialize;

use crate::config::settings::CategorySettings;
use crate::domain::{Player, RatingValue, Username};
use crate::store::RatingStore;

/// Leaderboard partition selected by a case-insensitive tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Flinta,
    Under23,
    Over30,
    All,
}

impl Category {
    /// Unrecognized tags fall back to `All`
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "flinta" => Category::Flinta,
            "u23" => Category::Under23,
            "ue30" => Category::Over30,
            _ => Category::All,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Flinta => "flinta",
            Category::Under23 => "u23",
            Category::Over30 => "ue30",
            Category::All => "all",
        }
    }

    pub fn includes(&self, player: &Player, current_year: i32, settings: &CategorySettings) -> bool {
        match self {
            Category::Flinta => player.is_flinta(),
            Category::Under23 => player
                .age_in(current_year)
                .is_some_and(|age| age < i64::from(settings.youth_age_limit)),
            Category::Over30 => player
                .age_in(current_year)
                .is_some_and(|age| age >= i64::from(settings.veteran_min_age)),
            Category::All => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedPlayer {
    pub username: Username,
    pub rating: RatingValue,
}

/// Players of `category` with their current rating, in registration order
pub fn filter_by_category(
    category: Category,
    players: &[Player],
    ratings: &RatingStore,
    current_year: i32,
    settings: &CategorySettings,
) -> Vec<RatedPlayer> {
    players
        .iter()
        .filter(|player| category.includes(player, current_year, settings))
        .map(|player| RatedPlayer {
            username: player.username.clone(),
            rating: ratings.get_rating(&player.username),
        })
        .collect()
}
