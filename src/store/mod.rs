pub mod matches;
pub mod players;
pub mod ratings;

use log::{info, warn};

pub use matches::MatchLog;
pub use players::Roster;
pub use ratings::{RatingMap, RatingStore};

use crate::domain::{MatchRecord, Player, RatingValue};

/// Process-wide ladder state: roster, ratings and match log.
///
/// Built once at startup and shared with every handler; nothing here
/// survives a restart.
#[derive(Debug, Clone)]
pub struct Ladder {
    roster: Roster,
    ratings: RatingStore,
    matches: MatchLog,
}

impl Ladder {
    pub fn new(baseline: RatingValue) -> Self {
        Self {
            roster: Roster::new(),
            ratings: RatingStore::new(baseline),
            matches: MatchLog::new(),
        }
    }

    /// Adds the player and puts their rating at the baseline.
    ///
    /// Re-registering an existing username appends a second roster entry
    /// and discards the rating earned so far.
    pub fn register_player(&mut self, player: Player) {
        if self.roster.contains(&player.username) {
            warn!(
                "Username {} registered again, rating reset to {}",
                player.username,
                self.ratings.baseline()
            );
        }

        self.ratings.reset_rating(&player.username);
        info!("Registered player {}", player.username);
        self.roster.insert(player);
    }

    pub fn players(&self) -> &[Player] {
        self.roster.list_all()
    }

    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    pub fn ratings_mut(&mut self) -> &mut RatingStore {
        &mut self.ratings
    }

    pub fn matches(&self) -> &[MatchRecord] {
        self.matches.list_all()
    }

    pub(crate) fn append_match(&mut self, record: MatchRecord) {
        self.matches.append(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_sets_baseline() {
        let mut ladder = Ladder::new(1000.0);
        ladder.register_player(Player::new("Anna", Some(1994), "flinta"));

        assert_eq!(ladder.players().len(), 1);
        assert_eq!(ladder.ratings().as_map().get("Anna"), Some(&1000.0));
    }

    #[test]
    fn test_reregistration_resets_rating() {
        let mut ladder = Ladder::new(1000.0);
        ladder.register_player(Player::new("Anna", Some(1994), "flinta"));
        ladder.ratings_mut().set_rating("Anna", 1042.5);

        ladder.register_player(Player::new("Anna", Some(1994), "flinta"));

        assert_eq!(ladder.ratings().get_rating("Anna"), 1000.0);
        assert_eq!(ladder.players().len(), 2);
    }

    #[test]
    fn test_new_ladder_is_empty() {
        let ladder = Ladder::new(1000.0);

        assert!(ladder.players().is_empty());
        assert!(ladder.ratings().as_map().is_empty());
        assert!(ladder.matches().is_empty());
    }
}
