use chrono::{DateTime, Utc};
use log::info;

use super::elo::updated_ratings;
use crate::config::settings::RatingSettings;
use crate::domain::{MatchRecord, PairOutcome, Username};
use crate::store::{Ladder, RatingStore};

/// Applies match results to the ladder's ratings with the Elo update
pub struct RatingEngine {
    settings: RatingSettings,
}

impl RatingEngine {
    pub fn new(settings: RatingSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RatingSettings {
        &self.settings
    }

    /// Rates every winner/loser pair, then appends the match to the log.
    ///
    /// Pairs run in index order and each one reads the ratings written by
    /// the previous ones. Winners without a loser at the same index are skipped.
    pub fn apply_match(
        &self,
        ladder: &mut Ladder,
        winners: Vec<Username>,
        losers: Vec<Username>,
        date: DateTime<Utc>,
    ) -> Vec<PairOutcome> {
        let outcomes = self.apply_pairs(ladder.ratings_mut(), &winners, &losers);

        info!(
            "Recorded match {:?} over {:?} ({} rated pairs)",
            winners,
            losers,
            outcomes.len()
        );
        ladder.append_match(MatchRecord { winners, losers, date });

        outcomes
    }

    pub fn apply_pairs(
        &self,
        ratings: &mut RatingStore,
        winners: &[Username],
        losers: &[Username],
    ) -> Vec<PairOutcome> {
        winners
            .iter()
            .zip(losers)
            .map(|(winner, loser)| self.apply_pair(ratings, winner, loser))
            .collect()
    }

    fn apply_pair(&self, ratings: &mut RatingStore, winner: &str, loser: &str) -> PairOutcome {
        let winner_before = ratings.get_rating(winner);
        let loser_before = ratings.get_rating(loser);

        let (winner_after, loser_after) =
            updated_ratings(winner_before, loser_before, &self.settings);

        ratings.set_rating(winner, winner_after);
        ratings.set_rating(loser, loser_after);

        PairOutcome {
            winner: winner.to_string(),
            loser: loser.to_string(),
            winner_delta: winner_after - winner_before,
            loser_delta: loser_after - loser_before,
        }
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new(RatingSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Player;

    const EPSILON: f64 = 1e-9;

    fn names(list: &[&str]) -> Vec<Username> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_pair_between_newcomers() {
        let engine = RatingEngine::default();
        let mut ladder = Ladder::new(1000.0);
        ladder.register_player(Player::new("Anna", Some(1994), "flinta"));
        ladder.register_player(Player::new("Ben", Some(1990), "male"));

        let outcomes = engine.apply_match(&mut ladder, names(&["Anna"]), names(&["Ben"]), Utc::now());

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].winner, "Anna");
        assert_eq!(outcomes[0].loser, "Ben");
        assert!((ladder.ratings().get_rating("Anna") - 1016.0).abs() < EPSILON);
        assert!((ladder.ratings().get_rating("Ben") - 984.0).abs() < EPSILON);
        assert_eq!(ladder.matches().len(), 1);
    }

    #[test]
    fn test_every_pair_is_zero_sum() {
        let engine = RatingEngine::default();
        let mut ratings = RatingStore::new(1000.0);
        ratings.set_rating("Anna", 1120.0);
        ratings.set_rating("Dana", 870.0);

        let outcomes = engine.apply_pairs(
            &mut ratings,
            &names(&["Anna", "Ben"]),
            &names(&["Chris", "Dana"]),
        );

        for outcome in outcomes {
            assert!((outcome.winner_delta + outcome.loser_delta).abs() < EPSILON);
            assert!(outcome.winner_delta > 0.0);
        }
    }

    #[test]
    fn test_unregistered_players_start_at_baseline() {
        let engine = RatingEngine::default();
        let mut ladder = Ladder::new(1000.0);

        engine.apply_match(&mut ladder, names(&["Ghost"]), names(&["Phantom"]), Utc::now());

        assert!((ladder.ratings().get_rating("Ghost") - 1016.0).abs() < EPSILON);
        assert!((ladder.ratings().get_rating("Phantom") - 984.0).abs() < EPSILON);
        assert!(ladder.players().is_empty());
    }

    #[test]
    fn test_shared_player_pairs_apply_sequentially() {
        let engine = RatingEngine::default();
        let mut ratings = RatingStore::new(1000.0);

        let outcomes = engine.apply_pairs(
            &mut ratings,
            &names(&["Anna", "Anna"]),
            &names(&["Ben", "Chris"]),
        );

        // Second pair sees Anna at 1016, so she gains less than 16
        assert!((outcomes[0].winner_delta - 16.0).abs() < EPSILON);
        assert!(outcomes[1].winner_delta < 16.0);

        let (after_first, _) = updated_ratings(1000.0, 1000.0, engine.settings());
        let (after_second, chris) = updated_ratings(after_first, 1000.0, engine.settings());
        assert!((ratings.get_rating("Anna") - after_second).abs() < EPSILON);
        assert!((ratings.get_rating("Chris") - chris).abs() < EPSILON);
    }

    #[test]
    fn test_order_of_pairs_changes_result() {
        let engine = RatingEngine::default();

        let mut forward = RatingStore::new(1000.0);
        forward.set_rating("Chris", 1200.0);
        engine.apply_pairs(&mut forward, &names(&["Anna", "Chris"]), &names(&["Ben", "Anna"]));

        let mut reversed = RatingStore::new(1000.0);
        reversed.set_rating("Chris", 1200.0);
        engine.apply_pairs(&mut reversed, &names(&["Chris", "Anna"]), &names(&["Anna", "Ben"]));

        assert!((forward.get_rating("Anna") - reversed.get_rating("Anna")).abs() > EPSILON);
    }

    #[test]
    fn test_surplus_winners_are_skipped() {
        let engine = RatingEngine::default();
        let mut ladder = Ladder::new(1000.0);

        let outcomes = engine.apply_match(
            &mut ladder,
            names(&["Anna", "Ben"]),
            names(&["Chris"]),
            Utc::now(),
        );

        assert_eq!(outcomes.len(), 1);
        assert_eq!(ladder.ratings().get_rating("Ben"), 1000.0);
        assert!(!ladder.ratings().as_map().contains_key("Ben"));
        assert_eq!(ladder.matches()[0].winners, names(&["Anna", "Ben"]));
    }

    #[test]
    fn test_empty_match_is_still_logged() {
        let engine = RatingEngine::default();
        let mut ladder = Ladder::new(1000.0);

        let outcomes = engine.apply_match(&mut ladder, Vec::new(), Vec::new(), Utc::now());

        assert!(outcomes.is_empty());
        assert_eq!(ladder.matches().len(), 1);
        assert!(ladder.ratings().as_map().is_empty());
    }
}
