use crate::config::settings::RatingSettings;
use crate::domain::RatingValue;

/// Logistic expected score of `rating` against `opponent`
pub fn expected_score(rating: RatingValue, opponent: RatingValue, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / scale))
}

/// New (winner, loser) ratings after the winner beat the loser
pub fn updated_ratings(
    winner: RatingValue,
    loser: RatingValue,
    settings: &RatingSettings,
) -> (RatingValue, RatingValue) {
    let expected_winner = expected_score(winner, loser, settings.logistic_scale);
    let expected_loser = expected_score(loser, winner, settings.logistic_scale);

    let new_winner = winner + settings.k_factor * (1.0 - expected_winner);
    let new_loser = loser + settings.k_factor * (0.0 - expected_loser);

    (new_winner, new_loser)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_expected_scores_sum_to_one() {
        for (a, b) in [(1000.0, 1000.0), (1200.0, 950.0), (400.0, 2100.0)] {
            let sum = expected_score(a, b, 400.0) + expected_score(b, a, 400.0);
            assert!((sum - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_400_point_gap_is_ten_to_one() {
        let expected = expected_score(1400.0, 1000.0, 400.0);
        assert!((expected - 10.0 / 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_equal_ratings_move_sixteen_points() {
        let (winner, loser) = updated_ratings(1000.0, 1000.0, &RatingSettings::default());

        assert!((winner - 1016.0).abs() < EPSILON);
        assert!((loser - 984.0).abs() < EPSILON);
    }

    #[test]
    fn test_update_is_zero_sum() {
        let settings = RatingSettings::default();
        for (w, l) in [(1000.0, 1000.0), (1300.0, 900.0), (850.0, 1430.0), (-20.0, 5.0)] {
            let (new_w, new_l) = updated_ratings(w, l, &settings);
            assert!(((new_w - w) + (new_l - l)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_upset_gains_more_than_expected_win() {
        let settings = RatingSettings::default();
        let (upset, _) = updated_ratings(900.0, 1300.0, &settings);
        let (favourite, _) = updated_ratings(1300.0, 900.0, &settings);

        assert!(upset - 900.0 > favourite - 1300.0);
        assert!(upset - 900.0 < settings.k_factor);
    }
}
