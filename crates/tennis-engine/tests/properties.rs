//! Property tests over arbitrary point sequences.

use proptest::prelude::*;
use tennis_engine::{Game, Score};

/// A sequence of points, `true` meaning player "A" won the point.
fn rally_winners() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..40)
}

fn play(game: &mut Game, rallies: &[bool], first: &str, second: &str) {
    for &won_by_first in rallies {
        game.award_point(if won_by_first { first } else { second });
    }
}

proptest! {
    #[test]
    fn score_is_always_defined(rallies in rally_winners()) {
        let mut game = Game::new("A", "B");
        prop_assert!(game.current_score().is_ok());
        for &won_by_a in &rallies {
            game.award_point(if won_by_a { "A" } else { "B" });
            prop_assert!(game.current_score().is_ok());
        }
        prop_assert_eq!(game.points_played(), rallies.len());
    }

    #[test]
    fn any_resumed_score_is_defined(one in 0u32..100, two in 0u32..100) {
        let game = Game::from_points("A", one, "B", two);
        prop_assert!(game.current_score().is_ok());
    }

    #[test]
    fn unknown_names_change_nothing(rallies in rally_winners(), stranger in "[a-z]{0,8}") {
        let mut game = Game::new("A", "B");
        play(&mut game, &rallies, "A", "B");
        let before = game.clone();

        prop_assert_eq!(game.award_point(&stranger), None);
        prop_assert_eq!(game, before);
    }

    #[test]
    fn swapping_players_mirrors_score(rallies in rally_winners()) {
        let mut game = Game::new("A", "B");
        let mut swapped = Game::new("B", "A");
        play(&mut game, &rallies, "A", "B");
        play(&mut swapped, &rallies, "A", "B");

        let score = game.score().unwrap();
        prop_assert_eq!(swapped.score().unwrap(), score.mirrored());
        if !matches!(score, Score::Running { .. }) {
            prop_assert_eq!(swapped.current_score().unwrap(), game.current_score().unwrap());
        }
    }

    #[test]
    fn game_over_needs_game_point_and_margin(one in 0u32..20, two in 0u32..20) {
        let game = Game::from_points("A", one, "B", two);
        let decided = one.max(two) >= 4 && one.abs_diff(two) >= 2;
        prop_assert_eq!(game.is_game_over(), decided);
    }
}
