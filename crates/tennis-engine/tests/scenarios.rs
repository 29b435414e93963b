//! Integration tests replaying full point sequences through a game.

use tennis_engine::{Game, Side};

/// Plays points alternately until each player reaches the given count.
fn play_to(one: u32, two: u32) -> Game {
    let mut game = Game::new("player1", "player2");
    for i in 0..one.max(two) {
        if i < one {
            game.award_point("player1");
        }
        if i < two {
            game.award_point("player2");
        }
    }
    game
}

#[test]
fn test_score_table() {
    let cases = [
        (0, 0, "Love-All"),
        (1, 1, "Fifteen-All"),
        (2, 2, "Thirty-All"),
        (3, 3, "Deuce"),
        (4, 4, "Deuce"),
        (1, 0, "Fifteen-Love"),
        (0, 1, "Love-Fifteen"),
        (2, 0, "Thirty-Love"),
        (0, 2, "Love-Thirty"),
        (3, 0, "Forty-Love"),
        (0, 3, "Love-Forty"),
        (4, 0, "Win for player1"),
        (0, 4, "Win for player2"),
        (2, 1, "Thirty-Fifteen"),
        (1, 2, "Fifteen-Thirty"),
        (3, 1, "Forty-Fifteen"),
        (1, 3, "Fifteen-Forty"),
        (4, 1, "Win for player1"),
        (1, 4, "Win for player2"),
        (3, 2, "Forty-Thirty"),
        (2, 3, "Thirty-Forty"),
        (4, 2, "Win for player1"),
        (2, 4, "Win for player2"),
        (4, 3, "Advantage player1"),
        (3, 4, "Advantage player2"),
        (5, 4, "Advantage player1"),
        (4, 5, "Advantage player2"),
        (15, 14, "Advantage player1"),
        (14, 15, "Advantage player2"),
        (6, 4, "Win for player1"),
        (4, 6, "Win for player2"),
        (16, 14, "Win for player1"),
        (14, 16, "Win for player2"),
    ];

    for (one, two, expected) in cases {
        let game = play_to(one, two);
        assert_eq!(
            game.current_score().unwrap(),
            expected,
            "score after {}-{}",
            one,
            two
        );
    }
}

#[test]
fn test_new_game_is_love_all() {
    let game = Game::new("A", "B");
    assert_eq!(game.current_score().unwrap(), "Love-All");
}

#[test]
fn test_first_point() {
    let mut game = Game::new("A", "B");
    game.award_point("A");
    assert_eq!(game.current_score().unwrap(), "Fifteen-Love");
}

#[test]
fn test_win_to_love() {
    let mut game = Game::new("A", "B");
    for _ in 0..4 {
        game.award_point("A");
    }
    assert_eq!(game.current_score().unwrap(), "Win for A");
    assert_eq!(game.winner(), Some(Side::One));
}

#[test]
fn test_three_all_is_deuce() {
    let mut game = Game::new("A", "B");
    for _ in 0..3 {
        game.award_point("A");
        game.award_point("B");
    }
    assert_eq!(game.current_score().unwrap(), "Deuce");
}

#[test]
fn test_advantage_after_deuce() {
    let mut game = Game::new("A", "B");
    for name in ["A", "A", "A", "B", "B", "B", "A"] {
        game.award_point(name);
    }
    assert_eq!(game.current_score().unwrap(), "Advantage A");
    assert!(!game.is_game_over());
}

#[test]
fn test_win_from_advantage() {
    let mut game = Game::new("A", "B");
    for name in ["A", "A", "A", "B", "B", "B", "A", "A"] {
        game.award_point(name);
    }
    assert_eq!(game.current_score().unwrap(), "Win for A");
    assert_eq!(game.points(Side::One), 5);
    assert_eq!(game.points(Side::Two), 3);
}

#[test]
fn test_score_names_each_player() {
    let mut game = Game::new("Serena", "Venus");
    for name in ["Venus", "Venus", "Venus", "Serena", "Serena", "Serena", "Venus"] {
        game.award_point(name);
    }
    assert_eq!(game.current_score().unwrap(), "Advantage Venus");
    game.award_point("Venus");
    assert_eq!(game.current_score().unwrap(), "Win for Venus");
}
