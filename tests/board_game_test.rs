//! Behavioural tests for the game state holder and win evaluator.

use strictly_board::{
    Board, Game, GameStatus, LINES, Player, Position, STARTING_PLAYER, Square, check_winner,
};

fn play_all(game: &mut Game, moves: &[usize]) {
    for &i in moves {
        game.play_move(i);
    }
}

/// True if `player` fully occupies any line, regardless of scan order.
fn owns_a_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)))
}

#[test]
fn test_horizontal_win() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X's!");
    assert!(game.is_over());

    let before = game.clone();
    for i in 0..9 {
        game.play_move(i);
    }
    assert_eq!(game, before, "moves after a win must be no-ops");
}

#[test]
fn test_draw() {
    let mut game = Game::new();
    // X: 0 1 5 6 8, O: 2 3 4 7
    play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(game.winner(), None);
    assert!(game.is_draw());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw!");
    assert!(game.is_over());
}

#[test]
fn test_rejected_move_twice() {
    let mut game = Game::new();
    game.play_move(0);
    let after_first = game.clone();
    game.play_move(0);

    assert_eq!(game, after_first);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
}

#[test]
fn test_status_line_tracks_turn() {
    let mut game = Game::new();
    assert_eq!(game.status().to_string(), "Next player: X");
    game.play_move(4);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_reset_from_any_state() {
    let sequences: [&[usize]; 4] = [
        &[],
        &[4],
        &[0, 3, 1, 4, 2],
        &[0, 2, 1, 3, 5, 4, 6, 7, 8],
    ];
    for moves in sequences {
        let mut game = Game::new();
        play_all(&mut game, moves);
        game.reset();
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(game.to_move(), STARTING_PLAYER);
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }
}

#[test]
fn test_reset_then_replay() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();
    play_all(&mut game, &[8, 0, 7, 1, 6]);
    assert_eq!(game.winner(), Some(Player::X));
}

/// Walks every reachable game and every click (legal or not) from each
/// state, checking the invariants that must hold everywhere.
#[test]
fn test_invariants_over_entire_game_tree() {
    fn walk(game: &Game, visited: &mut usize) {
        *visited += 1;
        let board = game.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);

        // X starts, so X is level with O or one ahead.
        assert!(x == o || x == o + 1, "x={x} o={o}");
        assert_eq!(game.to_move(), if x == o { Player::X } else { Player::O });

        // Never two winners at once.
        assert!(!(owns_a_line(board, Player::X) && owns_a_line(board, Player::O)));
        assert_eq!(
            check_winner(board).is_some(),
            owns_a_line(board, Player::X) || owns_a_line(board, Player::O)
        );

        for i in 0..9 {
            let mut next = game.clone();
            next.play_move(i);
            let accepted = game.winner().is_none()
                && board.get(Position::from_index(i).unwrap()) == Square::Empty;

            if accepted {
                assert_ne!(next.to_move(), game.to_move(), "accepted move must flip turn");
                walk(&next, visited);
            } else {
                assert_eq!(&next, game, "rejected move must be a no-op");
            }
        }
    }

    let mut visited = 0;
    walk(&Game::new(), &mut visited);
    // Every move sequence that respects the stop-on-win rule.
    assert_eq!(visited, 549_946);
}
