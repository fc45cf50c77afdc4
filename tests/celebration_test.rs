//! Timing tests for the end-of-game celebration, driven through the app.

use std::time::Duration;

use strictly_board::{Action, App, BoardConfig, Celebration, CelebrationPhase, Player, Position};

const WINDOW_MS: u64 = 1000;

fn app() -> App {
    App::new(&BoardConfig::default().with_celebration_ms(WINDOW_MS))
}

fn play(app: &mut App, moves: &[usize]) {
    for &i in moves {
        app.dispatch(Action::Play(Position::from_index(i).unwrap()));
    }
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_celebration_times_out() {
    let mut app = app();
    play(&mut app, &[0, 3, 1, 4, 2]);
    assert!(app.is_celebrating());

    advance(WINDOW_MS - 1).await;
    app.on_tick();
    assert!(app.is_celebrating());

    advance(2).await;
    app.on_tick();
    assert!(!app.is_celebrating());
    assert!(app.confetti().is_none());
    // The game itself is still won.
    assert_eq!(app.game().winner(), Some(Player::X));
}

#[tokio::test(start_paused = true)]
async fn test_clicks_after_win_do_not_rearm() {
    let mut app = app();
    play(&mut app, &[0, 3, 1, 4, 2]);
    advance(WINDOW_MS + 1).await;
    app.on_tick();
    assert!(!app.is_celebrating());

    play(&mut app, &[5, 6, 7, 8]);
    app.on_tick();
    assert!(!app.is_celebrating());
}

#[tokio::test(start_paused = true)]
async fn test_reset_ends_celebration_immediately() {
    let mut app = app();
    play(&mut app, &[0, 3, 1, 4, 2]);
    assert!(app.confetti().is_some());

    app.dispatch(Action::Reset);
    assert!(!app.is_celebrating());
    assert!(app.confetti().is_none());
    assert_eq!(app.game().to_move(), Player::X);
}

#[tokio::test(start_paused = true)]
async fn test_old_timer_cannot_end_new_celebration() {
    let mut app = app();
    play(&mut app, &[0, 3, 1, 4, 2]);
    app.dispatch(Action::Reset);

    advance(600).await;
    // O wins the second game down the middle column.
    play(&mut app, &[0, 1, 2, 4, 8, 7]);
    assert_eq!(app.game().winner(), Some(Player::O));
    assert!(app.is_celebrating());

    // Past the first game's deadline, within the second's.
    advance(500).await;
    app.on_tick();
    assert!(app.is_celebrating());

    advance(WINDOW_MS).await;
    app.on_tick();
    assert!(!app.is_celebrating());
}

#[tokio::test(start_paused = true)]
async fn test_draw_shows_no_celebration() {
    let mut app = app();
    play(&mut app, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert!(app.game().is_draw());
    assert!(!app.is_celebrating());
    assert!(app.confetti().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_timer() {
    let (mut celebration, mut expiries) = Celebration::new(Duration::from_millis(WINDOW_MS));
    celebration.observe(Some(Player::X));
    assert_eq!(celebration.phase(), CelebrationPhase::Celebrating(Player::X));

    drop(celebration);
    // Every sender is gone with the aborted task, so the channel just closes.
    assert_eq!(expiries.recv().await, None);
}

#[test]
fn test_win_without_runtime_does_not_panic() {
    let mut app = app();
    play(&mut app, &[0, 3, 1, 4, 2]);
    assert_eq!(app.game().winner(), Some(Player::X));
    assert!(app.is_celebrating());

    app.dispatch(Action::Reset);
    assert!(!app.is_celebrating());
}
