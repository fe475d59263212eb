//! Integration tests for the game session driven through its public API

use blockfall::core::{Board, Clock, GameSession, ManualClock, Randomizer};
use blockfall::types::{GameAction, PieceKind, SessionEvent, SessionStatus, BOARD_HEIGHT, BOARD_WIDTH};

/// Replays a fixed list of piece kinds, cycling.
struct Script {
    picks: Vec<u32>,
    pos: usize,
}

impl Script {
    fn of(kinds: &[PieceKind]) -> Self {
        Self {
            picks: kinds.iter().map(|k| k.index() as u32).collect(),
            pos: 0,
        }
    }
}

impl Randomizer for Script {
    fn uniform_choice(&mut self, n: u32) -> u32 {
        let v = self.picks[self.pos % self.picks.len()];
        self.pos += 1;
        v % n
    }
}

/// Rows `from..BOARD_HEIGHT` filled everywhere except column `gap`.
fn well(from: i8, gap: i8) -> Board {
    let mut board = Board::new();
    for y in from..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if x != gap {
                board.set(x, y, Some(PieceKind::Z));
            }
        }
    }
    board
}

fn assert_current_in_bounds<R: Randomizer>(game: &GameSession<R>) {
    for (x, y) in game.current().cells() {
        assert!((0..BOARD_WIDTH as i8).contains(&x), "x = {x}");
        assert!(y < BOARD_HEIGHT as i8, "y = {y}");
    }
}

#[test]
fn test_o_piece_hard_drop_end_to_end() {
    let mut game = GameSession::new(Script::of(&[PieceKind::O, PieceKind::T]));
    assert_eq!(game.current().x, 4);

    assert!(game.apply_action(GameAction::HardDrop));

    let board = game.board();
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(board.filled_count(), 4);
    assert_eq!(game.score(), 0);
    assert_eq!(game.current().kind(), PieceKind::T);
    assert_eq!(game.take_events(), vec![SessionEvent::PieceLocked]);
}

#[test]
fn test_single_line_scores_100_at_level_1() {
    let mut board = Board::new();
    for x in (0..3).chain(7..10) {
        board.set(x, 19, Some(PieceKind::J));
    }
    let mut game = GameSession::with_board(board, Script::of(&[PieceKind::I]));

    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.level(), 1);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(
        game.take_events(),
        vec![SessionEvent::PieceLocked, SessionEvent::LinesCleared(1)]
    );
}

#[test]
fn test_four_lines_score_quadratically() {
    let mut game = GameSession::with_board(well(16, 3), Script::of(&[PieceKind::I]));

    assert!(game.apply_action(GameAction::Rotate));
    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.score(), 1600);
    assert_eq!(game.lines(), 4);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_level_up_after_ten_lines() {
    let mut game = GameSession::with_board(well(8, 3), Script::of(&[PieceKind::I]));

    for round in 0..3 {
        assert!(game.apply_action(GameAction::Rotate), "round {round}");
        game.apply_action(GameAction::HardDrop);
    }

    // All three clears were scored at level 1.
    assert_eq!(game.score(), 3 * 1600);
    assert_eq!(game.lines(), 12);
    assert_eq!(game.level(), 2);
    assert_eq!(game.fall_interval_ms(), 450);

    let events = game.take_events();
    assert_eq!(
        &events[events.len() - 3..],
        &[
            SessionEvent::PieceLocked,
            SessionEvent::LinesCleared(4),
            SessionEvent::LevelUp(2)
        ]
    );
    assert_eq!(
        events.iter().filter(|e| matches!(e, SessionEvent::LevelUp(_))).count(),
        1
    );
}

#[test]
fn test_game_over_freezes_board() {
    let mut board = Board::new();
    for y in 2..BOARD_HEIGHT as i8 {
        board.set(4, y, Some(PieceKind::L));
        board.set(5, y, Some(PieceKind::L));
    }
    let mut game = GameSession::with_board(board, Script::of(&[PieceKind::O]));

    game.apply_action(GameAction::HardDrop);
    assert_eq!(game.status(), SessionStatus::GameOver);
    assert_eq!(
        game.take_events(),
        vec![SessionEvent::PieceLocked, SessionEvent::GameOver]
    );

    let frozen = game.board().clone();
    let current = *game.current();
    for action in [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Pause,
    ] {
        assert!(!game.apply_action(action));
    }
    assert!(!game.tick(60_000));
    assert_eq!(game.board(), &frozen);
    assert_eq!(*game.current(), current);
    assert!(game.take_events().is_empty());
    assert!(game.running());
}

#[test]
fn test_restart_after_game_over() {
    let mut blocked = Board::new();
    blocked.set(4, 0, Some(PieceKind::T));
    let mut game = GameSession::with_board(blocked, Script::of(&[PieceKind::O, PieceKind::S]));
    assert!(game.game_over());

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.status(), SessionStatus::Active);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!((game.score(), game.level(), game.lines()), (0, 1, 0));
    assert_eq!(game.episode(), 1);
}

#[test]
fn test_restart_resets_level_and_gravity() {
    let mut game = GameSession::with_board(well(8, 3), Script::of(&[PieceKind::I]));
    for _ in 0..3 {
        assert!(game.apply_action(GameAction::Rotate));
        game.apply_action(GameAction::HardDrop);
    }
    assert_eq!(game.level(), 2);
    assert_eq!(game.fall_interval_ms(), 450);

    // Stack horizontal I pieces in the middle columns until the spawn row is blocked.
    let mut drops = 0;
    while !game.game_over() {
        assert!(game.apply_action(GameAction::HardDrop));
        drops += 1;
        assert!(drops <= BOARD_HEIGHT as usize, "never reached game over");
    }

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.status(), SessionStatus::Active);
    assert_eq!(game.level(), 1);
    assert_eq!(game.fall_interval_ms(), 500);
    assert_eq!((game.score(), game.lines()), (0, 0));
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.episode(), 1);
}

#[test]
fn test_quit_is_accepted_in_every_state() {
    let mut paused = GameSession::with_seed(7);
    paused.apply_action(GameAction::Pause);
    assert!(paused.apply_action(GameAction::Quit));
    assert!(!paused.running());

    let mut blocked = Board::new();
    blocked.set(4, 0, Some(PieceKind::T));
    let mut over = GameSession::with_board(blocked, Script::of(&[PieceKind::O]));
    assert!(over.apply_action(GameAction::Quit));
    assert!(!over.apply_action(GameAction::Restart));
}

#[test]
fn test_gravity_with_manual_clock() {
    let clock = ManualClock::new(0);
    let mut game = GameSession::new(Script::of(&[PieceKind::T]));

    clock.advance(500);
    assert!(!game.tick(clock.now_ms()));
    clock.advance(1);
    assert!(game.tick(clock.now_ms()));
    assert_eq!(game.current().y, 1);

    // Gravity steps are silent.
    assert!(game.take_events().is_empty());

    // Pausing suspends gravity; resuming restarts the interval.
    game.apply_action(GameAction::Pause);
    clock.advance(5_000);
    assert!(!game.tick(clock.now_ms()));
    game.apply_action(GameAction::Pause);
    clock.advance(500);
    assert!(!game.tick(clock.now_ms()));
    clock.advance(1);
    assert!(game.tick(clock.now_ms()));
    assert_eq!(game.current().y, 2);
}

#[test]
fn test_same_seed_same_game() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];

    let mut a = GameSession::with_seed(2024);
    let mut b = GameSession::with_seed(2024);
    for (i, &action) in actions.iter().enumerate() {
        a.apply_action(action);
        b.apply_action(action);
        a.tick(i as u64 * 100);
        b.tick(i as u64 * 100);
    }
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.take_events(), b.take_events());
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut game = GameSession::with_seed(99);
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];

    let mut now = 0;
    for step in 0..2_000usize {
        let action = actions[(step * 7 + step / 3) % actions.len()];
        game.apply_action(action);

        now += 120;
        game.tick(now);

        if game.game_over() {
            game.apply_action(GameAction::Restart);
            continue;
        }
        assert_current_in_bounds(&game);
        assert!(game.current().is_valid_position(game.board()));
        assert_eq!(game.board().cells().len(), 200);
        // Every lock adds 4 cells and every cleared line removes 10.
        assert_eq!(game.board().filled_count() % 2, 0);
    }
}
