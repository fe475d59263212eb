use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::audio::{synthesize, SoundCue, SAMPLE_RATE};
use blockfall::core::{Board, GameSession, GameSnapshot, Tetromino};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameSession::with_seed(12345);
    let mut now = 0u64;

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            if game.game_over() {
                game.apply_action(GameAction::Restart);
            }
            game.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_hard_drop_lock(c: &mut Criterion) {
    let mut game = GameSession::with_seed(12345);

    c.bench_function("hard_drop_lock", |b| {
        b.iter(|| {
            if game.game_over() {
                game.apply_action(GameAction::Restart);
            }
            game.apply_action(black_box(GameAction::HardDrop));
            game.take_events();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Tetromino::spawn(PieceKind::T);
    piece.move_down(&board);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            piece.rotate(black_box(&board));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = GameSession::with_seed(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame_80x24", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

fn bench_synthesize(c: &mut Criterion) {
    c.bench_function("synthesize_gameover_cue", |b| {
        b.iter(|| synthesize(black_box(SoundCue::GameOver), SAMPLE_RATE))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop_lock,
    bench_rotate,
    bench_render,
    bench_synthesize
);
criterion_main!(benches);
