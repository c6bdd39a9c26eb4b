use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, PiecePicker};
use blockfall::types::{GameAction, PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.apply_action(GameAction::Restart);
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for row in BOARD_HEIGHT - 4..BOARD_HEIGHT {
                for col in 0..BOARD_WIDTH {
                    board.set(row, col, PieceColor::Cyan);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_pick(c: &mut Criterion) {
    let mut picker = PiecePicker::new(12345);

    c.bench_function("pick_piece", |b| {
        b.iter(|| black_box(picker.pick(BOARD_WIDTH)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move_right();
            state.try_move_left();
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_pick,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
