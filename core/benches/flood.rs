use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minesweep_core::*;

const VIEWPORT: Viewport = Viewport::new(1200.0, 1200.0);

fn first_click(c: &mut Criterion) {
    let config = BoardConfig::new((100, 100)).with_mines(1000);

    c.bench_function("first_click_100x100", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut board = Board::new(config, VIEWPORT, seed).unwrap();
            black_box(board.click_at((50, 50), Button::Primary).unwrap())
        })
    });
}

fn open_field(c: &mut Criterion) {
    let config = BoardConfig::new((200, 200)).with_mines(0);

    for mode in [RevealMode::Immediate, RevealMode::Deferred] {
        c.bench_function(&format!("open_field_200x200_{mode:?}"), |b| {
            b.iter(|| {
                let mut board =
                    Board::new(config.with_reveal_mode(mode), VIEWPORT, 0).unwrap();
                let mut outcome = board.click_at((100, 100), Button::Primary).unwrap();
                while board.has_pending() {
                    outcome = board.advance();
                }
                black_box(outcome)
            })
        });
    }
}

criterion_group!(benches, first_click, open_field);
criterion_main!(benches);
