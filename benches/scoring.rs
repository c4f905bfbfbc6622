use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tenpin::core::Game;
use tenpin::types::{RollSlot, LAST_FRAME, PIN_COUNT};

fn roll_game(rolls: &[u8]) -> Game {
    let mut game = Game::new();
    let mut rolls = rolls.iter().copied();
    while !game.is_complete() {
        let Ok(number) = game.begin_frame() else { break };
        let Some(first) = rolls.next() else { break };
        game.record_roll(RollSlot::First, first).unwrap();
        if number < LAST_FRAME {
            if first == PIN_COUNT {
                continue;
            }
            let Some(second) = rolls.next() else { break };
            game.record_roll(RollSlot::Second, second).unwrap();
        } else {
            let Some(second) = rolls.next() else { break };
            game.record_roll(RollSlot::Second, second).unwrap();
            if first == PIN_COUNT || first + second == PIN_COUNT {
                let Some(third) = rolls.next() else { break };
                game.record_roll(RollSlot::Third, third).unwrap();
            }
        }
    }
    game
}

fn bench_score_table(c: &mut Criterion) {
    // Perfect game: every frame's score chains into the next two.
    let game = roll_game(&[10; 12]);
    c.bench_function("score_table_perfect_game", |b| {
        b.iter(|| {
            let mut game = game.clone();
            black_box(game.score_table())
        })
    });
}

fn bench_score_of_frame(c: &mut Criterion) {
    let rolls = [4, 6, 4, 6, 4, 6, 4, 6, 4, 6, 4, 6, 4, 6, 4, 6, 4, 6, 4, 6, 5];
    let game = roll_game(&rolls);
    c.bench_function("score_of_frame_all_spares", |b| {
        b.iter(|| {
            for index in 0..10 {
                black_box(game.score_of_frame(black_box(index)));
            }
        })
    });
}

fn bench_full_game_entry(c: &mut Criterion) {
    c.bench_function("record_full_game", |b| {
        b.iter(|| black_box(roll_game(&[10; 12])))
    });
}

criterion_group!(
    benches,
    bench_score_table,
    bench_score_of_frame,
    bench_full_game_entry
);
criterion_main!(benches);
