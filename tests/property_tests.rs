//! Property tests for grid construction, paddle clamping, and scoring.

use proptest::prelude::*;

use brick_breaker::core::{Ball, BrickGrid, GameState, Layout};
use brick_breaker::types::{BrickKind, Phase, PlayerAction};

fn action() -> impl Strategy<Value = PlayerAction> {
    prop_oneof![Just(PlayerAction::MoveLeft), Just(PlayerAction::MoveRight)]
}

proptest! {
    #[test]
    fn grid_is_a_checkerboard(rows in 1u16..20, cols in 1u16..20) {
        let grid = BrickGrid::new(&Layout::new(1000, 800, rows, cols));
        for i in 0..rows as usize {
            for j in 0..cols as usize {
                let bonus = (i % 2 == 0) ^ (j % 2 == 0);
                let expected = if bonus { BrickKind::Bonus } else { BrickKind::Standard };
                prop_assert_eq!(grid.kind(i, j), Some(expected));
            }
        }
        prop_assert_eq!(grid.remaining(), rows as usize * cols as usize);
    }

    #[test]
    fn paddle_stays_on_screen(
        width in 50i32..3000,
        moves in proptest::collection::vec(action(), 0..300),
    ) {
        let mut game = GameState::new(Layout::new(width, 600, 4, 4));
        let max_x = width - game.layout().paddle_width;
        for m in moves {
            game.apply_action(m);
            prop_assert!(game.paddle_x() >= 0);
            prop_assert!(game.paddle_x() <= max_x);
        }
    }

    #[test]
    fn at_most_one_brick_per_call(
        x in 0i32..1000,
        y in 0i32..400,
        size in 1i32..400,
    ) {
        let mut grid = BrickGrid::new(&Layout::new(1000, 1000, 6, 6));
        let before = grid.remaining();
        let hit = grid.resolve_collision(x, y, size);
        let after = grid.remaining();
        match hit {
            Some(hit) => {
                prop_assert_eq!(after, before - 1);
                prop_assert_eq!(grid.kind(hit.row, hit.col), Some(BrickKind::Empty));
                prop_assert_eq!(hit.points, hit.kind.points());
                prop_assert!(hit.points == 5 || hit.points == 20);
            }
            None => {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn score_tracks_destroyed_bricks(
        x in 3i32..980,
        y in 3i32..600,
        dx in prop_oneof![Just(-2i32), Just(-1), Just(1), Just(2)],
        dy in prop_oneof![Just(-2i32), Just(-1), Just(1), Just(2)],
        ticks in 1usize..3000,
    ) {
        let mut game = GameState::new(Layout::new(1000, 1000, 5, 5));
        game.apply_action(PlayerAction::Restart);
        game.place_ball(Ball { x, y, dx, dy });

        let total = game.bricks_remaining();
        let mut last_score = 0;
        let mut last_remaining = total;
        for _ in 0..ticks {
            game.tick();
            if game.evaluate() != Phase::Playing {
                break;
            }

            let score = game.score();
            let remaining = game.bricks_remaining();
            prop_assert!(score >= last_score);
            prop_assert!(remaining <= last_remaining);
            prop_assert!(last_remaining - remaining <= 1);
            if remaining < last_remaining {
                let gained = score - last_score;
                prop_assert!(gained == 5 || gained == 20);
            } else {
                prop_assert_eq!(score, last_score);
            }
            last_score = score;
            last_remaining = remaining;
        }

        prop_assert_eq!(game.grid().remaining(), game.bricks_remaining() as usize);
        prop_assert_eq!(game.bricks_remaining() == 0, game.grid().is_cleared());
    }
}
