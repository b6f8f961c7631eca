//! Frame composition - turns a [`GameState`] into draw calls.

use crate::game_state::GameState;
use crate::geom::Rect;
use crate::surface::{Surface, TextStyle};
use crate::types::{palette, Phase, Rgb, WALL_THICKNESS};

pub const RESTART_PROMPT: &str = "Press Enter to Restart";
pub const START_PROMPT: &str = "Press Enter to Start";

/// Draw one full frame. Pure: does not run loss/win detection.
pub fn draw_frame<S: Surface + ?Sized>(game: &GameState, surface: &mut S) {
    let layout = game.layout();
    let w = layout.screen_width;
    let h = layout.screen_height;

    surface.clear(palette::BACKGROUND);

    game.grid().render(surface);

    // Walls: top, left, right. The bottom stays open.
    surface.fill_rect(Rect::new(0, 0, w, WALL_THICKNESS), palette::WALL);
    surface.fill_rect(Rect::new(0, 0, WALL_THICKNESS, h), palette::WALL);
    surface.fill_rect(
        Rect::new(w - WALL_THICKNESS, 0, WALL_THICKNESS, h),
        palette::WALL,
    );

    let (score_x, score_y) = layout.score_origin();
    surface.text(
        score_x,
        score_y,
        &format!("Score: {}", game.score()),
        TextStyle::left(layout.score_font, palette::TEXT),
    );

    surface.fill_rect(game.paddle_rect(), palette::PADDLE);
    surface.fill_ellipse(game.ball_rect(), palette::BALL);

    match game.phase() {
        Phase::Playing => {}
        Phase::NotPlaying => {
            draw_banner(game, surface, None);
        }
        Phase::GameOver => {
            let banner = format!("Game Over, Score: {}", game.score());
            draw_banner(game, surface, Some((banner.as_str(), palette::GAME_OVER)));
        }
        Phase::Won => {
            let banner = format!("You Won! Score: {}", game.score());
            draw_banner(game, surface, Some((banner.as_str(), palette::WON)));
        }
    }
}

fn draw_banner<S: Surface + ?Sized>(
    game: &GameState,
    surface: &mut S,
    banner: Option<(&str, Rgb)>,
) {
    let layout = game.layout();
    let cx = layout.screen_width / 2;
    let cy = layout.screen_height / 2;

    match banner {
        Some((text, color)) => {
            surface.text(cx, cy, text, TextStyle::centered(layout.banner_font, color));
            surface.text(
                cx,
                cy + layout.banner_font,
                RESTART_PROMPT,
                TextStyle::centered(layout.prompt_font, palette::TEXT),
            );
        }
        None => {
            surface.text(
                cx,
                cy,
                START_PROMPT,
                TextStyle::centered(layout.prompt_font, palette::TEXT),
            );
        }
    }
}
