//! Scene drawing
//!
//! Turns a `GameState` into draw calls on a `Surface`.

use glam::IVec2;

use super::surface::{Font, Surface};
use super::vertex::colors;
use crate::sim::{BrickGrid, GamePhase, GameState, Rect};

const SCORE_POS: IVec2 = IVec2::new(10, 10);
const BANNER_POS: IVec2 = IVec2::new(100, 200);
const PROMPT_POS: IVec2 = IVec2::new(100, 300);

/// Draw one frame: background, bricks, ball, paddle, score, then the
/// game-over or pause overlay
pub fn draw_scene(state: &GameState, surface: &mut impl Surface) {
    let (width, height) = surface.size();
    surface.fill_rect(
        Rect::new(0, 0, width as i32, height as i32),
        colors::BACKGROUND,
    );

    for (row, col) in state.bricks.active_cells() {
        surface.fill_rect(BrickGrid::cell_rect(row, col), colors::BRICK);
    }

    surface.fill_ellipse(state.ball.bounds(), colors::BALL);
    surface.fill_rect(state.paddle.bounds(), colors::PADDLE);

    surface.draw_text(
        &format!("Score: {}", state.score),
        SCORE_POS,
        Font::HUD,
        colors::SCORE,
    );

    match state.phase {
        GamePhase::GameOver => {
            surface.draw_text(
                &format!("Game Over! Your Score: {}", state.score),
                BANNER_POS,
                Font::BANNER,
                colors::GAME_OVER,
            );
            surface.draw_text(
                "Press any key to continue.",
                PROMPT_POS,
                Font::BANNER,
                colors::GAME_OVER,
            );
        }
        GamePhase::Paused => {
            surface.draw_text("Paused", BANNER_POS, Font::BANNER, colors::PAUSED);
            surface.draw_text(
                "Press Esc to resume.",
                PROMPT_POS,
                Font::BANNER,
                colors::PAUSED,
            );
        }
        GamePhase::Running => {}
    }
}
