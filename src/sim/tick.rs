//! Fixed-interval simulation tick
//!
//! Advances the ball one step, resolves wall, paddle and brick contacts and
//! checks the two end conditions.

use super::state::{BrickGrid, GameEvent, GamePhase, GameState};
use crate::consts::LOSS_LINE_Y;

/// Advance the game state by one timer tick
///
/// Returns the events produced, in the order they happened. An empty list
/// means nothing changed that a caller needs to log.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Paused => return events,
        GamePhase::GameOver => {
            // Reset armed by a key press lands on the next tick
            if state.reset_requested {
                state.reset();
                events.push(GameEvent::Reset);
            }
            return events;
        }
        GamePhase::Running => {}
    }

    state.time_ticks += 1;
    state.ball.advance();

    if state.ball.pos.y >= LOSS_LINE_Y {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::BallLost);
        return events;
    }

    reflect_off_side_walls(state, &mut events);

    // Ceiling, paddle and bricks can all ask for a vertical bounce in the
    // same tick; the ball turns around once
    let hit_ceiling = touches_ceiling(state, &mut events);
    let hit_paddle = touches_paddle(state, &mut events);
    let hit_bricks = break_bricks(state, &mut events);
    if hit_ceiling || hit_paddle || hit_bricks {
        state.ball.vel.y = -state.ball.vel.y;
    }

    if state.bricks.all_destroyed() {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::BoardCleared);
    }

    events
}

/// Only a ball moving outward is turned around, so a ball already heading
/// back in is never flipped a second time.
fn reflect_off_side_walls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    let max_x = state.arena.max_ball_x();

    if (ball.pos.x < 0 && ball.vel.x < 0) || (ball.pos.x > max_x && ball.vel.x > 0) {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }
}

fn touches_ceiling(state: &GameState, events: &mut Vec<GameEvent>) -> bool {
    let ball = &state.ball;
    let hit = ball.pos.y <= 0 && ball.vel.y < 0;
    if hit {
        events.push(GameEvent::CeilingBounce);
    }
    hit
}

/// Box overlap with the paddle while descending. The ball stays inside the
/// paddle band for several ticks; ignoring it on the way up keeps it from
/// flipping back and forth.
fn touches_paddle(state: &GameState, events: &mut Vec<GameEvent>) -> bool {
    let ball = &state.ball;
    let hit = ball.vel.y > 0 && ball.bounds().overlaps(&state.paddle.bounds());
    if hit {
        events.push(GameEvent::PaddleHit);
    }
    hit
}

/// Knock out every active brick the ball touches, one point each. Returns
/// true if any brick was hit.
fn break_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let ball_box = state.ball.bounds();
    let hits: Vec<(usize, usize)> = state
        .bricks
        .active_cells()
        .filter(|&(row, col)| BrickGrid::cell_rect(row, col).overlaps(&ball_box))
        .collect();

    for &(row, col) in &hits {
        if state.bricks.destroy(row, col) {
            state.score += 1;
            events.push(GameEvent::BrickDestroyed { row, col });
        }
    }
    !hits.is_empty()
}
