//! Game state and core simulation types

use glam::IVec2;

use super::collision::Rect;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Game is paused (Escape)
    Paused,
    /// Ball lost or board cleared
    GameOver,
}

/// Something that happened during a tick or a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the left or right wall
    WallBounce,
    /// Ball bounced off the top of the window
    CeilingBounce,
    PaddleHit,
    BrickDestroyed { row: usize, col: usize },
    /// Ball crossed the loss line
    BallLost,
    /// Last active brick destroyed
    BoardCleared,
    Paused,
    Resumed,
    /// First key press after game over; the next one resets
    ResetArmed,
    Reset,
}

/// Window bounds the ball and paddle live in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT)
    }
}

impl Arena {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest ball x that keeps the ball inside the right wall
    pub fn max_ball_x(&self) -> i32 {
        (self.width as i32 - BALL_SIZE).max(0)
    }

    /// Largest paddle x that keeps the paddle inside the window
    pub fn max_paddle_x(&self) -> i32 {
        (self.width as i32 - PADDLE_WIDTH).max(0)
    }
}

/// The ball: integer position of its box's top-left corner plus velocity
/// in pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: IVec2::new(BALL_START_X, BALL_START_Y),
            vel: IVec2::new(BALL_START_VX, BALL_START_VY),
        }
    }
}

impl Ball {
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, IVec2::splat(BALL_SIZE))
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Left edge; the paddle's y is fixed at `PADDLE_Y`
    pub x: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { x: PADDLE_START_X }
    }
}

impl Paddle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Move horizontally by `dx`, staying inside the arena
    pub fn shift(&mut self, dx: i32, arena: &Arena) {
        self.x = (self.x + dx).clamp(0, arena.max_paddle_x());
    }

    pub fn clamp_to(&mut self, arena: &Arena) {
        self.shift(0, arena);
    }
}

/// Fixed-size grid of bricks, row-major. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    active: Vec<bool>,
}

impl BrickGrid {
    /// Check grid dimensions without allocating
    pub fn check_size(rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }
        if rows > MAX_BRICK_ROWS || cols > MAX_BRICK_COLS {
            return Err(Error::GridTooLarge {
                rows,
                cols,
                max_rows: MAX_BRICK_ROWS,
                max_cols: MAX_BRICK_COLS,
            });
        }
        Ok(())
    }

    /// Create a grid with every brick active
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::check_size(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            active: vec![true; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Whether the brick at (row, col) is still standing. Out-of-range cells
    /// are never active.
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.active[i])
    }

    /// Knock out a brick. Returns true only on the active→destroyed transition.
    pub fn destroy(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) if self.active[i] => {
                self.active[i] = false;
                true
            }
            _ => false,
        }
    }

    pub fn restore_all(&mut self) {
        self.active.fill(true);
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn all_destroyed(&self) -> bool {
        !self.active.contains(&true)
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(row: usize, col: usize) -> Rect {
        Rect::new(
            col as i32 * BRICK_WIDTH,
            row as i32 * BRICK_HEIGHT,
            BRICK_WIDTH,
            BRICK_HEIGHT,
        )
    }

    /// (row, col) of every active brick, in row-major order
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.active
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u32,
    pub phase: GamePhase,
    /// Set by the first key press after game over
    pub reset_requested: bool,
    /// Escape toggles pause when set
    pub pause_enabled: bool,
    pub arena: Arena,
    /// Ticks that advanced the ball since startup
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: &Settings, arena: Arena) -> Result<Self> {
        let mut paddle = Paddle::default();
        paddle.clamp_to(&arena);

        Ok(Self {
            ball: Ball::default(),
            paddle,
            bricks: BrickGrid::new(settings.brick_rows, settings.brick_cols)?,
            score: 0,
            phase: GamePhase::Running,
            reset_requested: false,
            pause_enabled: settings.pause_enabled,
            arena,
            time_ticks: 0,
        })
    }

    /// Put ball, paddle, score and bricks back to their starting values and
    /// resume play
    pub fn reset(&mut self) {
        self.ball = Ball::default();
        self.paddle = Paddle::default();
        self.paddle.clamp_to(&self.arena);
        self.score = 0;
        self.bricks.restore_all();
        self.phase = GamePhase::Running;
        self.reset_requested = false;
    }

    /// Window changed size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.arena = Arena::new(width, height);
        self.paddle.clamp_to(&self.arena);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Layout;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Settings::from_preset(Layout::Classic), Arena::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ball.pos, IVec2::new(100, 100));
        assert_eq!(state.ball.vel, IVec2::new(2, 2));
        assert_eq!(state.paddle.x, 150);
        assert_eq!(state.bricks.active_count(), 2);
        assert!(!state.pause_enabled);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(
            BrickGrid::new(0, 3),
            Err(Error::EmptyGrid { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            BrickGrid::new(usize::MAX, usize::MAX),
            Err(Error::GridTooLarge { .. })
        ));
        assert!(matches!(
            BrickGrid::new(MAX_BRICK_ROWS + 1, 1),
            Err(Error::GridTooLarge { .. })
        ));
        let grid = BrickGrid::new(MAX_BRICK_ROWS, MAX_BRICK_COLS).unwrap();
        assert_eq!(grid.active_count(), MAX_BRICK_ROWS * MAX_BRICK_COLS);
    }

    #[test]
    fn test_destroy_only_once() {
        let mut grid = BrickGrid::new(2, 3).unwrap();
        assert!(grid.destroy(1, 2));
        assert!(!grid.destroy(1, 2));
        assert!(!grid.is_active(1, 2));
        assert_eq!(grid.active_count(), 5);
    }

    #[test]
    fn test_out_of_range_cells() {
        let mut grid = BrickGrid::new(1, 2).unwrap();
        assert!(!grid.is_active(0, 2));
        assert!(!grid.is_active(1, 0));
        assert!(!grid.destroy(5, 5));
        assert_eq!(grid.active_count(), 2);
    }

    #[test]
    fn test_active_cells_order() {
        let mut grid = BrickGrid::new(2, 2).unwrap();
        grid.destroy(0, 1);
        let cells: Vec<_> = grid.active_cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (1, 1)]);

        grid.restore_all();
        assert_eq!(grid.active_count(), 4);
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
    }

    #[test]
    fn test_cell_rect() {
        assert_eq!(BrickGrid::cell_rect(0, 0), Rect::new(0, 0, 50, 20));
        assert_eq!(BrickGrid::cell_rect(2, 3), Rect::new(150, 40, 50, 20));
    }

    #[test]
    fn test_paddle_clamped() {
        let arena = Arena::new(300, 600);
        let mut paddle = Paddle::default();
        paddle.shift(-1000, &arena);
        assert_eq!(paddle.x, 0);
        paddle.shift(1000, &arena);
        assert_eq!(paddle.x, 240);
    }

    #[test]
    fn test_resize_reclamps_paddle() {
        let mut state = GameState::new(&Settings::default(), Arena::new(800, 600)).unwrap();
        state.paddle.x = 700;
        state.resize(400, 300);
        assert_eq!(state.paddle.x, 340);
        assert_eq!(state.arena, Arena::new(400, 300));
    }

    #[test]
    fn test_tiny_arena_bounds() {
        let arena = Arena::new(10, 10);
        assert_eq!(arena.max_ball_x(), 0);
        assert_eq!(arena.max_paddle_x(), 0);
    }
}
