//! Wrap Snake - a grid snake whose edges wrap around
//!
//! Core modules:
//! - `grid`: play-field dimensions and positions
//! - `snake`: segment chain, movement, growth and collisions
//! - `food`: the single food cell
//! - `game`: frame-driven session (tick threshold, score, game over)
//! - `render` / `input`: the macroquad surface the session is drawn on and driven by

pub mod config;
pub mod direction;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;

pub use config::GameConfig;
pub use direction::Direction;
pub use food::Food;
pub use game::{FrameInput, FrameOutcome, Game, Phase};
pub use grid::{Grid, Position};
pub use snake::{Segment, Snake};

/// Game configuration constants
pub mod consts {
    use macroquad::color::Color;

    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
    pub const CELL_SIZE: i32 = 25;
    pub const INITIAL_LENGTH: usize = 5;
    /// Rendering frames per game tick (about 7.5 ticks/s at 60 fps)
    pub const TICK_FRAMES: u32 = 8;

    pub const WINDOW_TITLE: &str = "Snake v1.0";

    pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const GRID_LINES: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const SNAKE: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const FOOD: Color = Color::new(1.0, 0.0, 0.0, 1.0);
}
