//! Play-field discretization

use macroquad::math::Rect;

/// A cell on the grid
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved_by(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Grid dimensions in cells, plus the pixel size of one cell
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
}

impl Grid {
    /// Derive the grid from a pixel resolution. Partial cells at the edges are dropped.
    pub fn from_resolution(screen_width: i32, screen_height: i32, cell_size: i32) -> Self {
        Self {
            cell_size,
            width: screen_width / cell_size,
            height: screen_height / cell_size,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Toroidal wrap, applied independently per axis
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: pos.x.rem_euclid(self.width),
            y: pos.y.rem_euclid(self.height),
        }
    }

    pub fn pixel_width(&self) -> i32 {
        self.width * self.cell_size
    }

    pub fn pixel_height(&self) -> i32 {
        self.height * self.cell_size
    }

    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            (pos.x * self.cell_size) as f32,
            (pos.y * self.cell_size) as f32,
            self.cell_size as f32,
            self.cell_size as f32,
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        use crate::consts::*;
        Self::from_resolution(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE)
    }
}
