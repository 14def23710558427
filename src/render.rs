//! Drawing the session onto a frame
//!
//! `draw_frame` only talks to a `Surface`, so the layering can be checked
//! without opening a window.

use macroquad::color::Color;
use macroquad::math::Rect;
use macroquad::shapes::{draw_line, draw_rectangle};
use macroquad::window::clear_background;

use crate::consts::*;
use crate::game::Game;

pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color);
}

/// The current macroquad window
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        draw_line(from.0, from.1, to.0, to.1, 1.0, color);
    }
}

/// Background, then food, then snake, then grid lines on top.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, game: &Game) {
    let grid = game.grid();

    surface.clear(BACKGROUND);
    surface.fill_rect(grid.cell_rect(game.food().position()), FOOD);
    for segment in game.snake().segments() {
        surface.fill_rect(grid.cell_rect(segment.position), SNAKE);
    }

    let w = grid.pixel_width() as f32;
    let h = grid.pixel_height() as f32;
    for x in (grid.cell_size..grid.pixel_width()).step_by(grid.cell_size as usize) {
        surface.line((x as f32, 0.0), (x as f32, h), GRID_LINES);
    }
    for y in (grid.cell_size..grid.pixel_height()).step_by(grid.cell_size as usize) {
        surface.line((0.0, y as f32), (w, y as f32), GRID_LINES);
    }
}
