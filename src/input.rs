//! Keyboard bindings
//!
//! Arrows and WASD steer, Escape or Q quits.

use macroquad::input::{KeyCode, is_key_pressed};

use crate::direction::Direction;
use crate::game::FrameInput;

const STEERING_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Right,
    KeyCode::D,
];

const QUIT_KEYS: [KeyCode; 2] = [KeyCode::Escape, KeyCode::Q];

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

/// Collect this frame's input from an "was this key pressed" query.
///
/// When several steering keys go down in the same frame the first in
/// up/down/left/right order wins.
pub fn frame_input(pressed: impl Fn(KeyCode) -> bool) -> FrameInput {
    let direction = STEERING_KEYS
        .iter()
        .copied()
        .find(|key| pressed(*key))
        .and_then(direction_for_key);
    let quit = QUIT_KEYS.iter().any(|key| pressed(*key));
    FrameInput { direction, quit }
}

/// Read the keys pressed since the previous frame.
pub fn poll() -> FrameInput {
    frame_input(is_key_pressed)
}
