//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const TRACKED_KEYS: [KeyCode; 29] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::H,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::Space,
    KeyCode::Period,
    KeyCode::Q,
    KeyCode::Escape,
    KeyCode::I,
    KeyCode::E,
    KeyCode::U,
    KeyCode::Enter,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

pub fn capture_frame_input() -> Vec<KeyCode> {
    TRACKED_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect()
}
