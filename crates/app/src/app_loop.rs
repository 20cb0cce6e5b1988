//! Frame-level state machine sitting between raw key presses and the
//! turn resolver.
//!
//! `tick` is pure over the keys pressed this frame, so tests drive it with
//! key lists instead of a live window.

use delve_core::{Game, GameError, Intent, SessionEnd};
use macroquad::prelude::KeyCode;

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    /// Inventory overlay; `selected` is the highlighted slot, if any.
    InventoryMenu {
        selected: Option<usize>,
    },
    Finished(SessionEnd),
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    pub exit_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one frame's key presses. At most one intent is resolved per
    /// frame; the only error that can escape is a failed floor generation.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) -> Result<(), GameError> {
        match self.mode {
            AppMode::Playing => {
                if keys_pressed.contains(&KeyCode::I) {
                    // The query refreshes the message line but costs no turn.
                    game.resolve_turn(Intent::InventoryQuery)?;
                    self.mode = AppMode::InventoryMenu { selected: None };
                    return Ok(());
                }
                if let Some(intent) = playing_intent(keys_pressed) {
                    let outcome = game.resolve_turn(intent)?;
                    if let Some(end) = outcome.ended {
                        self.mode = AppMode::Finished(end);
                    }
                }
            }
            AppMode::InventoryMenu { selected } => {
                if keys_pressed.contains(&KeyCode::Escape) || keys_pressed.contains(&KeyCode::I) {
                    self.mode = AppMode::Playing;
                    return Ok(());
                }
                if let Some(slot) = digit_slot(keys_pressed) {
                    self.mode = AppMode::InventoryMenu { selected: Some(slot) };
                    return Ok(());
                }
                if let Some(index) = selected {
                    if keys_pressed.contains(&KeyCode::E) {
                        game.equip(index);
                    } else if keys_pressed.contains(&KeyCode::U) {
                        game.use_item(index);
                    } else if keys_pressed.contains(&KeyCode::D) {
                        game.drop_item(index);
                        self.mode = AppMode::InventoryMenu { selected: None };
                    }
                }
            }
            AppMode::Finished(_) => {
                if keys_pressed.contains(&KeyCode::Enter) {
                    self.exit_requested = true;
                }
            }
        }
        Ok(())
    }
}

/// First matching movement/wait/quit key wins; unbound keys yield nothing.
pub fn playing_intent(keys_pressed: &[KeyCode]) -> Option<Intent> {
    for key in keys_pressed {
        let intent = match key {
            KeyCode::Up | KeyCode::W | KeyCode::K => Intent::Move { dx: 0, dy: -1 },
            KeyCode::Down | KeyCode::S | KeyCode::J => Intent::Move { dx: 0, dy: 1 },
            KeyCode::Left | KeyCode::A | KeyCode::H => Intent::Move { dx: -1, dy: 0 },
            KeyCode::Right | KeyCode::D | KeyCode::L => Intent::Move { dx: 1, dy: 0 },
            KeyCode::Space | KeyCode::Period => Intent::Wait,
            KeyCode::Q | KeyCode::Escape => Intent::Quit,
            _ => continue,
        };
        return Some(intent);
    }
    None
}

fn digit_slot(keys_pressed: &[KeyCode]) -> Option<usize> {
    const DIGITS: [KeyCode; 9] = [
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
    keys_pressed
        .iter()
        .find_map(|key| DIGITS.iter().position(|digit| digit == key))
}
