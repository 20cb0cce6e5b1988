//! Game configuration supplied by the embedding application.

use serde::{Deserialize, Serialize};

use crate::types::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: usize,
    pub map_height: usize,
    /// Room placement attempts per floor; overlapping draws are dropped,
    /// so this is an upper bound on the room count.
    pub max_rooms: usize,
    pub room_min: usize,
    pub room_max: usize,
    pub max_enemies: usize,
    pub potion_count: usize,
    pub fov_radius: i32,
    /// Fixed seed for a reproducible run; `None` means the caller picks one.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 100,
            map_height: 30,
            max_rooms: 14,
            room_min: 5,
            room_max: 12,
            max_enemies: 16,
            potion_count: 6,
            fov_radius: 12,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_min > self.room_max {
            return Err(ConfigError::RoomBoundsInverted {
                room_min: self.room_min,
                room_max: self.room_max,
            });
        }
        if self.max_rooms == 0 {
            return Err(ConfigError::NoRoomBudget);
        }
        if self.room_min < 2 {
            return Err(ConfigError::RoomTooSmall);
        }
        if self.fov_radius < 1 {
            return Err(ConfigError::ZeroFovRadius);
        }
        // The smallest room must fit with a 1-tile border on both sides.
        if self.map_width < self.room_min + 3 || self.map_height < self.room_min + 3 {
            return Err(ConfigError::MapTooSmall {
                width: self.map_width,
                height: self.map_height,
                room_min: self.room_min,
            });
        }
        Ok(())
    }
}
