//! Output of floor generation, handed to the game for state installation.
//!
//! This module exists to keep generation decoupled from live state: a
//! `GeneratedFloor` is inert data with no entity keys, visibility masks, or
//! turn bookkeeping. It does not own any RNG state.

use crate::types::{ItemKind, Pos, TileKind};

/// Everything an enemy needs before it becomes a live entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemySpawn {
    pub pos: Pos,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpawn {
    pub pos: Pos,
    pub kind: ItemKind,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub spawn: Pos,
    pub stairs: Pos,
    pub enemy_spawns: Vec<EnemySpawn>,
    pub item_spawns: Vec<ItemSpawn>,
}

impl GeneratedFloor {
    /// Out-of-bounds reads as `Wall`, matching the live map's convention.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::Wall;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return TileKind::Wall;
        }
        self.tiles[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_at_treats_out_of_bounds_as_wall() {
        let floor = GeneratedFloor {
            width: 2,
            height: 2,
            tiles: vec![TileKind::Floor; 4],
            spawn: Pos { y: 0, x: 0 },
            stairs: Pos { y: 1, x: 1 },
            enemy_spawns: Vec::new(),
            item_spawns: Vec::new(),
        };
        assert_eq!(floor.tile_at(Pos { y: 0, x: 0 }), TileKind::Floor);
        assert_eq!(floor.tile_at(Pos { y: -1, x: 0 }), TileKind::Wall);
        assert_eq!(floor.tile_at(Pos { y: 0, x: 2 }), TileKind::Wall);
    }
}
