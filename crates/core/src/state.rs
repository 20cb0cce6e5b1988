//! Mutable game state: the floor map with its visibility masks, the player,
//! and the per-floor enemy and item rosters.

use slotmap::SlotMap;

use crate::types::{EnemyId, ItemId, ItemKind, Pos, TileKind};

#[derive(Clone)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    /// Recomputed from scratch every turn.
    pub visible: Vec<bool>,
    /// Monotonic union of everything ever visible; lives and dies with the floor.
    pub explored: Vec<bool>,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds reads as `Wall` so callers never index past the grid.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    /// Marks a tile visible this turn and remembered for the floor's lifetime.
    pub fn reveal(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.visible[idx] = true;
        self.explored[idx] = true;
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos, hp: 20, max_hp: 20, attack: 2, defense: 0 }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct Item {
    pub id: ItemId,
    pub pos: Pos,
    pub kind: ItemKind,
    pub name: String,
}

pub struct GameState {
    pub map: Map,
    pub player: Player,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub items: SlotMap<ItemId, Item>,
    pub stairs: Pos,
    pub floor_index: u32,
    /// Carried swords; potions and powers are consumed on pickup.
    pub inventory: Vec<Item>,
    /// Index into `inventory`; must be `None` whenever the inventory is empty.
    pub equipped: Option<usize>,
}
