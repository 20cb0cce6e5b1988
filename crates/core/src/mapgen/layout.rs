//! Room placement and corridor carving.

use crate::config::GameConfig;
use crate::rng::GameRng;
use crate::types::{Pos, TileKind};

/// Half-open rectangle: interior tiles span `x1..x2` by `y1..y2`, and the
/// outer edge stays wall so adjacent rooms keep a shared border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RoomRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RoomRect {
    pub(super) fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x1: x, y1: y, x2: x + w, y2: y + h }
    }

    pub(super) fn center(&self) -> Pos {
        Pos { y: (self.y1 + self.y2) / 2, x: (self.x1 + self.x2) / 2 }
    }

    /// Inclusive overlap test, so rooms whose edges merely touch still count
    /// as intersecting and keep at least one wall tile between interiors.
    pub(super) fn intersects(&self, other: &RoomRect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Draws up to `max_rooms` candidate rooms, dropping any that would overlap
/// an already accepted room. The result can be empty when nothing fits.
pub(super) fn build_rooms(config: &GameConfig, rng: &mut GameRng) -> Vec<RoomRect> {
    let width = config.map_width as i32;
    let height = config.map_height as i32;
    let mut rooms: Vec<RoomRect> = Vec::new();

    for _ in 0..config.max_rooms {
        let w = rng.roll(config.room_min as i32, config.room_max as i32);
        let h = rng.roll(config.room_min as i32, config.room_max as i32);
        if w > width - 3 || h > height - 3 {
            continue;
        }
        let x = rng.roll(1, width - w - 2);
        let y = rng.roll(1, height - h - 2);
        let candidate = RoomRect::new(x, y, w, h);
        if rooms.iter().any(|room| candidate.intersects(room)) {
            continue;
        }
        rooms.push(candidate);
    }

    rooms
}

pub(super) fn carve_rooms(tiles: &mut [TileKind], width: usize, rooms: &[RoomRect]) {
    for room in rooms {
        for y in room.y1..room.y2 {
            for x in room.x1..room.x2 {
                tiles[y as usize * width + x as usize] = TileKind::Floor;
            }
        }
    }
}

/// Connects each room center to the previous one with an L-shaped tunnel.
/// A coin flip picks whether the horizontal or vertical leg comes first.
pub(super) fn carve_tunnels(
    tiles: &mut [TileKind],
    width: usize,
    height: usize,
    rng: &mut GameRng,
    rooms: &[RoomRect],
) {
    for pair in rooms.windows(2) {
        let prev = pair[0].center();
        let curr = pair[1].center();
        if rng.coin_flip() {
            carve_h(tiles, width, height, prev.x, curr.x, prev.y);
            carve_v(tiles, width, height, prev.y, curr.y, curr.x);
        } else {
            carve_v(tiles, width, height, prev.y, curr.y, prev.x);
            carve_h(tiles, width, height, prev.x, curr.x, curr.y);
        }
    }
}

fn carve_h(tiles: &mut [TileKind], width: usize, height: usize, x1: i32, x2: i32, y: i32) {
    if y < 0 || y as usize >= height {
        return;
    }
    for x in x1.min(x2)..=x1.max(x2) {
        if x >= 0 && (x as usize) < width {
            tiles[y as usize * width + x as usize] = TileKind::Floor;
        }
    }
}

fn carve_v(tiles: &mut [TileKind], width: usize, height: usize, y1: i32, y2: i32, x: i32) {
    if x < 0 || x as usize >= width {
        return;
    }
    for y in y1.min(y2)..=y1.max(y2) {
        if y >= 0 && (y as usize) < height {
            tiles[y as usize * width + x as usize] = TileKind::Floor;
        }
    }
}
