//! Field-of-view recomputation.
//!
//! Visibility is rebuilt from scratch every turn: a circular sweep of the
//! radius bounding square, one integer-stepped ray per candidate tile. The
//! ray's endpoints are exempt from the wall check, so the origin is always
//! visible and a wall at the edge of sight shows up as a wall.

use crate::state::Map;
use crate::types::{Pos, TileKind};

/// True when no wall lies strictly between `from` and `to` along the
/// Bresenham line connecting them.
pub(crate) fn line_is_clear(map: &Map, from: Pos, to: Pos) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut pos = from;

    loop {
        if pos != from && pos != to && map.tile_at(pos) == TileKind::Wall {
            return false;
        }
        if pos == to {
            return true;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            pos.x += sx;
        }
        if doubled <= dx {
            err += dx;
            pos.y += sy;
        }
    }
}

pub(crate) fn recompute_fov(map: &mut Map, origin: Pos, radius: i32) {
    map.clear_visible();
    let radius_sq = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius_sq {
                continue;
            }
            let target = origin.step(dx, dy);
            if map.in_bounds(target) && line_is_clear(map, origin, target) {
                map.reveal(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_map(width: usize, height: usize) -> Map {
        let mut map = Map::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                map.set_tile(Pos { y, x }, TileKind::Floor);
            }
        }
        map
    }

    #[test]
    fn origin_is_always_visible() {
        let mut map = open_map(9, 9);
        let origin = Pos { y: 4, x: 4 };
        recompute_fov(&mut map, origin, 3);
        assert!(map.is_visible(origin));
    }

    #[test]
    fn fov_is_circular_not_square() {
        let mut map = open_map(21, 21);
        let origin = Pos { y: 10, x: 10 };
        recompute_fov(&mut map, origin, 4);
        assert!(map.is_visible(Pos { y: 10, x: 14 }), "cardinal tile at radius");
        assert!(!map.is_visible(Pos { y: 14, x: 14 }), "corner of the bounding square");
    }

    #[test]
    fn wall_blocks_tiles_behind_it_but_is_itself_visible() {
        let mut map = open_map(11, 3);
        let origin = Pos { y: 1, x: 1 };
        let pillar = Pos { y: 1, x: 4 };
        map.set_tile(pillar, TileKind::Wall);
        recompute_fov(&mut map, origin, 8);

        assert!(map.is_visible(pillar), "endpoint exemption lets walls be seen");
        assert!(!map.is_visible(Pos { y: 1, x: 5 }), "tile directly behind the pillar");
        assert!(!map.is_visible(Pos { y: 1, x: 8 }));
    }

    #[test]
    fn every_visible_tile_has_a_clear_ray_from_origin() {
        let mut map = open_map(15, 15);
        for x in 3..10 {
            map.set_tile(Pos { y: 7, x }, TileKind::Wall);
        }
        let origin = Pos { y: 3, x: 6 };
        recompute_fov(&mut map, origin, 9);

        for y in 0..15_i32 {
            for x in 0..15_i32 {
                let pos = Pos { y, x };
                if map.is_visible(pos) {
                    assert!(line_is_clear(&map, origin, pos), "{pos:?} visible without a ray");
                }
            }
        }
    }

    #[test]
    fn recompute_resets_visible_but_accumulates_explored() {
        let mut map = open_map(30, 5);
        recompute_fov(&mut map, Pos { y: 2, x: 3 }, 3);
        assert!(map.is_visible(Pos { y: 2, x: 5 }));

        recompute_fov(&mut map, Pos { y: 2, x: 25 }, 3);
        assert!(!map.is_visible(Pos { y: 2, x: 5 }), "far tile left the fov");
        assert!(map.is_explored(Pos { y: 2, x: 5 }), "but stays remembered");
    }
}
