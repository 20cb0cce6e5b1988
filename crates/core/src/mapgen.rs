//! Procedural floor generation: room placement, tunnel carving, and
//! enemy/item spawn rolls.

pub mod model;

mod layout;
mod spawns;

pub use model::{EnemySpawn, GeneratedFloor, ItemSpawn};

use crate::config::GameConfig;
use crate::rng::GameRng;
use crate::types::{GameError, TileKind};

/// Builds one floor. Rooms are transient: they seed carving, tunnels, and
/// spawn points, then are discarded. Fails only when not a single room could
/// be placed, which the caller must treat as fatal.
pub fn generate(
    config: &GameConfig,
    floor_index: u32,
    rng: &mut GameRng,
) -> Result<GeneratedFloor, GameError> {
    let width = config.map_width;
    let height = config.map_height;
    let mut tiles = vec![TileKind::Wall; width * height];

    let rooms = layout::build_rooms(config, rng);
    if rooms.is_empty() {
        return Err(GameError::GenerationFailed);
    }

    layout::carve_rooms(&mut tiles, width, &rooms);
    layout::carve_tunnels(&mut tiles, width, height, rng, &rooms);

    let spawn = rooms[0].center();
    let stairs = rooms[rooms.len() - 1].center();

    let enemy_spawns = spawns::place_enemies(config, floor_index, &rooms, &tiles, width, spawn, rng);
    let item_spawns = spawns::place_items(config, &rooms, &tiles, width, spawn, &enemy_spawns, rng);

    Ok(GeneratedFloor { width, height, tiles, spawn, stairs, enemy_spawns, item_spawns })
}
