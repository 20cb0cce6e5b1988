//! Enemy and item placement rolls for a freshly carved floor.

use super::layout::RoomRect;
use super::model::{EnemySpawn, ItemSpawn};
use crate::config::GameConfig;
use crate::rng::GameRng;
use crate::types::{ItemKind, Pos, PowerKind, TileKind};

fn random_point_in(room: &RoomRect, rng: &mut GameRng) -> Pos {
    Pos { y: rng.roll(room.y1, room.y2 - 1), x: rng.roll(room.x1, room.x2 - 1) }
}

fn is_floor(tiles: &[TileKind], width: usize, pos: Pos) -> bool {
    tiles[pos.y as usize * width + pos.x as usize] == TileKind::Floor
}

/// Rolls `min(max_enemies, 8 + 2 per extra floor)` placements. A draw landing
/// on the player spawn or another enemy is dropped, not retried, so the final
/// roster can be smaller than the attempt count.
pub(super) fn place_enemies(
    config: &GameConfig,
    floor_index: u32,
    rooms: &[RoomRect],
    tiles: &[TileKind],
    width: usize,
    player_spawn: Pos,
    rng: &mut GameRng,
) -> Vec<EnemySpawn> {
    let depth = floor_index.saturating_sub(1) as i32;
    let attempts = config.max_enemies.min(8 + 2 * depth as usize);
    let mut spawns: Vec<EnemySpawn> = Vec::new();

    for _ in 0..attempts {
        let room = &rooms[rng.roll_usize(0, rooms.len() - 1)];
        let pos = random_point_in(room, rng);
        let hp = 4 + depth;
        let attack = 1 + rng.roll(0, 2) + depth / 2;
        let defense = rng.roll(0, 1) + depth / 4;
        if !is_floor(tiles, width, pos)
            || pos == player_spawn
            || spawns.iter().any(|spawn| spawn.pos == pos)
        {
            continue;
        }
        spawns.push(EnemySpawn { pos, hp, attack, defense, name: "Goblin".to_string() });
    }

    spawns
}

/// One sword, a configurable number of potions, and one power of each kind.
/// Swords block movement once on the ground, so a sword draw that lands on
/// the player spawn or an enemy is dropped outright.
pub(super) fn place_items(
    config: &GameConfig,
    rooms: &[RoomRect],
    tiles: &[TileKind],
    width: usize,
    player_spawn: Pos,
    enemy_spawns: &[EnemySpawn],
    rng: &mut GameRng,
) -> Vec<ItemSpawn> {
    let mut spawns: Vec<ItemSpawn> = Vec::new();

    let mut place = |kind: ItemKind, name: &str, spawns: &mut Vec<ItemSpawn>, rng: &mut GameRng| {
        let room = &rooms[rng.roll_usize(0, rooms.len() - 1)];
        let pos = random_point_in(room, rng);
        if !is_floor(tiles, width, pos)
            || pos == player_spawn
            || enemy_spawns.iter().any(|enemy| enemy.pos == pos)
            || spawns.iter().any(|item| item.pos == pos)
        {
            return;
        }
        spawns.push(ItemSpawn { pos, kind, name: name.to_string() });
    };

    place(ItemKind::Sword { bonus: 3 }, "Rusty Sword", &mut spawns, rng);
    for _ in 0..config.potion_count {
        place(ItemKind::Potion { heal: 5 }, "Healing Potion", &mut spawns, rng);
    }
    place(
        ItemKind::Power { kind: PowerKind::Attack, magnitude: 1 },
        "Bracer of Strength",
        &mut spawns,
        rng,
    );
    place(ItemKind::Power { kind: PowerKind::Health, magnitude: 3 }, "Heartstone", &mut spawns, rng);
    place(
        ItemKind::Power { kind: PowerKind::Defense, magnitude: 1 },
        "Shield Emblem",
        &mut spawns,
        rng,
    );
    place(
        ItemKind::Power { kind: PowerKind::Speed, magnitude: 2 },
        "Wind Talisman",
        &mut spawns,
        rng,
    );

    spawns
}
