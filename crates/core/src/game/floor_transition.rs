//! Turning generated floors into live state, and moving between floors.

use slotmap::SlotMap;

use crate::config::GameConfig;
use crate::mapgen::{self, GeneratedFloor};
use crate::rng::GameRng;
use crate::state::{Enemy, GameState, Item, Map, Player};
use crate::types::{EnemyId, GameError, ItemId};

/// Hard cap on player max HP, across descents and Health powers alike.
pub(crate) const HP_CEILING: i32 = 50;

const DESCEND_MAX_HP_GAIN: i32 = 2;
const DESCEND_HEAL: i32 = 8;

/// Builds a fresh session state for floor 1.
pub(crate) fn build_state(generated: GeneratedFloor, floor_index: u32) -> GameState {
    let spawn = generated.spawn;
    let stairs = generated.stairs;
    let (map, enemies, items) = install(generated);
    GameState {
        map,
        player: Player::new(spawn),
        enemies,
        items,
        stairs,
        floor_index,
        inventory: Vec::new(),
        equipped: None,
    }
}

/// Generates the next floor and swaps it in. The player keeps stats,
/// inventory, and equipment, gains a little max HP, and heals; the old
/// floor's rosters and masks are discarded wholesale. HP is only granted
/// after generation succeeds, so a failed descent leaves state untouched.
pub(crate) fn descend(
    config: &GameConfig,
    state: &mut GameState,
    rng: &mut GameRng,
) -> Result<(), GameError> {
    let next = state.floor_index + 1;
    let generated = mapgen::generate(config, next, rng)?;

    let player = &mut state.player;
    player.max_hp = (player.max_hp + DESCEND_MAX_HP_GAIN).min(HP_CEILING);
    player.hp = (player.hp + DESCEND_HEAL).min(player.max_hp);
    player.pos = generated.spawn;

    state.stairs = generated.stairs;
    state.floor_index = next;
    let (map, enemies, items) = install(generated);
    state.map = map;
    state.enemies = enemies;
    state.items = items;
    Ok(())
}

fn install(generated: GeneratedFloor) -> (Map, SlotMap<EnemyId, Enemy>, SlotMap<ItemId, Item>) {
    let mut map = Map::new(generated.width, generated.height);
    map.tiles = generated.tiles;

    let mut enemies = SlotMap::with_key();
    for spawn in generated.enemy_spawns {
        enemies.insert_with_key(|id| Enemy {
            id,
            pos: spawn.pos,
            hp: spawn.hp,
            max_hp: spawn.hp,
            attack: spawn.attack,
            defense: spawn.defense,
            name: spawn.name,
        });
    }

    let mut items = SlotMap::with_key();
    for spawn in generated.item_spawns {
        items.insert_with_key(|id| Item { id, pos: spawn.pos, kind: spawn.kind, name: spawn.name });
    }

    (map, enemies, items)
}
