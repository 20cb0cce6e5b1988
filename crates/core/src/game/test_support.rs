//! Hand-built fixtures for resolver tests: a small walled arena with
//! entities and items placed exactly where a test needs them.

use slotmap::SlotMap;

use crate::config::GameConfig;
use crate::game::Game;
use crate::state::{Enemy, GameState, Item, Map, Player};
use crate::types::{EnemyId, ItemId, ItemKind, Pos, TileKind};

/// Walled rectangle with a fully carved interior. Stairs default to the
/// far corner so they stay out of the way unless a test moves them.
pub(crate) fn open_state(width: usize, height: usize, player: Pos) -> GameState {
    let mut map = Map::new(width, height);
    for y in 1..height as i32 - 1 {
        for x in 1..width as i32 - 1 {
            map.set_tile(Pos { y, x }, TileKind::Floor);
        }
    }
    GameState {
        map,
        player: Player::new(player),
        enemies: SlotMap::with_key(),
        items: SlotMap::with_key(),
        stairs: Pos { y: height as i32 - 2, x: width as i32 - 2 },
        floor_index: 1,
        inventory: Vec::new(),
        equipped: None,
    }
}

pub(crate) fn add_enemy(
    state: &mut GameState,
    pos: Pos,
    hp: i32,
    attack: i32,
    defense: i32,
) -> EnemyId {
    state.enemies.insert_with_key(|id| Enemy {
        id,
        pos,
        hp,
        max_hp: hp,
        attack,
        defense,
        name: "Goblin".to_string(),
    })
}

pub(crate) fn add_item(state: &mut GameState, pos: Pos, kind: ItemKind, name: &str) -> ItemId {
    state.items.insert_with_key(|id| Item { id, pos, kind, name: name.to_string() })
}

pub(crate) fn arena_game(seed: u64, state: GameState) -> Game {
    Game::from_parts(GameConfig::default(), seed, state)
}
