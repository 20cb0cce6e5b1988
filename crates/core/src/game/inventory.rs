//! Pickup effects and the menu-driven inventory mutations.
//!
//! Only swords accumulate in the inventory; potions and powers apply their
//! effect the moment the player steps on them. The menu operations validate
//! their index and kind, failing as a no-op with a message.

use crate::state::{GameState, Item};
use crate::types::{ItemKind, Pos, PowerKind};

/// Picks up the item at `pos`, if any, and applies its effect. Returns the
/// pickup message; `None` means the tile held no item.
pub(crate) fn pickup_at(state: &mut GameState, pos: Pos, hp_ceiling: i32) -> Option<String> {
    let id = state.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)?;
    let item = state.items.remove(id)?;
    let message = match item.kind {
        ItemKind::Sword { bonus } => {
            let line = format!("You pick up the {} (+{bonus} damage).", item.name);
            state.inventory.push(item);
            line
        }
        ItemKind::Potion { heal } => {
            let healed = heal_player(state, heal);
            format!("You drink the {} and recover {healed} HP.", item.name)
        }
        ItemKind::Power { kind, magnitude } => apply_power(state, &item.name, kind, magnitude, hp_ceiling),
    };
    Some(message)
}

fn heal_player(state: &mut GameState, amount: i32) -> i32 {
    let player = &mut state.player;
    let healed = amount.min(player.max_hp - player.hp).max(0);
    player.hp += healed;
    healed
}

fn apply_power(
    state: &mut GameState,
    name: &str,
    kind: PowerKind,
    magnitude: i32,
    hp_ceiling: i32,
) -> String {
    match kind {
        PowerKind::Attack => {
            state.player.attack += magnitude;
            format!("The {name} hardens your blows. Attack +{magnitude}.")
        }
        PowerKind::Health => {
            let player = &mut state.player;
            player.max_hp = (player.max_hp + magnitude).min(hp_ceiling);
            let healed = heal_player(state, magnitude);
            format!("The {name} swells your vitality. Max HP +{magnitude}, recovered {healed}.")
        }
        PowerKind::Defense => {
            state.player.defense += magnitude;
            format!("The {name} toughens your hide. Defense +{magnitude}.")
        }
        PowerKind::Speed => {
            let healed = heal_player(state, magnitude);
            format!("The {name} quickens your blood. You recover {healed} HP.")
        }
    }
}

pub(crate) fn summary(state: &GameState) -> String {
    if state.inventory.is_empty() {
        return "You carry nothing.".to_string();
    }
    let lines: Vec<String> = state
        .inventory
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if state.equipped == Some(index) {
                format!("{} (equipped)", item.name)
            } else {
                item.name.clone()
            }
        })
        .collect();
    format!("You carry: {}.", lines.join(", "))
}

pub(crate) fn equipped_sword_bonus(state: &GameState) -> i32 {
    let Some(item) = state.equipped.and_then(|index| state.inventory.get(index)) else {
        return 0;
    };
    match item.kind {
        ItemKind::Sword { bonus } => bonus,
        _ => 0,
    }
}

pub(crate) fn equip(state: &mut GameState, index: usize) -> String {
    match state.inventory.get(index) {
        None => "There is no such item to equip.".to_string(),
        Some(item) => match item.kind {
            ItemKind::Sword { .. } => {
                let name = item.name.clone();
                state.equipped = Some(index);
                format!("You equip the {name}.")
            }
            _ => format!("You cannot wield the {}.", item.name),
        },
    }
}

pub(crate) fn use_item(state: &mut GameState, index: usize) -> String {
    match state.inventory.get(index) {
        None => "There is no such item to use.".to_string(),
        Some(item) => match item.kind {
            ItemKind::Potion { heal } => {
                let name = item.name.clone();
                remove_and_fix_equipped(state, index);
                let healed = heal_player(state, heal);
                format!("You drink the {name} and recover {healed} HP.")
            }
            _ => format!("The {} is not something you can use.", item.name),
        },
    }
}

pub(crate) fn drop_item(state: &mut GameState, index: usize) -> String {
    if index >= state.inventory.len() {
        return "There is no such item to drop.".to_string();
    }
    let dropped = remove_and_fix_equipped(state, index);
    let name = dropped.name.clone();
    let pos = state.player.pos;
    state.items.insert_with_key(|id| Item { id, pos, kind: dropped.kind, name: dropped.name });
    format!("You drop the {name}.")
}

/// Removes `index` from the inventory and shifts the equipped index so it
/// keeps pointing at the same item, or clears it if that item was removed.
fn remove_and_fix_equipped(state: &mut GameState, index: usize) -> Item {
    let item = state.inventory.remove(index);
    state.equipped = match state.equipped {
        Some(equipped) if equipped == index => None,
        Some(equipped) if equipped > index => Some(equipped - 1),
        other => other,
    };
    item
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;
    use crate::state::{Map, Player};
    use crate::types::TileKind;

    fn bare_state() -> GameState {
        let mut map = Map::new(8, 8);
        for y in 1..7 {
            for x in 1..7 {
                map.set_tile(Pos { y, x }, TileKind::Floor);
            }
        }
        GameState {
            map,
            player: Player::new(Pos { y: 3, x: 3 }),
            enemies: SlotMap::with_key(),
            items: SlotMap::with_key(),
            stairs: Pos { y: 6, x: 6 },
            floor_index: 1,
            inventory: Vec::new(),
            equipped: None,
        }
    }

    fn ground_item(state: &mut GameState, pos: Pos, kind: ItemKind, name: &str) {
        state.items.insert_with_key(|id| Item { id, pos, kind, name: name.to_string() });
    }

    fn carried_sword(state: &mut GameState, bonus: i32, name: &str) -> usize {
        let id = state.items.insert_with_key(|id| Item {
            id,
            pos: state.player.pos,
            kind: ItemKind::Sword { bonus },
            name: name.to_string(),
        });
        let item = state.items.remove(id).unwrap();
        state.inventory.push(item);
        state.inventory.len() - 1
    }

    #[test]
    fn sword_pickup_goes_to_inventory_without_equipping() {
        let mut state = bare_state();
        let pos = Pos { y: 3, x: 4 };
        ground_item(&mut state, pos, ItemKind::Sword { bonus: 3 }, "Rusty Sword");

        let message = pickup_at(&mut state, pos, 50).expect("item present");
        assert!(message.contains("Rusty Sword"));
        assert_eq!(state.inventory.len(), 1);
        assert_eq!(state.equipped, None);
        assert!(state.items.is_empty());
    }

    #[test]
    fn potion_pickup_heals_capped_at_max_hp() {
        let mut state = bare_state();
        state.player.hp = 18;
        let pos = Pos { y: 3, x: 4 };
        ground_item(&mut state, pos, ItemKind::Potion { heal: 5 }, "Healing Potion");

        let message = pickup_at(&mut state, pos, 50).expect("item present");
        assert!(message.contains("recover 2 HP"));
        assert_eq!(state.player.hp, 20);
        assert!(state.inventory.is_empty(), "potions never enter the inventory");
    }

    #[test]
    fn health_power_raises_max_hp_then_heals() {
        let mut state = bare_state();
        state.player.hp = 15;
        let pos = Pos { y: 3, x: 4 };
        ground_item(
            &mut state,
            pos,
            ItemKind::Power { kind: PowerKind::Health, magnitude: 3 },
            "Heartstone",
        );

        pickup_at(&mut state, pos, 50).expect("item present");
        assert_eq!(state.player.max_hp, 23);
        assert_eq!(state.player.hp, 18);
    }

    #[test]
    fn health_power_respects_the_hp_ceiling() {
        let mut state = bare_state();
        state.player.max_hp = 49;
        state.player.hp = 49;
        let pos = Pos { y: 3, x: 4 };
        ground_item(
            &mut state,
            pos,
            ItemKind::Power { kind: PowerKind::Health, magnitude: 3 },
            "Heartstone",
        );

        pickup_at(&mut state, pos, 50).expect("item present");
        assert_eq!(state.player.max_hp, 50);
        assert_eq!(state.player.hp, 50);
    }

    #[test]
    fn attack_and_defense_powers_raise_their_stat() {
        let mut state = bare_state();
        ground_item(
            &mut state,
            Pos { y: 3, x: 4 },
            ItemKind::Power { kind: PowerKind::Attack, magnitude: 1 },
            "Bracer of Strength",
        );
        ground_item(
            &mut state,
            Pos { y: 3, x: 5 },
            ItemKind::Power { kind: PowerKind::Defense, magnitude: 1 },
            "Shield Emblem",
        );

        pickup_at(&mut state, Pos { y: 3, x: 4 }, 50).expect("bracer");
        pickup_at(&mut state, Pos { y: 3, x: 5 }, 50).expect("emblem");
        assert_eq!(state.player.attack, 3);
        assert_eq!(state.player.defense, 1);
    }

    #[test]
    fn pickup_on_an_empty_tile_is_none() {
        let mut state = bare_state();
        assert_eq!(pickup_at(&mut state, Pos { y: 5, x: 5 }, 50), None);
    }

    #[test]
    fn equip_rejects_bad_index_as_a_no_op() {
        let mut state = bare_state();
        let message = equip(&mut state, 0);
        assert!(message.contains("no such item"));
        assert_eq!(state.equipped, None);
    }

    #[test]
    fn equip_selects_a_carried_sword() {
        let mut state = bare_state();
        let index = carried_sword(&mut state, 3, "Rusty Sword");
        let message = equip(&mut state, index);
        assert!(message.contains("equip the Rusty Sword"));
        assert_eq!(state.equipped, Some(index));
        assert_eq!(equipped_sword_bonus(&state), 3);
    }

    #[test]
    fn use_item_refuses_swords() {
        let mut state = bare_state();
        let index = carried_sword(&mut state, 3, "Rusty Sword");
        let message = use_item(&mut state, index);
        assert!(message.contains("not something you can use"));
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn drop_item_places_it_at_the_player_tile() {
        let mut state = bare_state();
        let index = carried_sword(&mut state, 3, "Rusty Sword");
        equip(&mut state, index);

        let message = drop_item(&mut state, index);
        assert!(message.contains("drop the Rusty Sword"));
        assert!(state.inventory.is_empty());
        assert_eq!(state.equipped, None, "equipped clears when the sword leaves");
        assert!(state.items.values().any(|item| item.pos == state.player.pos));
    }

    #[test]
    fn dropping_an_earlier_item_shifts_the_equipped_index() {
        let mut state = bare_state();
        carried_sword(&mut state, 1, "Old Sword");
        let second = carried_sword(&mut state, 3, "Rusty Sword");
        equip(&mut state, second);

        drop_item(&mut state, 0);
        assert_eq!(state.equipped, Some(0));
        assert_eq!(equipped_sword_bonus(&state), 3, "still points at the rusty sword");
    }

    #[test]
    fn summary_marks_the_equipped_item() {
        let mut state = bare_state();
        assert_eq!(summary(&state), "You carry nothing.");
        let index = carried_sword(&mut state, 3, "Rusty Sword");
        equip(&mut state, index);
        assert_eq!(summary(&state), "You carry: Rusty Sword (equipped).");
    }
}
