//! The turn resolver.
//!
//! One call to [`Game::resolve_turn`] consumes exactly one player intent,
//! then runs a full enemy pass, then recomputes visibility, in that fixed
//! order. All randomness flows through the single seeded stream owned here,
//! so a seed plus an intent script replays a whole session.

mod combat;
mod enemy_ai;
mod floor_transition;
mod inventory;
#[cfg(test)]
pub(crate) mod test_support;
mod visibility;

use crate::config::GameConfig;
use crate::mapgen;
use crate::rng::GameRng;
use crate::state::{Enemy, GameState, Item, Player};
use crate::types::{
    CombatReport, EnemyId, GameError, Intent, ItemKind, Pos, SessionEnd, TileKind, TurnOutcome,
};
use enemy_ai::EnemyAction;
use floor_transition::HP_CEILING;

pub struct Game {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    message: String,
    last_combat: Option<CombatReport>,
    ended: Option<SessionEnd>,
}

impl Game {
    /// Validates the config, generates floor 1, and lights the spawn room.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = GameRng::seed_from_u64(seed);
        let generated = mapgen::generate(&config, 1, &mut rng)?;
        let mut state = floor_transition::build_state(generated, 1);
        visibility::recompute_fov(&mut state.map, state.player.pos, config.fov_radius);
        Ok(Self {
            config,
            rng,
            state,
            message: "You descend into the dungeon.".to_string(),
            last_combat: None,
            ended: None,
        })
    }

    /// Resolves one player intent. Move and Wait consume a turn and trigger
    /// the enemy pass; Quit and InventoryQuery do not. Calling this after
    /// the session has ended is an error.
    pub fn resolve_turn(&mut self, intent: Intent) -> Result<TurnOutcome, GameError> {
        if self.ended.is_some() {
            return Err(GameError::SessionOver);
        }
        self.message.clear();
        self.last_combat = None;

        match intent {
            Intent::Quit => {
                self.ended = Some(SessionEnd::Quit);
                self.push_line("You abandon the delve.".to_string());
                return Ok(self.outcome());
            }
            Intent::InventoryQuery => {
                self.push_line(inventory::summary(&self.state));
                return Ok(self.outcome());
            }
            Intent::Wait => {
                self.push_line("You hold your ground.".to_string());
                self.enemy_pass();
            }
            Intent::Move { dx, dy } => {
                if dx.abs() > 1 || dy.abs() > 1 || (dx != 0 && dy != 0) {
                    self.push_line("You cannot move that way.".to_string());
                    return Ok(self.outcome());
                }
                if dx == 0 && dy == 0 {
                    self.push_line("You hold your ground.".to_string());
                    self.enemy_pass();
                } else {
                    let descended = self.resolve_move(dx, dy)?;
                    if !descended {
                        self.enemy_pass();
                    }
                }
            }
        }

        visibility::recompute_fov(&mut self.state.map, self.state.player.pos, self.config.fov_radius);
        if !self.state.player.is_alive() {
            self.ended = Some(SessionEnd::Death);
        }
        Ok(self.outcome())
    }

    /// Priority order: edge, wall, enemy, item, stairs, open floor.
    /// Returns true when the move triggered a floor transition.
    fn resolve_move(&mut self, dx: i32, dy: i32) -> Result<bool, GameError> {
        let target = self.state.player.pos.step(dx, dy);
        if !self.state.map.in_bounds(target) {
            self.push_line("You bump into the edge of the map.".to_string());
            return Ok(false);
        }
        if self.state.map.tile_at(target) == TileKind::Wall {
            self.push_line("You bump into a wall.".to_string());
            return Ok(false);
        }
        if let Some(enemy_id) = self.enemy_at(target) {
            self.player_attacks(enemy_id);
            return Ok(false);
        }
        if let Some(message) = inventory::pickup_at(&mut self.state, target, HP_CEILING) {
            self.push_line(message);
            // Stacked drops can leave another item behind; only step onto
            // the tile once nothing remains on it.
            if self.state.items.values().all(|item| item.pos != target) {
                self.state.player.pos = target;
            }
            return Ok(false);
        }
        if target == self.state.stairs {
            floor_transition::descend(&self.config, &mut self.state, &mut self.rng)?;
            self.push_line(format!("You take the stairs down to floor {}.", self.state.floor_index));
            return Ok(true);
        }
        self.state.player.pos = target;
        Ok(false)
    }

    fn player_attacks(&mut self, enemy_id: EnemyId) {
        let bonus = inventory::equipped_sword_bonus(&self.state);
        let defense = self.state.enemies[enemy_id].defense;
        let roll = combat::roll_attack(self.state.player.attack, bonus, defense, &mut self.rng);
        let name = self.state.enemies[enemy_id].name.clone();

        if !roll.hit {
            self.push_line(format!("You miss the {name}."));
            self.report_combat("you", &name, roll, false);
            return;
        }
        let enemy = &mut self.state.enemies[enemy_id];
        enemy.hp -= roll.damage;
        let slain = enemy.hp <= 0;
        if slain {
            self.state.enemies.remove(enemy_id);
        }
        let mut line = if roll.crit {
            format!("You critically hit the {name} for {} damage!", roll.damage)
        } else {
            format!("You hit the {name} for {} damage.", roll.damage)
        };
        if slain {
            line.push_str(&format!(" The {name} dies."));
        }
        self.push_line(line);
        self.report_combat("you", &name, roll, slain);
    }

    fn enemy_attacks(&mut self, enemy_id: EnemyId) {
        let (attack, name) = {
            let enemy = &self.state.enemies[enemy_id];
            (enemy.attack, enemy.name.clone())
        };
        let roll = combat::roll_attack(attack, 0, self.state.player.defense, &mut self.rng);

        if !roll.hit {
            self.push_line(format!("The {name} misses you."));
            self.report_combat(&name, "you", roll, false);
            return;
        }
        self.state.player.hp -= roll.damage;
        let slain = !self.state.player.is_alive();
        let line = if slain {
            format!("The {name} strikes you down.")
        } else if roll.crit {
            format!("The {name} critically hits you for {} damage!", roll.damage)
        } else {
            format!("The {name} hits you for {} damage.", roll.damage)
        };
        self.push_line(line);
        self.report_combat(&name, "you", roll, slain);
    }

    /// Every live enemy acts once, in roster order. The pass stops early if
    /// the player dies partway through.
    fn enemy_pass(&mut self) {
        let ids: Vec<EnemyId> = self.state.enemies.keys().collect();
        for id in ids {
            if !self.state.player.is_alive() {
                break;
            }
            let Some(enemy) = self.state.enemies.get(id) else {
                continue;
            };
            let pos = enemy.pos;
            let action = enemy_ai::decide(
                pos,
                self.state.player.pos,
                self.config.fov_radius,
                &self.state.map,
                &mut self.rng,
            );
            match action {
                EnemyAction::Attack => self.enemy_attacks(id),
                EnemyAction::Step { dx, dy } => {
                    let dest = pos.step(dx, dy);
                    if !self.is_blocked(dest) {
                        self.state.enemies[id].pos = dest;
                    }
                }
                EnemyAction::Stay => {}
            }
        }
    }

    /// Blocking rule shared by all entity movement: walls, the player,
    /// other enemies, and swords lying on the ground.
    pub(crate) fn is_blocked(&self, pos: Pos) -> bool {
        if self.state.map.tile_at(pos) == TileKind::Wall {
            return true;
        }
        if pos == self.state.player.pos {
            return true;
        }
        if self.enemy_at(pos).is_some() {
            return true;
        }
        self.state
            .items
            .values()
            .any(|item| item.pos == pos && matches!(item.kind, ItemKind::Sword { .. }))
    }

    fn enemy_at(&self, pos: Pos) -> Option<EnemyId> {
        self.state.enemies.iter().find(|(_, enemy)| enemy.pos == pos).map(|(id, _)| id)
    }

    fn push_line(&mut self, line: String) {
        if self.message.is_empty() {
            self.message = line;
        } else {
            self.message.push(' ');
            self.message.push_str(&line);
        }
    }

    fn report_combat(&mut self, attacker: &str, defender: &str, roll: combat::AttackRoll, slain: bool) {
        self.last_combat = Some(CombatReport {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            hit: roll.hit,
            crit: roll.crit,
            damage: roll.damage,
            slain,
        });
    }

    fn outcome(&self) -> TurnOutcome {
        TurnOutcome {
            message: self.message.clone(),
            combat: self.last_combat.clone(),
            visible: self.state.map.visible.clone(),
            explored: self.state.map.explored.clone(),
            ended: self.ended,
        }
    }

    // Menu-driven inventory mutations. These never consume a turn; each
    // validates its index and fails as a no-op with a message.

    pub fn equip(&mut self, index: usize) -> String {
        let message = inventory::equip(&mut self.state, index);
        self.message = message.clone();
        message
    }

    pub fn use_item(&mut self, index: usize) -> String {
        let message = inventory::use_item(&mut self.state, index);
        self.message = message.clone();
        message
    }

    pub fn drop_item(&mut self, index: usize) -> String {
        let message = inventory::drop_item(&mut self.state, index);
        self.message = message.clone();
        message
    }

    // Read-only snapshot accessors for the view layer.

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.state.map.tile_at(pos)
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.state.enemies.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.state.items.values()
    }

    pub fn inventory(&self) -> &[Item] {
        &self.state.inventory
    }

    pub fn equipped(&self) -> Option<usize> {
        self.state.equipped
    }

    pub fn floor_index(&self) -> u32 {
        self.state.floor_index
    }

    pub fn stairs(&self) -> Pos {
        self.state.stairs
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn last_combat(&self) -> Option<&CombatReport> {
        self.last_combat.as_ref()
    }

    pub fn ended(&self) -> Option<SessionEnd> {
        self.ended
    }

    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }
}

#[cfg(test)]
impl Game {
    pub(crate) fn from_parts(config: GameConfig, seed: u64, state: GameState) -> Self {
        let mut game = Self {
            config,
            rng: GameRng::seed_from_u64(seed),
            state,
            message: String::new(),
            last_combat: None,
            ended: None,
        };
        visibility::recompute_fov(
            &mut game.state.map,
            game.state.player.pos,
            game.config.fov_radius,
        );
        game
    }

    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
