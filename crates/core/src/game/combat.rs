//! Shared attack resolution used for both sides of combat.
//!
//! The formula is symmetric; the only asymmetry is the sword bonus the
//! player feeds in through `weapon_bonus`. Draw order per attack is fixed at
//! to-hit, damage, crit, so a seeded run replays exactly.

use crate::rng::GameRng;

const BASE_HIT_CHANCE: i32 = 75;
const HIT_CHANCE_PER_POINT: i32 = 5;
const CRIT_CHANCE: i32 = 7;
const CRIT_MULTIPLIER: f64 = 1.8;

pub(crate) fn hit_chance(attack: i32, defense: i32) -> i32 {
    (BASE_HIT_CHANCE + (attack - defense) * HIT_CHANCE_PER_POINT).clamp(25, 95)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AttackRoll {
    pub hit: bool,
    pub crit: bool,
    pub damage: i32,
}

pub(crate) fn roll_attack(
    attack: i32,
    weapon_bonus: i32,
    defense: i32,
    rng: &mut GameRng,
) -> AttackRoll {
    if rng.roll(1, 100) > hit_chance(attack, defense) {
        return AttackRoll { hit: false, crit: false, damage: 0 };
    }
    let mut damage = rng.roll(1, 4) + (attack - 1).max(0) + weapon_bonus;
    let crit = rng.percent(CRIT_CHANCE);
    if crit {
        damage = (f64::from(damage) * CRIT_MULTIPLIER) as i32 + 1;
    }
    AttackRoll { hit: true, crit, damage: (damage - defense).max(0) }
}
