//! Per-enemy decision logic for the turn's enemy pass.
//!
//! `decide` is a pure function of the board plus one RNG draw sequence; the
//! resolver applies the chosen action and owns the blocking checks, so an
//! intended step onto an occupied tile simply fizzles.

use crate::game::visibility;
use crate::rng::GameRng;
use crate::state::Map;
use crate::types::Pos;

const WANDER_CHANCE: i32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EnemyAction {
    Attack,
    Step { dx: i32, dy: i32 },
    Stay,
}

/// An enemy chases when it is inside the player's FOV radius, stands on a
/// currently visible tile, and has clear line of sight to the player. The
/// chase step is greedy per axis, so it may be diagonal. Unaware enemies
/// wander one cardinal step (or stay put) a quarter of the time.
pub(crate) fn decide(
    enemy: Pos,
    player: Pos,
    fov_radius: i32,
    map: &Map,
    rng: &mut GameRng,
) -> EnemyAction {
    let aware = enemy.chebyshev(player) <= fov_radius as u32
        && map.is_visible(enemy)
        && visibility::line_is_clear(map, enemy, player);

    if aware {
        let dx = (player.x - enemy.x).signum();
        let dy = (player.y - enemy.y).signum();
        if enemy.step(dx, dy) == player {
            return EnemyAction::Attack;
        }
        return EnemyAction::Step { dx, dy };
    }

    if !rng.percent(WANDER_CHANCE) {
        return EnemyAction::Stay;
    }
    match rng.roll(0, 4) {
        0 => EnemyAction::Step { dx: 0, dy: -1 },
        1 => EnemyAction::Step { dx: 1, dy: 0 },
        2 => EnemyAction::Step { dx: 0, dy: 1 },
        3 => EnemyAction::Step { dx: -1, dy: 0 },
        _ => EnemyAction::Stay,
    }
}
