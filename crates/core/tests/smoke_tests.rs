//! Seeded end-to-end runs through the public API.

use delve_core::{Game, GameConfig, GameError, Intent, SessionEnd};

const SCRIPT: &[Intent] = &[
    Intent::Move { dx: 1, dy: 0 },
    Intent::Move { dx: 1, dy: 0 },
    Intent::Move { dx: 0, dy: 1 },
    Intent::Wait,
    Intent::Move { dx: -1, dy: 0 },
    Intent::Move { dx: 0, dy: -1 },
    Intent::InventoryQuery,
    Intent::Move { dx: 1, dy: 0 },
    Intent::Wait,
    Intent::Move { dx: 0, dy: 1 },
];

fn run_script(seed: u64) -> Vec<String> {
    let mut game = Game::new(GameConfig::default(), seed).expect("game starts");
    let mut messages = Vec::new();
    for intent in SCRIPT {
        if game.is_over() {
            break;
        }
        let outcome = game.resolve_turn(*intent).expect("session is live");
        messages.push(outcome.message);
    }
    messages
}

#[test]
fn identical_seeds_replay_identically() {
    assert_eq!(run_script(99), run_script(99));
    assert_eq!(run_script(1234), run_script(1234));
}

#[test]
fn session_invariants_hold_across_many_seeds_and_turns() {
    for seed in 0..25_u64 {
        let mut game = Game::new(GameConfig::default(), seed).expect("game starts");
        let mut explored_count = 0_usize;
        let start_floor = game.floor_index();

        for step in 0..120_usize {
            if game.is_over() {
                break;
            }
            let intent = match step % 6 {
                0 | 1 => Intent::Move { dx: 1, dy: 0 },
                2 => Intent::Move { dx: 0, dy: 1 },
                3 => Intent::Wait,
                4 => Intent::Move { dx: -1, dy: 0 },
                _ => Intent::Move { dx: 0, dy: -1 },
            };
            let floor_before = game.floor_index();
            let outcome = game.resolve_turn(intent).expect("session is live");

            let player = game.player();
            assert!(player.hp <= player.max_hp, "seed {seed}: hp over max");
            assert!(player.max_hp <= 50, "seed {seed}: max hp over the ceiling");
            if game.inventory().is_empty() {
                assert_eq!(game.equipped(), None, "seed {seed}: equipped without inventory");
            }

            let now_explored = outcome.explored.iter().filter(|e| **e).count();
            if game.floor_index() == floor_before {
                assert!(
                    now_explored >= explored_count,
                    "seed {seed}: explored shrank within a floor"
                );
                explored_count = now_explored;
            } else {
                explored_count = 0;
            }
        }
        assert!(game.floor_index() >= start_floor);
    }
}

#[test]
fn quit_ends_the_session_for_good() {
    let mut game = Game::new(GameConfig::default(), 7).expect("game starts");
    let outcome = game.resolve_turn(Intent::Quit).expect("quit resolves");
    assert_eq!(outcome.ended, Some(SessionEnd::Quit));
    assert_eq!(game.resolve_turn(Intent::Wait), Err(GameError::SessionOver));
    assert_eq!(game.resolve_turn(Intent::Quit), Err(GameError::SessionOver));
}

#[test]
fn invalid_config_surfaces_as_invalid_config() {
    let config = GameConfig { fov_radius: 0, ..GameConfig::default() };
    assert!(matches!(Game::new(config, 1), Err(GameError::InvalidConfig(_))));
}

#[test]
fn single_room_config_starts_on_the_stairs() {
    let config = GameConfig {
        map_width: 20,
        map_height: 10,
        max_rooms: 1,
        room_min: 4,
        room_max: 6,
        ..GameConfig::default()
    };
    let game = Game::new(config, 5).expect("degenerate floor still starts");
    assert_eq!(game.player().pos, game.stairs());
}
