//! ASCII rendering of the dungeon, status lines, and overlays.
//!
//! Glyph and line selection are plain functions over the game snapshot;
//! only the `draw_*` functions touch the window.

use delve_app::app_loop::{AppMode, AppState};
use delve_app::format_seed;
use delve_core::{Game, Pos, SessionEnd, TileKind};
use macroquad::prelude::*;

const CELL_WIDTH: f32 = 10.0;
const CELL_HEIGHT: f32 = 16.0;
const MAP_ORIGIN_X: f32 = 20.0;
const MAP_ORIGIN_Y: f32 = 40.0;
const TEXT_SIZE: f32 = 16.0;
const REMEMBERED_COLOR: Color = Color { r: 0.35, g: 0.35, b: 0.4, a: 1.0 };

/// What one tile renders as. `None` means the tile has never been seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    pub glyph: char,
    pub remembered: bool,
}

/// Draw precedence on a visible tile: player, enemy, item, stairs, terrain.
/// Remembered tiles show dimmed terrain only; everything on top of it is
/// hidden once the tile leaves the field of view.
pub fn cell_view(game: &Game, pos: Pos) -> Option<CellView> {
    let map = &game.state().map;
    if map.is_visible(pos) {
        let glyph = if pos == game.player().pos {
            '@'
        } else if game.enemies().any(|enemy| enemy.pos == pos) {
            'g'
        } else if let Some(item) = game.items().find(|item| item.pos == pos) {
            item.kind.glyph()
        } else if pos == game.stairs() {
            '>'
        } else {
            terrain_glyph(game, pos)
        };
        return Some(CellView { glyph, remembered: false });
    }
    if map.is_explored(pos) {
        return Some(CellView { glyph: remembered_glyph(game.tile_at(pos)), remembered: true });
    }
    None
}

fn terrain_glyph(game: &Game, pos: Pos) -> char {
    match game.tile_at(pos) {
        TileKind::Wall => '#',
        TileKind::Floor => '.',
    }
}

fn remembered_glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Wall => '#',
        TileKind::Floor => ',',
    }
}

pub fn status_line(game: &Game, run_seed: u64) -> String {
    let player = game.player();
    format!(
        "Floor {}  HP {}/{}  ATK {}  DEF {}  Seed {}",
        game.floor_index(),
        player.hp,
        player.max_hp,
        player.attack,
        player.defense,
        format_seed(run_seed),
    )
}

pub fn inventory_lines(game: &Game, selected: Option<usize>) -> Vec<String> {
    let mut lines = vec!["Inventory  (digit=select, E=equip, U=use, D=drop, Esc=close)".to_string()];
    if game.inventory().is_empty() {
        lines.push("  (empty)".to_string());
        return lines;
    }
    for (index, item) in game.inventory().iter().enumerate() {
        let cursor = if selected == Some(index) { '>' } else { ' ' };
        let equipped = if game.equipped() == Some(index) { " (equipped)" } else { "" };
        lines.push(format!("{cursor}{}) {}{equipped}", index + 1, item.name));
    }
    lines
}

pub fn end_lines(game: &Game, end: SessionEnd) -> Vec<String> {
    let recap = match end {
        SessionEnd::Death => format!("You died on floor {}.", game.floor_index()),
        SessionEnd::Quit => format!("You left the dungeon on floor {}.", game.floor_index()),
    };
    vec![recap, "Press Enter to exit.".to_string()]
}

pub fn draw_frame(game: &Game, app_state: &AppState, run_seed: u64) {
    draw_map(game);
    draw_text(game.message(), MAP_ORIGIN_X, MAP_ORIGIN_Y - 18.0, TEXT_SIZE, WHITE);
    let status_y = MAP_ORIGIN_Y + game.state().map.height as f32 * CELL_HEIGHT + 20.0;
    draw_text(&status_line(game, run_seed), MAP_ORIGIN_X, status_y, TEXT_SIZE, WHITE);

    match &app_state.mode {
        AppMode::Playing => {}
        AppMode::InventoryMenu { selected } => {
            draw_lines(&inventory_lines(game, *selected), status_y + 28.0);
        }
        AppMode::Finished(end) => {
            draw_lines(&end_lines(game, *end), status_y + 28.0);
        }
    }
}

fn draw_map(game: &Game) {
    let map = &game.state().map;
    let mut glyph = [0u8; 4];
    for y in 0..map.height as i32 {
        for x in 0..map.width as i32 {
            let pos = Pos { y, x };
            let Some(cell) = cell_view(game, pos) else {
                continue;
            };
            let color = if cell.remembered { REMEMBERED_COLOR } else { WHITE };
            draw_text(
                cell.glyph.encode_utf8(&mut glyph),
                MAP_ORIGIN_X + x as f32 * CELL_WIDTH,
                MAP_ORIGIN_Y + y as f32 * CELL_HEIGHT,
                TEXT_SIZE,
                color,
            );
        }
    }
}

fn draw_lines(lines: &[String], start_y: f32) {
    let mut text_y = start_y;
    for line in lines {
        draw_text(line, MAP_ORIGIN_X, text_y, TEXT_SIZE, WHITE);
        text_y += 18.0;
    }
}
