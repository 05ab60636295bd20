//! Plain-text rendering of a session.

use std::fmt::Write;

use realm_core::{EnemyKind, GameState, ItemKind, Mode, Position, Tile};
use realm_runtime::MessageLog;

/// Tiles shown left and right of the player.
pub const VIEW_RADIUS_X: i32 = 7;
/// Tiles shown above and below the player.
pub const VIEW_RADIUS_Y: i32 = 5;

pub fn tile_glyph(tile: Tile) -> char {
    match tile {
        Tile::Grass => '.',
        Tile::Water => '~',
        Tile::Wall => '#',
        Tile::Floor => '_',
        Tile::Tree => 'T',
        Tile::Path => ':',
        Tile::Castle => 'C',
        Tile::Village => 'v',
        Tile::Dungeon => 'D',
    }
}

pub fn enemy_glyph(kind: EnemyKind) -> char {
    match kind {
        EnemyKind::Slime => 's',
        EnemyKind::Skeleton => 'k',
        EnemyKind::Orc => 'o',
        EnemyKind::DarkMage => 'm',
    }
}

fn item_glyph(kind: ItemKind) -> char {
    match kind {
        ItemKind::Potion => '!',
    }
}

/// Glyph for one map cell; actors are drawn over items over terrain.
fn cell(state: &GameState, position: Position) -> char {
    if position == state.player.position {
        return '@';
    }
    if let Some(index) = state.npc_at(position) {
        return state.npcs[index]
            .name
            .chars()
            .next()
            .map_or('&', |c| c.to_ascii_uppercase());
    }
    if let Some(index) = state.living_enemy_at(position) {
        return enemy_glyph(state.enemies[index].kind);
    }
    if let Some(item) = state.items_at(position).next() {
        return item_glyph(item.kind);
    }
    state.tile(position).map_or(' ', tile_glyph)
}

/// The map window centered on the player.
pub fn view(state: &GameState) -> String {
    let center = state.player.position;
    let mut out = String::new();
    for dy in -VIEW_RADIUS_Y..=VIEW_RADIUS_Y {
        for dx in -VIEW_RADIUS_X..=VIEW_RADIUS_X {
            out.push(cell(state, Position::new(center.x + dx, center.y + dy)));
        }
        out.push('\n');
    }
    out
}

pub fn status_line(state: &GameState) -> String {
    let player = &state.player;
    format!(
        "HP {}  Lv {}  Exp {}  Gold {}  Potions {}  {}",
        player.hp,
        player.level,
        player.exp,
        player.gold,
        player.inventory.count(ItemKind::Potion),
        player.position,
    )
}

/// Full screen: map, status, dialogue or prompt hint, and the message log.
pub fn screen(state: &GameState, log: &MessageLog) -> String {
    let mut out = view(state);
    out.push_str(&status_line(state));
    out.push('\n');

    match state.mode {
        Mode::Dialogue => {
            if let Some((npc, line)) = state.dialogue_line() {
                let _ = writeln!(out, "[{}] {}", npc.name, line);
                out.push_str("(press enter to continue)\n");
            }
        }
        Mode::Defeated => out.push_str("You have fallen. Type r to rise again.\n"),
        Mode::Exploring => {
            if let Some(index) = state.adjacent_npc() {
                let _ = writeln!(out, "? {} is nearby (e to talk)", state.npcs[index].name);
            }
        }
    }

    out.push_str("---\n");
    for message in log.iter() {
        out.push_str(message);
        out.push('\n');
    }
    out
}
