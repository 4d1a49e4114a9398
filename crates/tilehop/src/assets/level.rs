//! Text levels.
//!
//! One line per row, one character per column. A legend maps characters to
//! tile kinds or to entity spawns. Space is always an empty cell and short
//! lines are padded with empty cells, so sparse levels need no padding.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::registry::SpriteRegistry;
use crate::components::tilemap::{Tile, TileId, TileMap};
use crate::core::geometry::Size;
use crate::error::{EngineError, LevelError};

/// Largest accepted width or height, in cells.
pub const MAX_DIMENSION: usize = 1 << 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub kind: String,
    /// Sprite name in the manifest.
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub solid: bool,
    /// Animation name in the manifest, for animated tiles.
    #[serde(default)]
    pub animation: Option<String>,
}

/// Character legend for level text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelLegend {
    pub tiles: HashMap<char, TileDescriptor>,
    /// Character → entity kind, e.g. 'g' → "goomba".
    pub spawns: HashMap<char, String>,
}

impl LevelLegend {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where an entity of `kind` starts: the top-left corner of its cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawn {
    pub kind: String,
    pub pos: Vec2,
}

#[derive(Debug)]
pub struct Level {
    pub tiles: TileMap,
    pub spawns: Vec<Spawn>,
}

impl Level {
    pub fn parse(
        text: &str,
        legend: &LevelLegend,
        tile_size: Size,
        registry: &SpriteRegistry,
    ) -> Result<Level, LevelError> {
        let lines: Vec<&str> = text
            .trim_end()
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let rows = lines.len();
        let columns = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if rows == 0 || columns == 0 {
            return Err(LevelError::Empty);
        }
        if rows > MAX_DIMENSION || columns > MAX_DIMENSION {
            return Err(LevelError::TooLarge { columns, rows });
        }

        let mut tiles = TileMap::new(columns as u32, rows as u32, tile_size);
        let mut ids: HashMap<char, TileId> = HashMap::new();
        for (&symbol, desc) in &legend.tiles {
            ids.insert(symbol, tiles.define(build_tile(desc, registry))?);
        }

        let mut spawns = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                if symbol == ' ' {
                    continue;
                }
                if let Some(&id) = ids.get(&symbol) {
                    tiles.set(col as i32, row as i32, Some(id));
                } else if let Some(kind) = legend.spawns.get(&symbol) {
                    spawns.push(Spawn {
                        kind: kind.clone(),
                        pos: tiles.cell_origin(col as i32, row as i32),
                    });
                } else {
                    return Err(LevelError::UnknownSymbol {
                        symbol,
                        line: row + 1,
                        column: col + 1,
                    });
                }
            }
        }

        log::info!(
            "parsed level: {}x{} cells, {} tiles, {} spawns",
            columns,
            rows,
            tiles.tile_count(),
            spawns.len()
        );
        Ok(Level { tiles, spawns })
    }
}

fn build_tile(desc: &TileDescriptor, registry: &SpriteRegistry) -> Tile {
    let mut tile = Tile::new(desc.kind.clone());
    tile.solid = desc.solid;
    if let Some(sprite) = desc.sprite.as_deref().and_then(|name| registry.sprite(name)) {
        tile = tile.with_sprite(sprite);
    }
    if let Some(name) = desc.animation.as_deref() {
        match registry.animation(name) {
            Some(def) => tile = tile.with_animation(def),
            None => log::warn!("tile '{}' uses unknown animation '{}'", desc.kind, name),
        }
    }
    tile
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGEND: &str = r##"{
        "tiles": {
            ".": { "kind": "sky" },
            "#": { "kind": "ground", "solid": true },
            "%": { "kind": "bricks", "solid": true }
        },
        "spawns": { "g": "goomba", "@": "player" }
    }"##;

    fn parse(text: &str) -> Result<Level, LevelError> {
        let legend = LevelLegend::from_json(LEGEND).unwrap();
        Level::parse(text, &legend, Size::new(16.0, 16.0), &SpriteRegistry::new())
    }

    #[test]
    fn builds_grid_and_spawns() {
        let level = parse("....\n.@ g\n   %\n####\n").unwrap();
        let tiles = &level.tiles;
        assert_eq!((tiles.columns(), tiles.rows()), (4, 4));
        assert_eq!(tiles.tile_at(0, 0).map(|t| t.kind.as_str()), Some("sky"));
        assert!(tiles.tile_at(2, 1).is_none());
        assert!(tiles.is_solid(3, 2));
        assert!(tiles.is_solid(0, 3));
        assert!(!tiles.is_solid(0, 0));
        assert_eq!(
            level.spawns,
            vec![
                Spawn { kind: "player".into(), pos: Vec2::new(16.0, 16.0) },
                Spawn { kind: "goomba".into(), pos: Vec2::new(48.0, 16.0) },
            ]
        );
        // spawn cells stay empty
        assert!(tiles.tile_at(1, 1).is_none());
    }

    #[test]
    fn short_lines_are_padded() {
        let level = parse("#\n\n####").unwrap();
        assert_eq!((level.tiles.columns(), level.tiles.rows()), (4, 3));
        assert!(!level.tiles.is_solid(3, 0));
        assert!(level.tiles.is_solid(3, 2));
    }

    #[test]
    fn crlf_is_accepted() {
        let level = parse("..\r\n##\r\n").unwrap();
        assert_eq!((level.tiles.columns(), level.tiles.rows()), (2, 2));
    }

    #[test]
    fn unknown_symbol_reports_position() {
        assert_eq!(
            parse("..\n.x").unwrap_err(),
            LevelError::UnknownSymbol { symbol: 'x', line: 2, column: 2 }
        );
    }

    #[test]
    fn empty_and_oversized_levels_fail() {
        assert_eq!(parse("").unwrap_err(), LevelError::Empty);
        assert_eq!(parse("\n\n").unwrap_err(), LevelError::Empty);
        let wide = ".".repeat(MAX_DIMENSION + 1);
        assert_eq!(
            parse(&wide).unwrap_err(),
            LevelError::TooLarge { columns: MAX_DIMENSION + 1, rows: 1 }
        );
    }
}
