//! Tile grid for level geometry.
//!
//! Tiles are kept in a palette and the grid stores palette indices in
//! row-major order (`index = row * columns + col`). The world is Y-down and
//! cell (0, 0) starts at `origin`. Lookups outside the grid are empty and
//! never fail, so entities may walk or fall off the edges of a level.

use glam::Vec2;

use crate::components::animation::AnimationDef;
use crate::components::sprite::{SpriteComponent, SpriteFrame};
use crate::core::geometry::Size;
use crate::error::LevelError;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderInstance;

/// Most tile kinds one map can hold, the range of `TileId`.
pub const MAX_TILE_KINDS: usize = u16::MAX as usize + 1;

/// Index into the tile palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u16);

/// A kind of tile placed in the grid. Immutable once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Type tag, e.g. "sky", "ground", "bricks".
    pub kind: String,
    /// Blocks entity movement.
    pub solid: bool,
    pub sprite: Option<SpriteComponent>,
    pub animation: Option<AnimationDef>,
}

impl Tile {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            solid: false,
            sprite: None,
            animation: None,
        }
    }

    pub fn solid(mut self) -> Self {
        self.solid = true;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_animation(mut self, animation: AnimationDef) -> Self {
        self.animation = Some(animation);
        self
    }
}

/// Grid of typed tiles addressable by cell or world coordinate.
#[derive(Debug, Clone)]
pub struct TileMap {
    columns: u32,
    rows: u32,
    tile_size: Size,
    /// World position of the top-left corner of cell (0, 0).
    pub origin: Vec2,
    palette: Vec<Tile>,
    cells: Vec<Option<TileId>>,
    /// Clock shared by every animated tile.
    elapsed: f32,
}

impl TileMap {
    pub fn new(columns: u32, rows: u32, tile_size: Size) -> Self {
        Self {
            columns,
            rows,
            tile_size,
            origin: Vec2::ZERO,
            palette: Vec::new(),
            cells: vec![None; columns as usize * rows as usize],
            elapsed: 0.0,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    /// Register a tile kind, reusing an identical palette entry.
    pub fn define(&mut self, tile: Tile) -> Result<TileId, LevelError> {
        let idx = match self.palette.iter().position(|t| *t == tile) {
            Some(idx) => idx,
            None if self.palette.len() >= MAX_TILE_KINDS => {
                return Err(LevelError::TooManyTiles {
                    count: self.palette.len() + 1,
                });
            }
            None => {
                self.palette.push(tile);
                self.palette.len() - 1
            }
        };
        u16::try_from(idx)
            .map(TileId)
            .map_err(|_| LevelError::TooManyTiles { count: idx + 1 })
    }

    pub fn palette(&self) -> &[Tile] {
        &self.palette
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as u32 >= self.columns || row as u32 >= self.rows {
            return None;
        }
        Some(row as usize * self.columns as usize + col as usize)
    }

    /// Place a tile. Out-of-range cells are ignored.
    pub fn set(&mut self, col: i32, row: i32, tile: Option<TileId>) {
        if let Some(idx) = self.index(col, row) {
            self.cells[idx] = tile;
        }
    }

    /// Fill a rectangular block of cells.
    pub fn fill_rect(&mut self, col: i32, row: i32, w: i32, h: i32, tile: Option<TileId>) {
        for r in row..row.saturating_add(h) {
            for c in col..col.saturating_add(w) {
                self.set(c, r, tile);
            }
        }
    }

    /// Tile at a cell, `None` for empty or out-of-range cells.
    pub fn tile_at(&self, col: i32, row: i32) -> Option<&Tile> {
        let id = self.index(col, row).and_then(|idx| self.cells[idx])?;
        self.palette.get(id.0 as usize)
    }

    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        self.tile_at(col, row).map_or(false, |t| t.solid)
    }

    /// Cell containing a world point (floor division by tile size).
    /// Non-finite or huge coordinates saturate to the `i32` range.
    pub fn world_to_cell(&self, point: Vec2) -> (i32, i32) {
        let local = point - self.origin;
        (
            self.to_index(local.x / self.tile_size.width),
            self.to_index(local.y / self.tile_size.height),
        )
    }

    /// Cell index for a coordinate already expressed in tile units.
    pub(crate) fn to_index(&self, units: f32) -> i32 {
        units.floor() as i32
    }

    /// World position of the top-left corner of a cell.
    pub fn cell_origin(&self, col: i32, row: i32) -> Vec2 {
        self.origin
            + Vec2::new(
                col as f32 * self.tile_size.width,
                row as f32 * self.tile_size.height,
            )
    }

    /// World-space extent of the grid as (top-left, bottom-right).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let max = self.cell_origin(self.columns as i32, self.rows as i32);
        (self.origin, max)
    }

    /// Advance the shared animation clock.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Sprite frame currently shown for a tile, following its animation.
    pub fn frame_of(&self, tile: &Tile) -> Option<SpriteFrame> {
        match &tile.animation {
            Some(anim) => anim.frame_at(self.elapsed),
            None => tile.sprite.map(|s| s.frame),
        }
    }

    /// Render instances for tiles inside the camera viewport, in screen space.
    pub fn build_visible_instances(&self, camera: &Camera2D) -> Vec<RenderInstance> {
        let (min_col, min_row) = self.world_to_cell(camera.position);
        let (max_col, max_row) = self.world_to_cell(camera.position + camera.size.as_vec2());

        let mut instances = Vec::new();
        for row in min_row.max(0)..=max_row.min(self.rows as i32 - 1) {
            for col in min_col.max(0)..=max_col.min(self.columns as i32 - 1) {
                let Some(tile) = self.tile_at(col, row) else {
                    continue;
                };
                let Some(frame) = self.frame_of(tile) else {
                    continue;
                };
                let alpha = tile.sprite.map_or(1.0, |s| s.alpha);
                let screen = camera.project(self.cell_origin(col, row));
                instances.push(RenderInstance {
                    x: screen.x,
                    y: screen.y,
                    width: self.tile_size.width,
                    height: self.tile_size.height,
                    sprite_col: frame.col,
                    atlas_row: frame.row,
                    alpha,
                    flip: 0.0,
                });
            }
        }
        instances
    }

    /// Count of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground_map() -> TileMap {
        let mut map = TileMap::new(20, 12, Size::new(16.0, 16.0));
        let ground = map.define(Tile::new("ground").solid()).unwrap();
        map.fill_rect(0, 10, 20, 2, Some(ground));
        map
    }

    #[test]
    fn new_map_is_empty() {
        let map = TileMap::new(10, 10, Size::new(16.0, 16.0));
        assert_eq!(map.tile_count(), 0);
        assert!(map.tile_at(3, 3).is_none());
    }

    #[test]
    fn palette_deduplicates() {
        let mut map = TileMap::new(4, 4, Size::new(16.0, 16.0));
        let a = map.define(Tile::new("ground").solid()).unwrap();
        let b = map.define(Tile::new("ground").solid()).unwrap();
        let c = map.define(Tile::new("sky")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(map.palette().len(), 2);
    }

    #[test]
    fn palette_is_bounded_by_tile_id_range() {
        let mut map = TileMap::new(4, 4, Size::new(16.0, 16.0));
        map.palette = vec![Tile::new("filler"); MAX_TILE_KINDS];
        assert_eq!(map.define(Tile::new("filler")), Ok(TileId(0)));
        assert_eq!(
            map.define(Tile::new("one-too-many")),
            Err(LevelError::TooManyTiles {
                count: MAX_TILE_KINDS + 1
            })
        );
        assert_eq!(map.palette().len(), MAX_TILE_KINDS);
    }

    #[test]
    fn solidity_follows_tile_flag() {
        let mut map = ground_map();
        let sky = map.define(Tile::new("sky")).unwrap();
        map.set(0, 0, Some(sky));
        assert!(map.is_solid(5, 10));
        assert!(!map.is_solid(0, 0));
        assert!(!map.is_solid(5, 9));
        assert_eq!(map.tile_at(5, 11).map(|t| t.kind.as_str()), Some("ground"));
    }

    #[test]
    fn out_of_range_cells_are_empty() {
        let map = ground_map();
        assert!(!map.is_solid(-1, 10));
        assert!(!map.is_solid(20, 10));
        assert!(!map.is_solid(0, 12));
        assert!(map.tile_at(i32::MIN, i32::MAX).is_none());
    }

    #[test]
    fn world_to_cell_floors() {
        let map = ground_map().with_origin(Vec2::new(8.0, 0.0));
        assert_eq!(map.world_to_cell(Vec2::new(8.0, 0.0)), (0, 0));
        assert_eq!(map.world_to_cell(Vec2::new(23.9, 31.9)), (0, 1));
        assert_eq!(map.world_to_cell(Vec2::new(24.0, 32.0)), (1, 2));
        assert_eq!(map.world_to_cell(Vec2::new(0.0, -1.0)), (-1, -1));
    }

    #[test]
    fn world_to_cell_tolerates_non_finite() {
        let map = ground_map();
        let (col, row) = map.world_to_cell(Vec2::new(f32::INFINITY, f32::NAN));
        assert_eq!(col, i32::MAX);
        assert_eq!(row, 0);
        assert!(!map.is_solid(col, 1_000_000));
        assert_eq!(map.world_to_cell(Vec2::new(-1e30, 0.0)).0, i32::MIN);
    }

    #[test]
    fn bounds_cover_grid() {
        let map = ground_map();
        assert_eq!(map.bounds(), (Vec2::ZERO, Vec2::new(320.0, 192.0)));
        assert_eq!(map.cell_origin(2, 3), Vec2::new(32.0, 48.0));
    }

    #[test]
    fn animated_tile_frames_follow_clock() {
        let mut map = TileMap::new(2, 1, Size::new(16.0, 16.0));
        let anim = AnimationDef::new(
            vec![SpriteFrame::new(24.0, 0.0), SpriteFrame::new(25.0, 0.0)],
            4.0,
            true,
        );
        let chance = map.define(Tile::new("chance").solid().with_animation(anim)).unwrap();
        map.set(0, 0, Some(chance));

        let tile = map.tile_at(0, 0).unwrap().clone();
        assert_eq!(map.frame_of(&tile), Some(SpriteFrame::new(24.0, 0.0)));
        map.tick(0.3);
        assert_eq!(map.frame_of(&tile), Some(SpriteFrame::new(25.0, 0.0)));
        assert!(map.is_solid(0, 0));
    }

    #[test]
    fn animated_tile_without_sprite_is_drawn() {
        let mut map = TileMap::new(2, 1, Size::new(16.0, 16.0));
        let anim = AnimationDef::new(
            vec![SpriteFrame::new(24.0, 0.0), SpriteFrame::new(25.0, 0.0)],
            4.0,
            true,
        );
        let chance = map.define(Tile::new("chance").solid().with_animation(anim)).unwrap();
        map.set(1, 0, Some(chance));
        map.tick(0.3);

        let visible = map.build_visible_instances(&Camera2D::new(Size::new(64.0, 64.0)));
        assert_eq!(visible.len(), 1);
        assert_eq!((visible[0].x, visible[0].sprite_col), (16.0, 25.0));
        assert_eq!(visible[0].alpha, 1.0);
    }

    #[test]
    fn viewport_culling() {
        let mut map = TileMap::new(100, 100, Size::new(16.0, 16.0));
        let ground = map.define(Tile::new("ground").solid().with_sprite(SpriteComponent::default())).unwrap();
        map.fill_rect(0, 0, 100, 100, Some(ground));

        let mut camera = Camera2D::new(Size::new(64.0, 64.0));
        camera.position = Vec2::new(40.0, 40.0);
        let visible = map.build_visible_instances(&camera);
        // viewport straddles half tiles on every side: cells 2..=6 both ways
        assert_eq!(visible.len(), 25);
        assert_eq!((visible[0].x, visible[0].y), (-8.0, -8.0));
    }
}
