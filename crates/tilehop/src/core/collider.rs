//! Axis-separated tile collision.
//!
//! Each axis is resolved on its own, right after the position along that axis
//! has been integrated. Every column (or row) the leading edge crossed during
//! the move is checked in travel order, across every cell the hit box spans on
//! the other axis. The first solid line snaps the leading edge onto its near
//! edge, zeroes the velocity component and raises the matching collision flag.

use crate::components::entity::{Body, Side};
use crate::components::tilemap::TileMap;
use crate::core::geometry::{Axis, AxisExt, Bounds};

/// Slack applied to the spanned range so that a box resting exactly on a tile
/// boundary (up to float rounding) does not reach into the neighbouring cells.
const EDGE_EPSILON: f32 = 1e-3;

/// A tile cell examined during resolution, kept for the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCheck {
    pub col: i32,
    pub row: i32,
    pub hit: bool,
}

/// Resolves entity motion against the solid tiles of a `TileMap`.
#[derive(Debug)]
pub struct TileCollider {
    tiles: TileMap,
    record_checks: bool,
    checks: Vec<CellCheck>,
}

impl TileCollider {
    pub fn new(tiles: TileMap) -> Self {
        Self {
            tiles,
            record_checks: false,
            checks: Vec::new(),
        }
    }

    /// Keep the cells examined since the last `clear_checks`.
    pub fn with_check_recording(mut self, enabled: bool) -> Self {
        self.record_checks = enabled;
        self
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    /// Mutable access for animation ticking. Solidity never changes at runtime.
    pub fn tiles_mut(&mut self) -> &mut TileMap {
        &mut self.tiles
    }

    pub fn checks(&self) -> &[CellCheck] {
        &self.checks
    }

    pub fn clear_checks(&mut self) {
        self.checks.clear();
    }

    pub fn resolve_x(&mut self, body: &mut Body, dt: f32) {
        self.resolve(body, Axis::X, dt);
    }

    pub fn resolve_y(&mut self, body: &mut Body, dt: f32) {
        self.resolve(body, Axis::Y, dt);
    }

    /// Resolve the speculative position of `body` along `axis` after a move
    /// of `vel * dt` along that axis.
    pub fn resolve(&mut self, body: &mut Body, axis: Axis, dt: f32) {
        let speed = body.vel.axis(axis);
        if speed == 0.0 || !body.solid {
            return;
        }

        let size = self.tiles.tile_size();
        let unit = size.extent(axis);
        let origin = self.tiles.origin.axis(axis);
        let bounds = body.bounds();
        let (low, high) = bounds.span(axis);
        let travel = if dt > 0.0 && dt.is_finite() { speed * dt } else { 0.0 };
        let lines = match axis {
            Axis::X => self.tiles.columns(),
            Axis::Y => self.tiles.rows(),
        } as i32
            - 1;

        // Sweep every line the leading edge crossed this step, from the one
        // it started in to the one it ends in, and stop at the first solid.
        let blocking = if speed > 0.0 {
            let to = self.lead_forward(high, origin, unit);
            let from = self.lead_forward(high - travel, origin, unit).min(to);
            let (from, to) = (from.max(0), to.min(lines));
            (from..=to).find(|&line| self.line_blocks(bounds, axis, line))
        } else {
            let to = self.tiles.to_index((low - origin) / unit);
            let from = self.tiles.to_index((low - travel - origin) / unit).max(to);
            let (from, to) = (from.min(lines), to.max(0));
            (to..=from).rev().find(|&line| self.line_blocks(bounds, axis, line))
        };
        let Some(line) = blocking else {
            return;
        };

        let cell_start = origin + line as f32 * unit;
        let (snapped, side) = if speed > 0.0 {
            (cell_start - body.size.extent(axis), positive_side(axis))
        } else {
            (cell_start + unit, negative_side(axis))
        };
        body.pos = body.pos.with_axis(axis, snapped);
        body.vel = body.vel.with_axis(axis, 0.0);
        body.collisions.raise(side);
    }

    /// Cell holding a forward-moving edge. An edge lying exactly on a tile
    /// boundary belongs to the cell it has not entered yet.
    fn lead_forward(&self, edge: f32, origin: f32, unit: f32) -> i32 {
        let local = (edge - origin) / unit;
        self.tiles
            .to_index(local)
            .saturating_sub(i32::from(local.fract() == 0.0))
    }

    /// Whether any cell of `line` across the span of `bounds` is solid.
    fn line_blocks(&mut self, bounds: Bounds, axis: Axis, line: i32) -> bool {
        let cross_axis = axis.perpendicular();
        let cross_unit = self.tiles.tile_size().extent(cross_axis);
        let cross_origin = self.tiles.origin.axis(cross_axis);
        let (cross_low, cross_high) = bounds.span(cross_axis);
        let first = self
            .tiles
            .to_index((cross_low + EDGE_EPSILON - cross_origin) / cross_unit);
        let last = self
            .tiles
            .to_index((cross_high - EDGE_EPSILON - cross_origin) / cross_unit)
            .max(first);
        // Cells beyond the grid are empty; clamp so huge boxes stay cheap.
        let cross_limit = match axis {
            Axis::X => self.tiles.rows(),
            Axis::Y => self.tiles.columns(),
        } as i32
            - 1;
        let (first, last) = (first.max(0), last.min(cross_limit));

        let mut blocked = false;
        for cross in first..=last {
            let (col, row) = match axis {
                Axis::X => (line, cross),
                Axis::Y => (cross, line),
            };
            let hit = self.tiles.is_solid(col, row);
            if self.record_checks {
                self.checks.push(CellCheck { col, row, hit });
            }
            if hit {
                blocked = true;
                if !self.record_checks {
                    break;
                }
            }
        }
        blocked
    }
}

fn positive_side(axis: Axis) -> Side {
    match axis {
        Axis::X => Side::Right,
        Axis::Y => Side::Bottom,
    }
}

fn negative_side(axis: Axis) -> Side {
    match axis {
        Axis::X => Side::Left,
        Axis::Y => Side::Top,
    }
}
