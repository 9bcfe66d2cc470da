//! Grid bucket lookup for surface queries.
//!
//! A regular grid mesh stores the two triangles of cell (x, z) at triangle
//! indices `2 * (z * cells + x)` and `+1`. Instead of scanning every triangle,
//! a query only visits the cells whose (slightly expanded) rectangle contains
//! the point, in ascending triangle order. The expansion is wider than the
//! barycentric tolerance can ever reach, so the first accepted triangle is the
//! same one a full scan would accept.

use glam::Vec2;

use super::mesh::GridSpec;

/// Expansion of each cell rectangle, in cells.
const CELL_EPSILON: f32 = 1e-3;

/// Up to 2x2 cells are visited at a corner, two triangles each.
pub const MAX_CANDIDATES: usize = 8;

/// O(1) triangle candidate lookup for a regular grid mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridIndex {
    cells: u32,
    spacing: f32,
    origin: Vec2,
}

/// Candidate triangle indices for one query, ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct Candidates {
    triangles: [u32; MAX_CANDIDATES],
    len: usize,
}

impl Candidates {
    fn push(&mut self, triangle: u32) {
        self.triangles[self.len] = triangle;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.triangles[..self.len]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl GridIndex {
    pub fn new(grid: &GridSpec) -> Self {
        Self {
            cells: grid.cells,
            spacing: grid.spacing,
            origin: grid.origin,
        }
    }

    /// Inclusive cell range along one axis touched by `coord`, or `None` when
    /// the coordinate is clearly outside the grid.
    fn cell_range(&self, coord: f32, origin: f32) -> Option<(u32, u32)> {
        let f = (coord - origin) / self.spacing;
        if !f.is_finite() {
            return None;
        }
        let lo = (f - CELL_EPSILON).floor();
        let hi = (f + CELL_EPSILON).floor();
        let last = self.cells as f32 - 1.0;
        if hi < 0.0 || lo > last {
            return None;
        }
        Some((lo.max(0.0) as u32, hi.min(last) as u32))
    }

    /// Triangles that can contain `(x, z)`, in mesh order.
    pub fn candidates(&self, x: f32, z: f32) -> Candidates {
        let mut out = Candidates::default();
        if self.cells == 0 {
            return out;
        }
        let (Some((x_lo, x_hi)), Some((z_lo, z_hi))) = (
            self.cell_range(x, self.origin.x),
            self.cell_range(z, self.origin.y),
        ) else {
            return out;
        };

        for cz in z_lo..=z_hi {
            for cx in x_lo..=x_hi {
                let first = 2 * (cz * self.cells + cx);
                out.push(first);
                out.push(first + 1);
            }
        }
        out
    }
}
