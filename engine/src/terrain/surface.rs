//! Terrain surface queries.
//!
//! `TerrainSurface` owns the immutable terrain mesh and answers "what is the
//! ground height and normal under (x, z)?" by barycentric interpolation over
//! the triangle containing the point in the XZ plane.

use glam::{Vec2, Vec3};

use super::grid_index::GridIndex;
use super::mesh::{GridSpec, TerrainVertex, build_grid_mesh};
use crate::config::TerrainConfig;

/// Outward barycentric tolerance; closes hairline gaps along shared edges.
pub const BARYCENTRIC_TOLERANCE: f32 = 1e-4;

/// Projected triangles with a parametrization denominator below this are
/// treated as degenerate and never hit.
pub const DEGENERATE_DENOM: f32 = 1e-6;

/// Ground height and interpolated normal under a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub height: f32,
    pub normal: Vec3,
}

/// Barycentric coordinates `(u, v, w)` of `p` relative to triangle `(a, b, c)`,
/// or `None` when the triangle has (numerically) zero area.
pub fn barycentric_2d(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<Vec3> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < DEGENERATE_DENOM {
        return None;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Some(Vec3::new(1.0 - v - w, v, w))
}

#[inline]
fn is_inside(bary: Vec3) -> bool {
    bary.x >= -BARYCENTRIC_TOLERANCE
        && bary.y >= -BARYCENTRIC_TOLERANCE
        && bary.z >= -BARYCENTRIC_TOLERANCE
}

/// XZ bounding rectangle of the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub min: Vec2,
    pub max: Vec2,
}

impl Footprint {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.y && z <= self.max.y
    }
}

/// Immutable triangulated heightfield.
///
/// Built once at startup and only read afterwards, so it can be shared freely
/// between readers.
#[derive(Debug, Clone)]
pub struct TerrainSurface {
    vertices: Vec<TerrainVertex>,
    indices: Vec<u32>,
    index: Option<GridIndex>,
    footprint: Footprint,
}

impl TerrainSurface {
    /// Build the demo terrain from its configuration.
    pub fn generate(config: &TerrainConfig) -> Self {
        let mut grid = GridSpec::centered(config.grid_cells, config.cell_spacing);
        grid.uv_per_cell = config.uv_per_cell;
        let surface = Self::from_heightfield(&grid, |x, z| config.height_at(x, z));
        log::info!(
            "Terrain built: {} vertices, {} triangles, footprint {:?} .. {:?}",
            surface.vertices.len(),
            surface.triangle_count(),
            surface.footprint.min,
            surface.footprint.max,
        );
        surface
    }

    /// Build a grid terrain from an arbitrary height function.
    pub fn from_heightfield<F>(grid: &GridSpec, height: F) -> Self
    where
        F: Fn(f32, f32) -> f32,
    {
        let (vertices, indices) = build_grid_mesh(grid, height);
        let mut surface = Self::from_mesh(vertices, indices);
        surface.index = Some(GridIndex::new(grid));
        surface
    }

    /// Wrap an already triangulated mesh. Queries scan every triangle.
    ///
    /// The caller is responsible for the mesh being well formed (indices in
    /// range, normals set).
    pub fn from_mesh(vertices: Vec<TerrainVertex>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));

        let footprint = vertices.iter().fold(
            Footprint {
                min: Vec2::splat(f32::INFINITY),
                max: Vec2::splat(f32::NEG_INFINITY),
            },
            |fp, v| Footprint {
                min: fp.min.min(v.xz()),
                max: fp.max.max(v.xz()),
            },
        );

        Self {
            vertices,
            indices,
            index: None,
            footprint,
        }
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Whether queries go through the grid bucket index.
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Surface height and normal under `(x, z)`.
    ///
    /// Triangles are tested in mesh order and the first one containing the
    /// point wins, so points on shared edges resolve to the lower triangle
    /// index. Returns `None` outside the mesh.
    pub fn sample_surface(&self, x: f32, z: f32) -> Option<SurfaceHit> {
        match &self.index {
            Some(index) => {
                let p = Vec2::new(x, z);
                index
                    .candidates(x, z)
                    .as_slice()
                    .iter()
                    .find_map(|&tri| self.sample_triangle(tri as usize, p))
            }
            None => self.sample_surface_scan(x, z),
        }
    }

    /// Linear scan over every triangle. Same result as [`Self::sample_surface`].
    pub fn sample_surface_scan(&self, x: f32, z: f32) -> Option<SurfaceHit> {
        let p = Vec2::new(x, z);
        (0..self.triangle_count()).find_map(|tri| self.sample_triangle(tri, p))
    }

    /// Interpolate triangle `tri` at `p`, if `p` lies inside it.
    pub fn sample_triangle(&self, tri: usize, p: Vec2) -> Option<SurfaceHit> {
        let base = tri * 3;
        let a = &self.vertices[self.indices[base] as usize];
        let b = &self.vertices[self.indices[base + 1] as usize];
        let c = &self.vertices[self.indices[base + 2] as usize];

        let bary = barycentric_2d(p, a.xz(), b.xz(), c.xz())?;
        if !is_inside(bary) {
            return None;
        }

        let height = bary.x * a.position[1] + bary.y * b.position[1] + bary.z * c.position[1];
        let normal = (bary.x * a.normal() + bary.y * b.normal() + bary.z * c.normal())
            .normalize_or(Vec3::Y);
        Some(SurfaceHit { height, normal })
    }
}
