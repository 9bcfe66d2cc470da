//! Terrain Mesh Generator
//!
//! Builds a regular-grid triangle mesh from a height function. The vertex
//! layout is GPU-ready (`bytemuck::Pod`) so the renderer can upload the
//! arrays as-is.

use glam::{Vec2, Vec3};

/// Vertex data for the terrain mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 32]);

impl TerrainVertex {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Position projected onto the XZ plane.
    #[inline]
    pub fn xz(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[2])
    }
}

/// Layout of a square vertex grid on the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Cells per side
    pub cells: u32,
    /// World units between neighbouring vertices
    pub spacing: f32,
    /// XZ coordinate of vertex (0, 0)
    pub origin: Vec2,
    /// Texture coordinate advance per cell
    pub uv_per_cell: f32,
}

impl GridSpec {
    /// A grid of `cells` x `cells` centred on the world origin.
    pub fn centered(cells: u32, spacing: f32) -> Self {
        let half = cells as f32 * spacing * 0.5;
        Self {
            cells,
            spacing,
            origin: Vec2::splat(-half),
            uv_per_cell: 0.25,
        }
    }

    /// Vertices per side.
    #[inline]
    pub fn verts_per_side(&self) -> u32 {
        self.cells + 1
    }

    /// Index of grid vertex (x, z) in the row-major vertex array.
    #[inline]
    pub fn vertex_index(&self, x: u32, z: u32) -> u32 {
        z * self.verts_per_side() + x
    }

    /// World XZ of grid vertex (x, z).
    #[inline]
    pub fn vertex_xz(&self, x: u32, z: u32) -> Vec2 {
        Vec2::new(
            x as f32 * self.spacing + self.origin.x,
            z as f32 * self.spacing + self.origin.y,
        )
    }

    /// Far corner of the grid footprint.
    pub fn max_corner(&self) -> Vec2 {
        self.origin + Vec2::splat(self.cells as f32 * self.spacing)
    }
}

/// Generate the vertex and index arrays for a grid.
///
/// Vertices are row-major (z outer, x inner). Each cell emits two triangles,
/// `(i0, i2, i1)` then `(i1, i2, i3)`, with cells visited in the same order,
/// so triangle `2 * (z * cells + x) + k` belongs to cell (x, z).
pub fn build_grid_mesh<F>(grid: &GridSpec, height: F) -> (Vec<TerrainVertex>, Vec<u32>)
where
    F: Fn(f32, f32) -> f32,
{
    let side = grid.verts_per_side();
    let side_len = side as usize;
    let mut vertices = Vec::with_capacity(side_len * side_len);

    for z in 0..side {
        for x in 0..side {
            let xz = grid.vertex_xz(x, z);
            vertices.push(TerrainVertex {
                position: [xz.x, height(xz.x, xz.y), xz.y],
                normal: [0.0; 3],
                uv: [x as f32 * grid.uv_per_cell, z as f32 * grid.uv_per_cell],
            });
        }
    }

    let cells = grid.cells as usize;
    let mut indices = Vec::with_capacity(cells * cells * 6);
    for z in 0..grid.cells {
        for x in 0..grid.cells {
            let i0 = grid.vertex_index(x, z);
            let i1 = grid.vertex_index(x + 1, z);
            let i2 = grid.vertex_index(x, z + 1);
            let i3 = grid.vertex_index(x + 1, z + 1);

            indices.extend_from_slice(&[i0, i2, i1]);
            indices.extend_from_slice(&[i1, i2, i3]);
        }
    }

    compute_vertex_normals(&mut vertices, &indices);
    (vertices, indices)
}

/// Set each vertex normal to the normalized sum of its adjacent face normals.
pub fn compute_vertex_normals(vertices: &mut [TerrainVertex], indices: &[u32]) {
    let mut sums = vec![Vec3::ZERO; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let a = vertices[ia].position();
        let e1 = vertices[ib].position() - a;
        let e2 = vertices[ic].position() - a;
        let n = e1.cross(e2).normalize_or_zero();

        sums[ia] += n;
        sums[ib] += n;
        sums[ic] += n;
    }

    for (vertex, sum) in vertices.iter_mut().zip(sums) {
        vertex.normal = sum.normalize_or(Vec3::Y).to_array();
    }
}
