//! Terrain Module
//!
//! Procedural heightfield terrain: grid mesh generation, vertex normals and
//! point surface queries used by the player body for grounding.
//!
//! # Components
//!
//! - [`TerrainSurface`] - Immutable triangle mesh with `sample_surface(x, z)`
//! - [`SurfaceHit`] - Height + normal under a query point
//! - [`GridIndex`] - Constant-time triangle candidate lookup for grid meshes
//! - [`build_grid_mesh`] - Vertex/index generation from a height function

pub mod grid_index;
pub mod mesh;
pub mod surface;

pub use grid_index::GridIndex;
pub use mesh::{GridSpec, TerrainVertex, build_grid_mesh, compute_vertex_normals};
pub use surface::{
    BARYCENTRIC_TOLERANCE, DEGENERATE_DENOM, Footprint, SurfaceHit, TerrainSurface, barycentric_2d,
};
