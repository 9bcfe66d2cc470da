//! Terrain Configuration
//!
//! Grid layout and height-wave parameters for the generated heightfield.

use serde::{Deserialize, Serialize};

/// Largest accepted `grid_cells`. Vertex indices are `u32`, and this keeps
/// the mesh far below that limit.
pub const MAX_GRID_CELLS: u32 = 4096;

/// Heightfield generation parameters.
///
/// Height is `amplitude_x * sin(frequency_x * x) + amplitude_z * cos(frequency_z * z)`
/// sampled on a square grid centred on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Cells per side (vertices per side = cells + 1)
    pub grid_cells: u32,
    /// World units between neighbouring vertices
    pub cell_spacing: f32,
    /// Texture coordinate advance per cell
    pub uv_per_cell: f32,
    pub amplitude_x: f32,
    pub frequency_x: f32,
    pub amplitude_z: f32,
    pub frequency_z: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_cells: 24,
            cell_spacing: 2.5,
            uv_per_cell: 0.25,
            amplitude_x: 0.5,
            frequency_x: 0.22,
            amplitude_z: 0.4,
            frequency_z: 0.19,
        }
    }
}

impl TerrainConfig {
    /// Height of the wave function at a world position.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        self.amplitude_x * (self.frequency_x * x).sin()
            + self.amplitude_z * (self.frequency_z * z).cos()
    }

    /// Reject grids that are empty or too large to index.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_cells == 0 || self.grid_cells > MAX_GRID_CELLS {
            return Err(format!(
                "terrain.grid_cells must be in 1..={MAX_GRID_CELLS}, got {}",
                self.grid_cells
            ));
        }
        if !(self.cell_spacing > 0.0 && self.cell_spacing.is_finite()) {
            return Err(format!(
                "terrain.cell_spacing must be positive, got {}",
                self.cell_spacing
            ));
        }
        Ok(())
    }

    /// Half of the grid's side length in world units.
    pub fn half_extent(&self) -> f32 {
        self.grid_cells as f32 * self.cell_spacing * 0.5
    }
}
