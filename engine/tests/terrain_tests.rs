//! Terrain Tests - Surface Queries on the Demo Terrain
//!
//! Coverage, continuity and grid-index equivalence checks on the shipped
//! rolling heightfield.

use glam::Vec3;
use terrain_walk_engine::config::TerrainConfig;
use terrain_walk_engine::player::is_walkable;
use terrain_walk_engine::terrain::{TerrainSurface, TerrainVertex};

fn demo_terrain() -> TerrainSurface {
    TerrainSurface::generate(&TerrainConfig::default())
}

/// Deterministic pseudo-random sample points over `[-extent, extent]^2`.
fn sample_points(count: usize, extent: f32) -> Vec<(f32, f32)> {
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as f32 / u32::MAX as f32
    };
    (0..count)
        .map(|_| ((next() * 2.0 - 1.0) * extent, (next() * 2.0 - 1.0) * extent))
        .collect()
}

// ============================================================================
// Mesh layout
// ============================================================================

#[test]
fn test_demo_terrain_dimensions() {
    let terrain = demo_terrain();
    assert_eq!(terrain.vertices().len(), 25 * 25);
    assert_eq!(terrain.triangle_count(), 24 * 24 * 2);
    assert!(terrain.is_indexed());

    let footprint = terrain.footprint();
    assert_eq!(footprint.min.x, -30.0);
    assert_eq!(footprint.max.x, 30.0);
    assert_eq!(footprint.min.y, -30.0);
    assert_eq!(footprint.max.y, 30.0);
}

#[test]
fn test_vertex_buffer_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<TerrainVertex>(), 32);
    let terrain = demo_terrain();
    let bytes: &[u8] = bytemuck::cast_slice(terrain.vertices());
    assert_eq!(bytes.len(), terrain.vertices().len() * 32);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_every_interior_point_has_a_surface() {
    let terrain = demo_terrain();
    for (x, z) in sample_points(2_000, 29.9) {
        let hit = terrain.sample_surface(x, z);
        assert!(hit.is_some(), "no surface at ({x}, {z})");
    }
}

#[test]
fn test_points_outside_have_no_surface() {
    let terrain = demo_terrain();
    for (x, z) in [(30.5, 0.0), (0.0, -31.0), (100.0, 100.0), (-30.2, 29.0)] {
        assert!(terrain.sample_surface(x, z).is_none());
    }
}

#[test]
fn test_grid_index_matches_linear_scan() {
    let terrain = demo_terrain();
    for (x, z) in sample_points(1_000, 31.0) {
        assert_eq!(terrain.sample_surface(x, z), terrain.sample_surface_scan(x, z));
    }
    // Vertices and edges, where several triangles tie.
    for i in -12..=12 {
        for j in -12..=12 {
            let (x, z) = (i as f32 * 2.5, j as f32 * 2.5);
            assert_eq!(terrain.sample_surface(x, z), terrain.sample_surface_scan(x, z));
            let (ex, ez) = (x + 1.25, z);
            assert_eq!(terrain.sample_surface(ex, ez), terrain.sample_surface_scan(ex, ez));
        }
    }
}

#[test]
fn test_height_is_continuous() {
    let terrain = demo_terrain();
    let step = 1e-3;
    for (x, z) in sample_points(500, 29.0) {
        let a = terrain.sample_surface(x, z).unwrap().height;
        let b = terrain.sample_surface(x + step, z).unwrap().height;
        let c = terrain.sample_surface(x, z + step).unwrap().height;
        // Slopes on the demo terrain stay well under 1.
        assert!((a - b).abs() < step * 2.0);
        assert!((a - c).abs() < step * 2.0);
    }
}

#[test]
fn test_height_tracks_generator() {
    let config = TerrainConfig::default();
    let terrain = TerrainSurface::generate(&config);
    for (x, z) in sample_points(500, 29.0) {
        let hit = terrain.sample_surface(x, z).unwrap();
        // Linear interpolation error over a 2.5 m cell of gentle waves.
        assert!((hit.height - config.height_at(x, z)).abs() < 0.1);
    }
}

#[test]
fn test_demo_terrain_is_walkable_everywhere() {
    let terrain = demo_terrain();
    let limit = 45f32.to_radians();
    for (x, z) in sample_points(500, 29.9) {
        let hit = terrain.sample_surface(x, z).unwrap();
        assert!((hit.normal.length() - 1.0).abs() < 1e-4);
        assert!(hit.normal.dot(Vec3::Y) > 0.9);
        assert!(is_walkable(hit.normal, limit));
    }
}
