/// Central cylinder radius (the innermost ring starts here).
pub const CYLINDER_RADIUS: f32 = 2.0;

/// Central cylinder height; rings sweep its full extent.
pub const CYLINDER_HEIGHT: f32 = 5.0;

/// Number of concentric rings around the cylinder.
pub const RING_COUNT: usize = 3;

/// Radial width of each ring band; bands are contiguous, so each ring's
/// inner radius equals the previous ring's outer radius.
pub const RING_BAND_WIDTH: f32 = 3.0;

/// Vertical thickness of the extruded annulus forming a ring.
pub const RING_DEPTH: f32 = 1.0;

/// Inner radius of the ring at `index` (0 = innermost).
pub fn ring_inner_radius(index: usize) -> f32 {
    CYLINDER_RADIUS + index as f32 * RING_BAND_WIDTH
}

/// Outer radius of the ring at `index`.
pub fn ring_outer_radius(index: usize) -> f32 {
    ring_inner_radius(index) + RING_BAND_WIDTH
}

/// Decorative parametric surfaces per ring, one every 45 degrees.
pub const DECORATIONS_PER_RING: usize = 8;

/// Bounding size of one decorative surface (meshes are generated to fit).
pub const DECORATION_SIZE: f32 = 1.2;

/// Gap between the ring's top face and the center of a decorative surface.
pub const DECORATION_CLEARANCE: f32 = 0.9;

/// Skydome hemisphere radius. Large enough to enclose the scene and the
/// camera, well inside the far plane.
pub const SKYDOME_RADIUS: f32 = 64.0;

/// Longitude/latitude tessellation of the skydome hemisphere.
pub const SKYDOME_SEGMENTS: usize = 48;
pub const SKYDOME_STACKS: usize = 16;

/// Möbius strip centerline radius.
pub const MOBIUS_RADIUS: f32 = 3.0;

/// Half-width of the Möbius band.
pub const MOBIUS_HALF_WIDTH: f32 = 1.0;

/// Height of the strip's center above the carousel.
pub const MOBIUS_ALTITUDE: f32 = 6.5;

/// Segments around the strip and across the band.
pub const MOBIUS_SEGMENTS: usize = 96;
pub const MOBIUS_RUNGS: usize = 8;

/// Point lights placed along the strip centerline.
pub const STRIP_LIGHT_COUNT: usize = 8;

/// Vertical offset of the skydome base, low enough that the dipping rings
/// never poke below the horizon.
pub const SKYDOME_BASE_HEIGHT: f32 = -8.0;

/// World-axes debug gizmo line length.
pub const AXES_LENGTH: f32 = 10.0;
