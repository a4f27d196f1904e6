use bevy::color::Srgba;

/// Pure green of the central cylinder.
pub const CYLINDER_COLOR: Srgba = Srgba::new(0.0, 1.0, 0.0, 1.0);

/// Ring colors, innermost first: blue, magenta, yellow.
pub const RING_COLORS: [Srgba; 3] = [
    Srgba::new(0.0, 0.0, 1.0, 1.0),
    Srgba::new(1.0, 0.0, 1.0, 1.0),
    Srgba::new(1.0, 1.0, 0.0, 1.0),
];

/// Fixed pool the per-slot decoration colors are drawn from.
pub const DECORATION_COLORS: [Srgba; 8] = [
    Srgba::new(0.90, 0.22, 0.21, 1.0), // red
    Srgba::new(0.96, 0.49, 0.09, 1.0), // orange
    Srgba::new(0.13, 0.69, 0.90, 1.0), // sky blue
    Srgba::new(0.55, 0.36, 0.90, 1.0), // violet
    Srgba::new(0.18, 0.80, 0.44, 1.0), // emerald
    Srgba::new(0.95, 0.77, 0.06, 1.0), // gold
    Srgba::new(0.91, 0.30, 0.59, 1.0), // pink
    Srgba::new(0.93, 0.94, 0.95, 1.0), // off-white
];

/// Base color of the Möbius strip.
pub const MOBIUS_COLOR: Srgba = Srgba::new(0.85, 0.85, 0.95, 1.0);

/// Skydome tint under its texture; plain sky blue if the texture is missing.
pub const SKYDOME_FALLBACK_COLOR: Srgba = Srgba::new(0.25, 0.35, 0.55, 1.0);
