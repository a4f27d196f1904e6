/// Directional light illuminance, lux.
pub const DIRECTIONAL_ILLUMINANCE: f32 = 10_000.0;

/// Decoration spotlight output, lumens.
pub const SPOTLIGHT_INTENSITY: f32 = 1_500_000.0;

/// Spotlight reach; a little beyond one decoration.
pub const SPOTLIGHT_RANGE: f32 = 8.0;

/// Spotlight cone, radians.
pub const SPOTLIGHT_INNER_ANGLE: f32 = 0.35;
pub const SPOTLIGHT_OUTER_ANGLE: f32 = 0.6;

/// Radial pull-in of each spotlight from its decoration's orbit, so the
/// beam tilts outward instead of firing straight up.
pub const SPOTLIGHT_INSET: f32 = 0.6;

/// Möbius point light output, lumens.
pub const STRIP_LIGHT_INTENSITY: f32 = 300_000.0;

/// Möbius point light reach.
pub const STRIP_LIGHT_RANGE: f32 = 7.0;
