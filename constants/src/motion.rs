use std::f32::consts::TAU;

/// Oscillation amplitude: ring vertical offsets stay inside
/// `[-MAXIMUM_HEIGHT, MAXIMUM_HEIGHT]`. Half the cylinder height, so a ring
/// sweeps the whole column.
pub const MAXIMUM_HEIGHT: f32 = crate::dimensions::CYLINDER_HEIGHT / 2.0;

/// Lower bound of the oscillation; the sine law is symmetric.
pub const MINIMUM_HEIGHT: f32 = -MAXIMUM_HEIGHT;

/// Angular frequency of the ring oscillation phase, radians per second.
pub const RING_PHASE_SPEED: f32 = 1.5;

/// One full oscillation period in seconds.
pub const RING_PERIOD: f32 = TAU / RING_PHASE_SPEED;

/// Magnitude of the carousel yaw rate, radians per second. The sign is drawn
/// at startup and never zero.
pub const CAROUSEL_ANGULAR_SPEED: f32 = 0.6;

/// Self-spin rate of each decorative surface, radians per second.
pub const DECORATION_SPIN_SPEED: f32 = 2.0;
