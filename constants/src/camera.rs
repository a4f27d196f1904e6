use bevy::math::Vec3;

/// Fixed perspective: 70 degree field of view, near 1, far 1000, camera
/// at (10, 10, 10) looking at the scene origin. Aspect ratio follows the
/// window.
pub const CAMERA_FOV_DEGREES: f32 = 70.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
