pub mod lighting;
pub mod ring_motion;
pub mod rotation;
pub mod shading;
