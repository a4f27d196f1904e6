//! Compile-time scene parameters shared by every carousel crate.
//!
//! Geometry, colors, motion rates, and key bindings are deliberately constants
//! rather than configuration: the scene is fixed by design and only
//! presentation settings (window, seed, texture path) live in the viewer
//! config file.

pub mod camera;
pub mod dimensions;
pub mod keys;
pub mod lighting;
pub mod motion;
pub mod palette;
