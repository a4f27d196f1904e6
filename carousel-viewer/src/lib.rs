//! Interactive carousel viewer: a spinning cylinder ringed by oscillating
//! bands of parametric surfaces, lit by toggleable light groups, under a
//! Möbius strip and a skydome.

pub mod engine;

pub use engine::core::app_setup::create_app;
pub use engine::core::viewer_config::ViewerConfig;
