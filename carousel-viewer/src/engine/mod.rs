pub mod assets;
pub mod camera;
pub mod core;
pub mod gizmos;
pub mod mesh;
pub mod scene;
pub mod systems;
