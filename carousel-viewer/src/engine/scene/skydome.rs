/// Sky backdrop: an unlit textured hemisphere around the whole scene.
use bevy::prelude::*;

use crate::engine::mesh::skydome::skydome_mesh;
use constants::dimensions::SKYDOME_BASE_HEIGHT;
use constants::palette::SKYDOME_FALLBACK_COLOR;

#[derive(Component)]
pub struct Skydome;

/// Spawns the dome. Without a texture (missing file, bad path) it falls
/// back to a flat sky color rather than aborting the scene.
pub fn spawn_skydome(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    texture: Option<Handle<Image>>,
) -> Entity {
    let base_color = if texture.is_some() {
        Color::WHITE
    } else {
        SKYDOME_FALLBACK_COLOR.into()
    };
    commands
        .spawn((
            Skydome,
            Mesh3d(meshes.add(skydome_mesh())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color,
                base_color_texture: texture,
                unlit: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_xyz(0.0, SKYDOME_BASE_HEIGHT, 0.0),
        ))
        .id()
}
