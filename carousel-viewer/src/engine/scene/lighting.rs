use bevy::prelude::*;

use constants::lighting::DIRECTIONAL_ILLUMINANCE;

/// Sun-style key light. Spawned up front; the loading phase only gates the
/// meshes, not the lights.
pub fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}
