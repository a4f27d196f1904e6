/// World-axes debug overlay, off by default.
use bevy::prelude::*;

use constants::dimensions::AXES_LENGTH;
use constants::keys::AXES_KEY;

#[derive(Resource, Default)]
pub struct AxesGizmo {
    pub enabled: bool,
}

pub fn toggle_axes_gizmo(keys: Res<ButtonInput<KeyCode>>, mut axes: ResMut<AxesGizmo>) {
    if keys.just_pressed(AXES_KEY) {
        axes.enabled = !axes.enabled;
        info!("Axes gizmo {}", if axes.enabled { "on" } else { "off" });
    }
}

pub fn draw_axes_gizmo(axes: Res<AxesGizmo>, mut gizmos: Gizmos) {
    if !axes.enabled {
        return;
    }
    gizmos.line(Vec3::ZERO, Vec3::X * AXES_LENGTH, Color::srgb(1.0, 0.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Y * AXES_LENGTH, Color::srgb(0.0, 1.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Z * AXES_LENGTH, Color::srgb(0.0, 0.0, 1.0));
}
