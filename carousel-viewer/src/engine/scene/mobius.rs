/// Möbius strip suspended above the carousel, ringed by point lights.
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::engine::mesh::mobius::mobius_strip_mesh;
use constants::dimensions::{MOBIUS_ALTITUDE, MOBIUS_RADIUS, STRIP_LIGHT_COUNT};
use constants::lighting::{STRIP_LIGHT_INTENSITY, STRIP_LIGHT_RANGE};
use constants::palette::MOBIUS_COLOR;

/// Root node of the strip; revolves with the carousel.
#[derive(Component)]
pub struct MobiusStrip;

/// One of the point lights riding the strip centerline.
#[derive(Component)]
pub struct StripLight;

pub fn spawn_mobius_strip(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Entity {
    let strip = commands
        .spawn((
            MobiusStrip,
            Transform::from_xyz(0.0, MOBIUS_ALTITUDE, 0.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // The band mesh circles Z in its own space; tip it flat like the
            // rings.
            parent.spawn((
                Mesh3d(meshes.add(mobius_strip_mesh())),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: MOBIUS_COLOR.into(),
                    perceptual_roughness: 0.4,
                    double_sided: true,
                    cull_mode: None,
                    ..default()
                })),
                Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            ));

            for slot in 0..STRIP_LIGHT_COUNT {
                let angle = slot as f32 / STRIP_LIGHT_COUNT as f32 * TAU;
                parent.spawn((
                    StripLight,
                    PointLight {
                        intensity: STRIP_LIGHT_INTENSITY,
                        range: STRIP_LIGHT_RANGE,
                        shadows_enabled: false,
                        ..default()
                    },
                    Transform::from_xyz(
                        MOBIUS_RADIUS * angle.cos(),
                        0.0,
                        MOBIUS_RADIUS * angle.sin(),
                    ),
                ));
            }
        })
        .id();

    info!("Mobius strip spawned with {STRIP_LIGHT_COUNT} lights");
    strip
}
