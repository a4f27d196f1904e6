/// Carousel assembly: central cylinder, three concentric rings, and eight
/// decorated slots per ring.
///
/// Each ring is a bare node carrying `CarouselRing`; its visible band, its
/// decorations and their spotlights hang off it as children. Transform
/// propagation then keeps everything riding the ring's vertical motion for
/// free, and the whole assembly spins with the root.
use bevy::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::engine::mesh::parametric::{SurfaceKind, surface_mesh};
use crate::engine::systems::ring_motion::CarouselRing;
use crate::engine::systems::rotation::RingDecoration;
use crate::engine::systems::shading::ShadingState;
use constants::dimensions::{
    CYLINDER_HEIGHT, CYLINDER_RADIUS, DECORATION_CLEARANCE, DECORATIONS_PER_RING, RING_COUNT,
    RING_DEPTH, ring_inner_radius, ring_outer_radius,
};
use constants::lighting::{
    SPOTLIGHT_INNER_ANGLE, SPOTLIGHT_INSET, SPOTLIGHT_INTENSITY, SPOTLIGHT_OUTER_ANGLE,
    SPOTLIGHT_RANGE,
};
use constants::palette::{CYLINDER_COLOR, DECORATION_COLORS, RING_COLORS};

/// Root node of the rotating installation.
#[derive(Component)]
pub struct Carousel;

/// Marks every renderable mesh in the carousel subtree. The shading
/// presets retarget exactly this set.
#[derive(Component)]
pub struct CarouselMesh;

/// Spotlight paired with one ring decoration.
#[derive(Component)]
pub struct DecorationLight;

pub fn spawn_carousel(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    shading: &ShadingState,
    rng: &mut StdRng,
) -> Entity {
    let root = commands
        .spawn((Carousel, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(CYLINDER_RADIUS, CYLINDER_HEIGHT))),
                MeshMaterial3d(materials.add(shading.current.material(CYLINDER_COLOR.into()))),
                CarouselMesh,
            ));

            for index in 0..RING_COUNT {
                spawn_ring(parent, meshes, materials, shading, rng, index);
            }
        })
        .id();

    info!(
        "Carousel spawned: {} rings, {} decorations",
        RING_COUNT,
        RING_COUNT * DECORATIONS_PER_RING
    );
    root
}

fn spawn_ring(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    shading: &ShadingState,
    rng: &mut StdRng,
    index: usize,
) {
    parent
        .spawn((
            CarouselRing::new(index),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|ring| {
            // The visible band: an annulus extruded along Z, tipped flat so
            // it wraps the cylinder horizontally.
            ring.spawn((
                Mesh3d(meshes.add(Extrusion::new(
                    Annulus::new(ring_inner_radius(index), ring_outer_radius(index)),
                    RING_DEPTH,
                ))),
                MeshMaterial3d(materials.add(shading.current.material(RING_COLORS[index].into()))),
                Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                CarouselMesh,
            ));

            decorate_ring(ring, meshes, materials, shading, rng, index);
        });
}

/// Seats one decoration every 45 degrees around the band's midline, each a
/// different surface kind (shuffled per ring) in a random palette color,
/// with a spotlight on the deck aimed up at it.
fn decorate_ring(
    ring: &mut ChildSpawnerCommands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    shading: &ShadingState,
    rng: &mut StdRng,
    index: usize,
) {
    let mut kinds = SurfaceKind::ALL;
    kinds.shuffle(rng);
    let orbit = (ring_inner_radius(index) + ring_outer_radius(index)) / 2.0;
    let deck = RING_DEPTH / 2.0;

    for (slot, kind) in kinds.into_iter().enumerate() {
        let angle = slot as f32 / DECORATIONS_PER_RING as f32 * TAU;
        let outward = Vec3::new(angle.cos(), 0.0, angle.sin());
        let seat = outward * orbit + Vec3::Y * (deck + DECORATION_CLEARANCE);
        let color = DECORATION_COLORS[rng.gen_range(0..DECORATION_COLORS.len())];

        ring.spawn((
            kind,
            RingDecoration::default(),
            Mesh3d(meshes.add(surface_mesh(kind))),
            MeshMaterial3d(materials.add(shading.current.material(color.into()))),
            Transform::from_translation(seat),
            CarouselMesh,
        ));

        let lamp_seat = outward * (orbit - SPOTLIGHT_INSET) + Vec3::Y * deck;
        ring.spawn((
            DecorationLight,
            SpotLight {
                intensity: SPOTLIGHT_INTENSITY,
                range: SPOTLIGHT_RANGE,
                inner_angle: SPOTLIGHT_INNER_ANGLE,
                outer_angle: SPOTLIGHT_OUTER_ANGLE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(lamp_seat).looking_at(seat, Vec3::Y),
        ));

        debug!(
            "Ring {index} slot {slot}: {} at {:.0} degrees",
            kind.label(),
            angle.to_degrees()
        );
    }
}
