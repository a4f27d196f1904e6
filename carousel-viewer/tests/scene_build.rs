//! Scene construction against a bare world: entity counts, hierarchy
//! shape, and seeded reproducibility.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use carousel_viewer::engine::core::rng::SceneRng;
use carousel_viewer::engine::mesh::parametric::SurfaceKind;
use carousel_viewer::engine::scene::carousel::{
    Carousel, CarouselMesh, DecorationLight, spawn_carousel,
};
use carousel_viewer::engine::scene::mobius::{MobiusStrip, StripLight, spawn_mobius_strip};
use carousel_viewer::engine::scene::skydome::{Skydome, spawn_skydome};
use carousel_viewer::engine::systems::ring_motion::CarouselRing;
use carousel_viewer::engine::systems::shading::ShadingState;
use constants::dimensions::{DECORATIONS_PER_RING, RING_COUNT, STRIP_LIGHT_COUNT};

fn build_world(seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(Assets::<Mesh>::default());
    world.insert_resource(Assets::<StandardMaterial>::default());
    world.insert_resource(SceneRng::from_seed_or_entropy(Some(seed)));
    world.insert_resource(ShadingState::default());
    world
        .run_system_once(
            |mut commands: Commands,
             mut meshes: ResMut<Assets<Mesh>>,
             mut materials: ResMut<Assets<StandardMaterial>>,
             shading: Res<ShadingState>,
             mut rng: ResMut<SceneRng>| {
                spawn_carousel(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    &shading,
                    &mut rng.0,
                );
                spawn_mobius_strip(&mut commands, &mut meshes, &mut materials);
                spawn_skydome(&mut commands, &mut meshes, &mut materials, None);
            },
        )
        .unwrap();
    world
}

fn count<T: Component>(world: &mut World) -> usize {
    world.query_filtered::<(), With<T>>().iter(world).count()
}

/// One row per decoration: ring index, slot angle in degrees, surface
/// kind, and base color in thousandths. Sorted, so two worlds can be
/// compared without relying on iteration order.
fn decoration_descriptors(world: &mut World) -> Vec<(usize, i32, &'static str, [u16; 3])> {
    let mut seats = Vec::new();
    let mut decorations = world.query::<(
        &SurfaceKind,
        &Transform,
        &MeshMaterial3d<StandardMaterial>,
        &ChildOf,
    )>();
    for (kind, transform, material, child_of) in decorations.iter(world) {
        seats.push((*kind, *transform, material.0.clone(), child_of.parent()));
    }

    let mut rows = Vec::new();
    for (kind, transform, handle, parent) in seats {
        let ring_index = world
            .entity(parent)
            .get::<CarouselRing>()
            .expect("decoration parent must be a ring")
            .index;
        let angle = transform
            .translation
            .z
            .atan2(transform.translation.x)
            .to_degrees()
            .round() as i32;
        let color = world
            .resource::<Assets<StandardMaterial>>()
            .get(&handle)
            .expect("decoration material must exist")
            .base_color
            .to_srgba();
        rows.push((
            ring_index,
            (angle + 360) % 360,
            kind.label(),
            [
                (color.red * 1000.0).round() as u16,
                (color.green * 1000.0).round() as u16,
                (color.blue * 1000.0).round() as u16,
            ],
        ));
    }
    rows.sort();
    rows
}

#[test]
fn scene_has_the_expected_population() {
    let mut world = build_world(11);
    assert_eq!(count::<Carousel>(&mut world), 1);
    assert_eq!(count::<CarouselRing>(&mut world), RING_COUNT);
    assert_eq!(count::<SurfaceKind>(&mut world), RING_COUNT * DECORATIONS_PER_RING);
    assert_eq!(
        count::<DecorationLight>(&mut world),
        RING_COUNT * DECORATIONS_PER_RING
    );
    assert_eq!(count::<MobiusStrip>(&mut world), 1);
    assert_eq!(count::<StripLight>(&mut world), STRIP_LIGHT_COUNT);
    assert_eq!(count::<Skydome>(&mut world), 1);
    // Axle, one band per ring, and every decoration answer to the presets.
    assert_eq!(
        count::<CarouselMesh>(&mut world),
        1 + RING_COUNT + RING_COUNT * DECORATIONS_PER_RING
    );
}

#[test]
fn every_ring_carries_each_surface_kind_once() {
    let mut world = build_world(5);
    let rows = decoration_descriptors(&mut world);
    for ring in 0..RING_COUNT {
        let kinds: Vec<&str> = rows
            .iter()
            .filter(|(r, ..)| *r == ring)
            .map(|(_, _, kind, _)| *kind)
            .collect();
        assert_eq!(kinds.len(), DECORATIONS_PER_RING);
        let mut unique = kinds.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), DECORATIONS_PER_RING, "ring {ring} repeats a kind");
    }
}

#[test]
fn same_seed_rebuilds_the_same_scene() {
    let rows_a = decoration_descriptors(&mut build_world(7));
    let rows_b = decoration_descriptors(&mut build_world(7));
    assert_eq!(rows_a, rows_b);
}

#[test]
fn different_seeds_dress_the_rings_differently() {
    let mut world_a = build_world(1);
    let mut world_b = build_world(2);

    // Population and shape never depend on the seed, only the dressing.
    assert_eq!(
        count::<SurfaceKind>(&mut world_a),
        count::<SurfaceKind>(&mut world_b)
    );
    assert_eq!(
        count::<CarouselMesh>(&mut world_a),
        count::<CarouselMesh>(&mut world_b)
    );
    assert_ne!(
        decoration_descriptors(&mut world_a),
        decoration_descriptors(&mut world_b)
    );
}

#[test]
fn hierarchy_keeps_lights_and_decorations_on_their_ring() {
    let mut world = build_world(3);

    let mut lights = world.query_filtered::<&ChildOf, With<DecorationLight>>();
    let parents: Vec<Entity> = lights.iter(&world).map(|c| c.parent()).collect();
    assert_eq!(parents.len(), RING_COUNT * DECORATIONS_PER_RING);
    for parent in parents {
        assert!(
            world.entity(parent).get::<CarouselRing>().is_some(),
            "spotlights must ride a ring so they track its motion"
        );
    }

    // Ring -> carousel root, and the root is a top-level node.
    let mut rings = world.query_filtered::<&ChildOf, With<CarouselRing>>();
    let ring_parents: Vec<Entity> = rings.iter(&world).map(|c| c.parent()).collect();
    for parent in ring_parents {
        let root = world.entity(parent);
        assert!(root.get::<Carousel>().is_some());
        assert!(root.get::<ChildOf>().is_none());
    }

    let mut strip_lights = world.query_filtered::<&ChildOf, With<StripLight>>();
    for child_of in strip_lights.iter(&world) {
        assert!(
            world
                .entity(child_of.parent())
                .get::<MobiusStrip>()
                .is_some()
        );
    }
}

#[test]
fn ring_bands_lie_flat() {
    let mut world = build_world(9);
    // The band is the one mesh child of a ring that is not a decoration.
    let mut bands = world.query_filtered::<(&Transform, &ChildOf), (With<CarouselMesh>, Without<SurfaceKind>)>();
    let mut found = 0;
    for (transform, child_of) in bands.iter(&world) {
        if world.entity(child_of.parent()).get::<CarouselRing>().is_none() {
            continue;
        }
        let extrusion_axis = transform.rotation * Vec3::Z;
        assert!((extrusion_axis.y.abs() - 1.0).abs() < 1.0e-5);
        assert!(
            transform
                .rotation
                .angle_between(Quat::from_rotation_x(-FRAC_PI_2))
                < 1.0e-5
        );
        found += 1;
    }
    assert_eq!(found, RING_COUNT);
}
