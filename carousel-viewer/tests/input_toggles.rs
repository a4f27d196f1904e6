//! Keyboard semantics against a headless app: toggles must fire on the
//! press edge, not on key level, and preset swaps must keep colors.

use bevy::prelude::*;
use std::time::Duration;

use carousel_viewer::engine::scene::carousel::CarouselMesh;
use carousel_viewer::engine::systems::lighting::toggle_directional_light;
use carousel_viewer::engine::systems::ring_motion::{
    CarouselRing, animate_rings, toggle_ring_motion,
};
use carousel_viewer::engine::systems::shading::{
    ShadingMode, ShadingState, apply_shading_preset,
};

/// Bare app with manual input and time; no window, no renderer.
fn harness() -> App {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(Time::<()>::default());
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

/// Runs one frame, then clears the just-pressed edge the way the input
/// plugin would at the next frame boundary.
fn frame(app: &mut App) {
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
}

fn advance(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
}

fn ring_state(app: &mut App, index: usize) -> (bool, f32) {
    let mut rings = app.world_mut().query::<(&CarouselRing, &Transform)>();
    for (ring, transform) in rings.iter(app.world()) {
        if ring.index == index {
            return (ring.is_moving(), transform.translation.y);
        }
    }
    panic!("ring {index} not spawned");
}

#[test]
fn holding_a_key_toggles_once() {
    let mut app = harness();
    app.add_systems(Update, toggle_ring_motion);
    app.world_mut()
        .spawn((CarouselRing::new(0), Transform::default()));

    press(&mut app, KeyCode::Digit1);
    for _ in 0..10 {
        frame(&mut app);
    }

    // Ten held frames, one edge: a level-triggered router would have
    // flipped the ring back to Moving.
    let (moving, _) = ring_state(&mut app, 0);
    assert!(!moving);
}

#[test]
fn separate_presses_toggle_each_time() {
    let mut app = harness();
    app.add_systems(Update, toggle_ring_motion);
    app.world_mut()
        .spawn((CarouselRing::new(0), Transform::default()));

    press(&mut app, KeyCode::Digit1);
    frame(&mut app);
    release(&mut app, KeyCode::Digit1);
    frame(&mut app);
    press(&mut app, KeyCode::Digit1);
    frame(&mut app);

    let (moving, _) = ring_state(&mut app, 0);
    assert!(moving, "press/release/press must land back on Moving");
}

#[test]
fn only_the_matching_ring_toggles() {
    let mut app = harness();
    app.add_systems(Update, toggle_ring_motion);
    for index in 0..3 {
        app.world_mut()
            .spawn((CarouselRing::new(index), Transform::default()));
    }

    press(&mut app, KeyCode::Digit2);
    frame(&mut app);

    assert!(ring_state(&mut app, 0).0);
    assert!(!ring_state(&mut app, 1).0);
    assert!(ring_state(&mut app, 2).0);
}

#[test]
fn paused_ring_holds_while_the_rest_oscillate() {
    let mut app = harness();
    app.add_systems(Update, (toggle_ring_motion, animate_rings).chain());
    for index in 0..3 {
        app.world_mut()
            .spawn((CarouselRing::new(index), Transform::default()));
    }

    // Let everything move a little first.
    for _ in 0..5 {
        advance(&mut app, 0.02);
        frame(&mut app);
    }

    press(&mut app, KeyCode::Digit1);
    frame(&mut app);
    let (_, frozen_y) = ring_state(&mut app, 0);
    let (_, other_y) = ring_state(&mut app, 1);

    for _ in 0..20 {
        advance(&mut app, 0.02);
        frame(&mut app);
    }

    assert_eq!(ring_state(&mut app, 0).1, frozen_y);
    assert_ne!(ring_state(&mut app, 1).1, other_y);
}

#[test]
fn preset_swaps_keep_each_meshes_color() {
    let mut app = harness();
    app.insert_resource(Assets::<StandardMaterial>::default());
    app.init_resource::<ShadingState>();
    app.add_systems(Update, apply_shading_preset);

    let red = Color::srgb(1.0, 0.0, 0.0);
    let blue = Color::srgb(0.0, 0.0, 1.0);
    let (red_mesh, blue_mesh) = {
        let world = app.world_mut();
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let red_handle = materials.add(ShadingMode::Diffuse.material(red));
        let blue_handle = materials.add(ShadingMode::Diffuse.material(blue));
        let red_mesh = world.spawn((CarouselMesh, MeshMaterial3d(red_handle))).id();
        let blue_mesh = world.spawn((CarouselMesh, MeshMaterial3d(blue_handle))).id();
        (red_mesh, blue_mesh)
    };

    press(&mut app, KeyCode::KeyW);
    frame(&mut app);
    press(&mut app, KeyCode::KeyE);
    frame(&mut app);

    let material_of = |app: &App, entity: Entity| -> StandardMaterial {
        let handle = &app
            .world()
            .entity(entity)
            .get::<MeshMaterial3d<StandardMaterial>>()
            .unwrap()
            .0;
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .unwrap()
            .clone()
    };

    let red_material = material_of(&app, red_mesh);
    let blue_material = material_of(&app, blue_mesh);
    assert_eq!(red_material.base_color, red);
    assert_eq!(blue_material.base_color, blue);
    // Two presets later the surface parameters must be Metallic's.
    assert_eq!(red_material.metallic, 1.0);
    assert_eq!(blue_material.metallic, 1.0);
    assert_eq!(
        app.world().resource::<ShadingState>().current,
        ShadingMode::Metallic
    );
}

#[test]
fn directional_light_flips_visibility_on_the_edge() {
    let mut app = harness();
    app.add_systems(Update, toggle_directional_light);
    let sun = app
        .world_mut()
        .spawn((DirectionalLight::default(), Visibility::default()))
        .id();

    press(&mut app, KeyCode::KeyD);
    for _ in 0..10 {
        frame(&mut app);
    }
    assert_eq!(
        *app.world().entity(sun).get::<Visibility>().unwrap(),
        Visibility::Hidden
    );

    release(&mut app, KeyCode::KeyD);
    frame(&mut app);
    press(&mut app, KeyCode::KeyD);
    frame(&mut app);
    assert_eq!(
        *app.world().entity(sun).get::<Visibility>().unwrap(),
        Visibility::Inherited
    );
}
