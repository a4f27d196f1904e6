/// Keyboard toggles for the three light groups.
use bevy::prelude::*;

use crate::engine::scene::carousel::DecorationLight;
use crate::engine::scene::mobius::StripLight;
use constants::keys::{DIRECTIONAL_LIGHT_KEY, SPOTLIGHT_KEY, STRIP_LIGHT_KEY};

fn flip(visibility: &mut Visibility) {
    *visibility = match *visibility {
        Visibility::Hidden => Visibility::Inherited,
        _ => Visibility::Hidden,
    };
}

pub fn toggle_directional_light(
    keys: Res<ButtonInput<KeyCode>>,
    mut suns: Query<&mut Visibility, With<DirectionalLight>>,
) {
    if !keys.just_pressed(DIRECTIONAL_LIGHT_KEY) {
        return;
    }
    for mut visibility in &mut suns {
        flip(&mut visibility);
        info!("Directional light now {:?}", *visibility);
    }
}

/// Flips all ring spotlights at once. They are children of their rings, so
/// hiding them does not stop them riding the ring motion.
pub fn toggle_spotlights(
    keys: Res<ButtonInput<KeyCode>>,
    mut spots: Query<&mut Visibility, With<DecorationLight>>,
) {
    if !keys.just_pressed(SPOTLIGHT_KEY) {
        return;
    }
    let mut count = 0;
    for mut visibility in &mut spots {
        flip(&mut visibility);
        count += 1;
    }
    info!("Toggled {count} ring spotlights");
}

pub fn toggle_strip_lights(
    keys: Res<ButtonInput<KeyCode>>,
    mut lights: Query<&mut Visibility, With<StripLight>>,
) {
    if !keys.just_pressed(STRIP_LIGHT_KEY) {
        return;
    }
    let mut count = 0;
    for mut visibility in &mut lights {
        flip(&mut visibility);
        count += 1;
    }
    info!("Toggled {count} strip lights");
}
