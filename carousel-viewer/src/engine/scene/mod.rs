pub mod carousel;
pub mod lighting;
pub mod mobius;
pub mod skydome;

use bevy::prelude::*;

use crate::engine::assets::sky::{LoadingProgress, SkyAssets};
use crate::engine::core::rng::SceneRng;
use crate::engine::systems::shading::ShadingState;

/// Spawns the whole scene once the sky texture has resolved one way or the
/// other. Runs during the loading phase and fires exactly once; the state
/// transition picks up `scene_built` afterwards.
pub fn build_scene_when_ready(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut progress: ResMut<LoadingProgress>,
    mut rng: ResMut<SceneRng>,
    shading: Res<ShadingState>,
    sky: Res<SkyAssets>,
) {
    if !progress.sky_resolved || progress.scene_built {
        return;
    }

    let texture = progress.sky_available.then(|| sky.texture.clone());
    carousel::spawn_carousel(&mut commands, &mut meshes, &mut materials, &shading, &mut rng.0);
    mobius::spawn_mobius_strip(&mut commands, &mut meshes, &mut materials);
    skydome::spawn_skydome(&mut commands, &mut meshes, &mut materials, texture);

    progress.scene_built = true;
}
