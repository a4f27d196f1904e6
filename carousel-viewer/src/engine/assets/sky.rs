use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::core::viewer_config::ViewerConfig;

/// Handle for the skydome texture while it loads.
#[derive(Resource, Default)]
pub struct SkyAssets {
    pub texture: Handle<Image>,
}

/// Loading-phase bookkeeping polled by the state transitions.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    /// The texture either loaded or definitively failed.
    pub sky_resolved: bool,
    /// The texture is usable; false means fall back to a flat sky color.
    pub sky_available: bool,
    pub scene_built: bool,
}

pub fn start_loading(
    config: Res<ViewerConfig>,
    asset_server: Res<AssetServer>,
    mut sky: ResMut<SkyAssets>,
    mut progress: ResMut<LoadingProgress>,
) {
    if config.sky_texture.is_empty() {
        info!("No skydome texture configured, using the flat sky color");
        progress.sky_resolved = true;
        return;
    }
    info!("Loading skydome texture from {}", config.sky_texture);
    sky.texture = asset_server.load(config.sky_texture.as_str());
}

/// Polls the texture until it loads or fails. A failure is not fatal: the
/// dome is spawned with a flat color instead.
pub fn check_sky_texture(
    asset_server: Res<AssetServer>,
    sky: Res<SkyAssets>,
    mut progress: ResMut<LoadingProgress>,
) {
    if progress.sky_resolved {
        return;
    }
    match asset_server.get_load_state(&sky.texture) {
        Some(LoadState::Loaded) => {
            info!("Skydome texture loaded");
            progress.sky_resolved = true;
            progress.sky_available = true;
        }
        Some(LoadState::Failed(err)) => {
            warn!("Skydome texture failed to load ({err}), using the flat sky color");
            progress.sky_resolved = true;
        }
        _ => {}
    }
}
