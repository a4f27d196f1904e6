use bevy::prelude::*;

use crate::engine::assets::sky::LoadingProgress;

/// Top-level lifecycle: the app stays in `Loading` until the sky texture
/// has resolved and the scene is spawned, then runs the carousel.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_built {
        info!("Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
