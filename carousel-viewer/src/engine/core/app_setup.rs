use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::PresentMode;

// Crate engine modules
use crate::engine::assets::sky::{LoadingProgress, SkyAssets, check_sky_texture, start_loading};
use crate::engine::camera::spawn_camera;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::rng::SceneRng;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::gizmos::{AxesGizmo, draw_axes_gizmo, toggle_axes_gizmo};
use crate::engine::scene::build_scene_when_ready;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::lighting::{
    toggle_directional_light, toggle_spotlights, toggle_strip_lights,
};
use crate::engine::systems::ring_motion::{animate_rings, toggle_ring_motion};
use crate::engine::systems::rotation::{CarouselMotion, rotate_carousel, spin_decorations};
use crate::engine::systems::shading::{ShadingState, apply_shading_preset};

pub fn create_app(config: ViewerConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(&config))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(LogDiagnosticsPlugin::default())
        .init_state::<AppState>();

    // The scene randomizer also fixes the carousel spin for the session,
    // drawn here so a seeded run replays the same direction.
    let mut rng = SceneRng::from_seed_or_entropy(config.seed);
    let motion = CarouselMotion::randomized(&mut rng.0);
    info!(
        "Carousel spins {}",
        if motion.angular_speed > 0.0 {
            "counter-clockwise"
        } else {
            "clockwise"
        }
    );

    app.insert_resource(rng)
        .insert_resource(motion)
        .insert_resource(config)
        .init_resource::<ShadingState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<SkyAssets>()
        .init_resource::<AxesGizmo>();

    // State-based system scheduling
    app.add_systems(Startup, (spawn_camera, spawn_lighting, start_loading))
        .add_systems(
            Update,
            (
                check_sky_texture,
                build_scene_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    let runtime_systems = (
        // Animation
        animate_rings,
        rotate_carousel,
        spin_decorations,
        // Keyboard toggles
        toggle_ring_motion,
        apply_shading_preset,
        toggle_directional_light,
        toggle_spotlights,
        toggle_strip_lights,
        toggle_axes_gizmo,
        draw_axes_gizmo,
    );
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn create_default_plugins(config: &ViewerConfig) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(config)),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config(config: &ViewerConfig) -> Window {
    let present_mode = if config.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: config.window_title.clone(),
            resolution: (config.window_width, config.window_height).into(),
            present_mode,
            ..default()
        }
    }
}
