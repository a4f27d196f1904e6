/// Material presets for the carousel meshes.
///
/// A preset press rebuilds the material of every mesh in the carousel
/// subtree while keeping each mesh's own base color, so recoloring is a
/// parameter swap rather than a repaint.
use bevy::prelude::*;

use crate::engine::scene::carousel::CarouselMesh;
use constants::keys::SHADING_KEYS;

/// The five surface treatments, index-aligned with `SHADING_KEYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    Diffuse,
    Glossy,
    Metallic,
    Emissive,
    Unlit,
}

impl ShadingMode {
    pub const PALETTE: [ShadingMode; 5] = [
        ShadingMode::Diffuse,
        ShadingMode::Glossy,
        ShadingMode::Metallic,
        ShadingMode::Emissive,
        ShadingMode::Unlit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShadingMode::Diffuse => "diffuse",
            ShadingMode::Glossy => "glossy",
            ShadingMode::Metallic => "metallic",
            ShadingMode::Emissive => "emissive",
            ShadingMode::Unlit => "unlit",
        }
    }

    /// Builds a fresh material carrying `base_color` under this preset.
    /// All presets render both faces: the decorations are open sheets.
    pub fn material(self, base_color: Color) -> StandardMaterial {
        let mut material = StandardMaterial {
            base_color,
            double_sided: true,
            cull_mode: None,
            ..default()
        };
        match self {
            ShadingMode::Diffuse => {
                material.perceptual_roughness = 1.0;
                material.reflectance = 0.0;
            }
            ShadingMode::Glossy => {
                material.perceptual_roughness = 0.15;
                material.reflectance = 0.5;
            }
            ShadingMode::Metallic => {
                material.metallic = 1.0;
                material.perceptual_roughness = 0.35;
            }
            ShadingMode::Emissive => {
                material.emissive = base_color.to_linear() * 2.0;
                material.perceptual_roughness = 1.0;
            }
            ShadingMode::Unlit => {
                material.unlit = true;
            }
        }
        material
    }
}

/// Currently selected preset.
#[derive(Resource)]
pub struct ShadingState {
    pub current: ShadingMode,
}

impl Default for ShadingState {
    fn default() -> Self {
        Self {
            current: ShadingMode::Diffuse,
        }
    }
}

fn requested_mode(keys: &ButtonInput<KeyCode>) -> Option<ShadingMode> {
    SHADING_KEYS
        .iter()
        .zip(ShadingMode::PALETTE)
        .find_map(|(key, mode)| keys.just_pressed(*key).then_some(mode))
}

/// Swaps every carousel mesh onto the pressed preset, reading each mesh's
/// base color out of its old material first.
pub fn apply_shading_preset(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<ShadingState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut targets: Query<&mut MeshMaterial3d<StandardMaterial>, With<CarouselMesh>>,
) {
    let Some(mode) = requested_mode(&keys) else {
        return;
    };
    state.current = mode;

    let mut count = 0;
    for mut slot in &mut targets {
        let Some(base_color) = materials.get(&slot.0).map(|m| m.base_color) else {
            continue;
        };
        slot.0 = materials.add(mode.material(base_color));
        count += 1;
    }
    info!("Shading preset '{}' applied to {count} meshes", mode.label());
}
