use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Owns every random draw the scene makes: surface shuffles, decoration
/// colors and the carousel spin direction all pull from here, so a fixed
/// seed reproduces the exact same scene.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Scene randomizer seeded with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self(rng)
    }
}
