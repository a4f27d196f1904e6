/// Global carousel revolution and per-decoration spin.
use bevy::prelude::*;
use rand::Rng;

use crate::engine::scene::carousel::Carousel;
use crate::engine::scene::mobius::MobiusStrip;
use constants::motion::{CAROUSEL_ANGULAR_SPEED, DECORATION_SPIN_SPEED};

/// Spin direction and rate of the whole installation, drawn once at
/// startup and fixed for the session.
#[derive(Resource)]
pub struct CarouselMotion {
    pub angular_speed: f32,
}

impl CarouselMotion {
    /// Draws -1 or +1 by rejection, so a standstill carousel can never
    /// come out of the randomizer.
    pub fn randomized(rng: &mut impl Rng) -> Self {
        let direction = loop {
            let candidate: i32 = rng.gen_range(-1..=1);
            if candidate != 0 {
                break candidate;
            }
        };
        Self {
            angular_speed: direction as f32 * CAROUSEL_ANGULAR_SPEED,
        }
    }
}

/// Decorative surface seated on a ring; spins about its own local
/// vertical axis, independent of the global revolution.
#[derive(Component)]
pub struct RingDecoration {
    pub spin_rate: f32,
}

impl Default for RingDecoration {
    fn default() -> Self {
        Self {
            spin_rate: DECORATION_SPIN_SPEED,
        }
    }
}

/// Revolves the carousel and the Möbius strip around the world Y axis at
/// the session's fixed rate.
pub fn rotate_carousel(
    time: Res<Time>,
    motion: Res<CarouselMotion>,
    mut roots: Query<&mut Transform, Or<(With<Carousel>, With<MobiusStrip>)>>,
) {
    let angle = motion.angular_speed * time.delta_secs();
    for mut transform in &mut roots {
        transform.rotate_y(angle);
    }
}

pub fn spin_decorations(
    time: Res<Time>,
    mut decorations: Query<(&RingDecoration, &mut Transform)>,
) {
    for (decoration, mut transform) in &mut decorations {
        transform.rotate_local_y(decoration.spin_rate * time.delta_secs());
    }
}
